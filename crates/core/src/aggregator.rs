//! Reporting aggregates over classified events
//!
//! Every function here is a pure reduction over a slice of
//! [`NormalizedEvent`]s and is recomputed for each report. For chunked
//! input, [`HoursAccumulator`] builds partial results that merge.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use calhours_domain::utils::title::display_label;
use calhours_domain::{
    ColorConfig, DailyHours, DateRange, HoursSummary, NormalizedEvent, TagTotal,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Event list ordering offered to the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSort {
    /// Newest date first.
    #[default]
    DateDesc,
    /// Longest first.
    HoursDesc,
    /// Alphabetical by display title, case-insensitive.
    TitleAsc,
}

calhours_domain::impl_domain_enum_conversions!(EventSort {
    DateDesc => "date",
    HoursDesc => "hours",
    TitleAsc => "title",
});

/// Summary, daily series and tag totals for one set of events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub summary: HoursSummary,
    /// Ascending by date.
    pub daily: Vec<DailyHours>,
    /// In order of first appearance of each primary tag.
    pub tag_totals: Vec<TagTotal>,
}

/// Mergeable running totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoursAccumulator {
    total_hours: f64,
    total_events: usize,
    daily: BTreeMap<NaiveDate, f64>,
    tag_order: Vec<String>,
    tag_hours: HashMap<String, f64>,
}

impl HoursAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: &NormalizedEvent) {
        self.total_hours += event.hours;
        self.total_events += 1;
        *self.daily.entry(event.date).or_insert(0.0) += event.hours;
        self.add_tag_hours(&event.primary_tag, event.hours);
    }

    fn add_tag_hours(&mut self, tag: &str, hours: f64) {
        if let Some(total) = self.tag_hours.get_mut(tag) {
            *total += hours;
        } else {
            self.tag_order.push(tag.to_string());
            self.tag_hours.insert(tag.to_string(), hours);
        }
    }

    /// Combine with a later chunk. Tags first seen in `other` are appended
    /// after this accumulator's tags.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.total_hours += other.total_hours;
        self.total_events += other.total_events;
        for (date, hours) in other.daily {
            *self.daily.entry(date).or_insert(0.0) += hours;
        }
        for tag in other.tag_order {
            let hours = other.tag_hours.get(&tag).copied().unwrap_or_default();
            self.add_tag_hours(&tag, hours);
        }
        self
    }

    #[must_use]
    pub fn total_events(&self) -> usize {
        self.total_events
    }

    /// Produce the final aggregates.
    #[must_use]
    pub fn finish(self, range: DateRange, colors: &ColorConfig) -> Aggregation {
        #[allow(clippy::cast_precision_loss)]
        let days = range.days_for_average() as f64;
        let summary = HoursSummary {
            total_hours: self.total_hours,
            total_events: self.total_events,
            unique_tags: self.tag_order.len(),
            avg_hours_per_day: self.total_hours / days,
        };

        let daily = self.daily.into_iter().map(|(date, hours)| DailyHours { date, hours }).collect();

        let tag_totals = self
            .tag_order
            .into_iter()
            .enumerate()
            .map(|(index, tag)| {
                let hours = self.tag_hours.get(&tag).copied().unwrap_or_default();
                let color = colors.chart_color(index).unwrap_or_default().to_string();
                TagTotal { label: display_label(&tag), tag, hours, color }
            })
            .collect();

        Aggregation { summary, daily, tag_totals }
    }
}

impl<'a> Extend<&'a NormalizedEvent> for HoursAccumulator {
    fn extend<I: IntoIterator<Item = &'a NormalizedEvent>>(&mut self, iter: I) {
        for event in iter {
            self.push(event);
        }
    }
}

impl<'a> FromIterator<&'a NormalizedEvent> for HoursAccumulator {
    fn from_iter<I: IntoIterator<Item = &'a NormalizedEvent>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// All aggregates in one pass.
#[must_use]
pub fn aggregate(events: &[NormalizedEvent], range: DateRange, colors: &ColorConfig) -> Aggregation {
    events.iter().collect::<HoursAccumulator>().finish(range, colors)
}

/// Headline counters; the average divides by the days in `range`, at least one.
#[must_use]
pub fn summarize(events: &[NormalizedEvent], range: DateRange) -> HoursSummary {
    aggregate(events, range, &ColorConfig::default()).summary
}

/// Hours per date, ascending.
#[must_use]
pub fn daily_series(events: &[NormalizedEvent]) -> Vec<DailyHours> {
    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for event in events {
        *daily.entry(event.date).or_insert(0.0) += event.hours;
    }
    daily.into_iter().map(|(date, hours)| DailyHours { date, hours }).collect()
}

/// Hours per primary tag in first-appearance order, each with a chart color.
#[must_use]
pub fn tag_totals(events: &[NormalizedEvent], colors: &ColorConfig) -> Vec<TagTotal> {
    let mut acc = HoursAccumulator::new();
    for event in events {
        acc.add_tag_hours(&event.primary_tag, event.hours);
    }
    acc.tag_order
        .into_iter()
        .enumerate()
        .map(|(index, tag)| {
            let hours = acc.tag_hours.get(&tag).copied().unwrap_or_default();
            let color = colors.chart_color(index).unwrap_or_default().to_string();
            TagTotal { label: display_label(&tag), tag, hours, color }
        })
        .collect()
}

/// Events whose primary tag equals `tag`; `None` keeps everything.
#[must_use]
pub fn filter_by_tag<'a>(events: &'a [NormalizedEvent], tag: Option<&str>) -> Vec<&'a NormalizedEvent> {
    events.iter().filter(|event| tag.map_or(true, |t| event.primary_tag == t)).collect()
}

/// Stable sort in place.
pub fn sort_events<T: Borrow<NormalizedEvent>>(events: &mut [T], order: EventSort) {
    match order {
        EventSort::DateDesc => events.sort_by(|a, b| as_event(b).date.cmp(&as_event(a).date)),
        EventSort::HoursDesc => {
            events.sort_by(|a, b| as_event(b).hours.total_cmp(&as_event(a).hours));
        }
        EventSort::TitleAsc => events.sort_by(|a, b| compare_titles(as_event(a), as_event(b))),
    }
}

fn as_event<T: Borrow<NormalizedEvent>>(item: &T) -> &NormalizedEvent {
    item.borrow()
}

fn compare_titles(a: &NormalizedEvent, b: &NormalizedEvent) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

/// Filter then sort, as the event list shows them.
#[must_use]
pub fn event_list<'a>(
    events: &'a [NormalizedEvent],
    tag: Option<&str>,
    order: EventSort,
) -> Vec<&'a NormalizedEvent> {
    let mut list = filter_by_tag(events, tag);
    sort_events(&mut list, order);
    list
}

/// Distinct primary tags, sorted, for a tag filter control.
#[must_use]
pub fn tag_options(events: &[NormalizedEvent]) -> Vec<String> {
    events.iter().map(|e| e.primary_tag.clone()).collect::<BTreeSet<_>>().into_iter().collect()
}
