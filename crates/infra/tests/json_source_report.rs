//! End-to-end report generation over a JSON events export.

use std::io::Write;
use std::sync::Arc;

use calhours_core::{EventClassifier, EventSort, HoursReportService};
use calhours_domain::{ClassifierConfig, EventWindow};
use calhours_infra::JsonFileEventSource;
use chrono::NaiveDate;
use tempfile::NamedTempFile;

const EXPORT: &str = r#"{
    "items": [
        {
            "id": "standup",
            "summary": "[trabajo] Standup",
            "start": {"dateTime": "2024-03-04T09:00:00Z"},
            "end": {"dateTime": "2024-03-04T09:15:00Z"}
        },
        {
            "id": "quick",
            "summary": "Standup",
            "colorId": "6",
            "start": {"dateTime": "2024-03-04T09:00:00Z"},
            "end": {"dateTime": "2024-03-04T09:05:00Z"}
        },
        {
            "id": "training",
            "summary": "duración: 3.5 training",
            "colorId": "3",
            "start": {"dateTime": "2024-03-05T10:00:00Z"},
            "end": {"dateTime": "2024-03-05T10:10:00Z"}
        },
        {
            "id": "workshop",
            "summary": "Workshop",
            "start": {"date": "2024-03-06"},
            "end": {"date": "2024-03-08"}
        },
        {
            "id": "last-month",
            "summary": "[trabajo] Planning",
            "start": {"dateTime": "2024-02-01T09:00:00Z"},
            "end": {"dateTime": "2024-02-01T10:00:00Z"}
        }
    ]
}"#;

fn export_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(EXPORT.as_bytes()).expect("write export");
    file
}

#[tokio::test]
async fn test_report_from_json_export() {
    let file = export_file();
    let source = Arc::new(JsonFileEventSource::new(file.path()));
    let classifier = EventClassifier::from_config(ClassifierConfig::default()).expect("defaults");
    let service = HoursReportService::new(source, classifier);

    let start = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
    let end = NaiveDate::from_ymd_opt(2024, 3, 31).expect("valid date");
    let window = EventWindow::from_dates(start, end).expect("valid window");

    let report = service.generate(&window).await.expect("report");

    assert_eq!(report.events.len(), 3);
    assert_eq!(report.rejections.len(), 1);
    assert_eq!(report.rejections[0].event_id, "quick");

    assert_eq!(report.summary.total_events, 3);
    assert!((report.summary.total_hours - 19.75).abs() < 1e-9);

    let by_hours: Vec<&str> =
        report.list(None, EventSort::HoursDesc).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(by_hours, vec!["workshop", "training", "standup"]);

    let trabajo = report.list(Some("trabajo"), EventSort::DateDesc);
    assert_eq!(trabajo.len(), 1);
    assert_eq!(trabajo[0].id, "standup");
}
