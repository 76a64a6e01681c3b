//! Macro for implementing Display and FromStr for option enums
//!
//! Configuration and presentation choices (duration forms, sort orders) are
//! exchanged as lowercase strings. This macro provides both directions with
//! case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use calhours_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Granularity {
//!     Day,
//!     Week,
//! }
//!
//! impl_domain_enum_conversions!(Granularity {
//!     Day => "day",
//!     Week => "week",
//! });
//!
//! assert_eq!("WEEK".parse::<Granularity>(), Ok(Granularity::Week));
//! ```

/// Implements Display and FromStr traits for option enums
///
/// This macro generates:
/// - Display trait: converts enum variants to their lowercase strings
/// - FromStr trait: parses case-insensitive strings to enum variants
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::std::format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    )),
                }
            }
        }
    };
}
