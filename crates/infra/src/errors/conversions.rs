//! Conversions from external infrastructure errors into domain errors.
//!
//! Failures while reading event data are source errors; the config loader
//! maps its own failures to `CalHoursError::Config` explicitly.

use std::io::{Error as IoError, ErrorKind};

use calhours_domain::CalHoursError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub CalHoursError);

impl From<InfraError> for CalHoursError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CalHoursError> for InfraError {
    fn from(value: CalHoursError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → CalHoursError */
/* -------------------------------------------------------------------------- */

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        let error = match value.kind() {
            ErrorKind::NotFound => CalHoursError::Source("event file not found".into()),
            ErrorKind::PermissionDenied => {
                CalHoursError::Source("permission denied reading event file".into())
            }
            _ => CalHoursError::Source(format!("failed to read event file: {value}")),
        };
        InfraError(error)
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → CalHoursError */
/* -------------------------------------------------------------------------- */

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(CalHoursError::Source(format!(
            "invalid events document at line {} column {}: {value}",
            value.line(),
            value.column()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_source() {
        let err: CalHoursError = InfraError::from(IoError::from(ErrorKind::NotFound)).into();
        assert_eq!(err, CalHoursError::Source("event file not found".into()));
    }

    #[test]
    fn test_json_error_carries_position() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\n  \"items\": [").expect_err("truncated");
        let err: CalHoursError = InfraError::from(json_err).into();

        match err {
            CalHoursError::Source(message) => assert!(message.contains("line 2")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_domain_error_round_trip() {
        let original = CalHoursError::Internal("boom".into());
        let back: CalHoursError = InfraError::from(original.clone()).into();
        assert_eq!(back, original);
    }
}
