//! Error types for weather table construction and queries.

use thiserror::Error;

/// Errors returned by [`WeatherTable`](crate::WeatherTable) construction and queries.
///
/// Every error is raised at the offending call and never partially recovered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherError {
    /// Input array is empty, ragged, or not made of whole 10-reading days.
    #[error("invalid shape: {0}")]
    Shape(String),

    /// Window size outside `1..=num_days`.
    #[error("window of {k} days is out of range 1..={num_days}")]
    Range { k: usize, num_days: usize },

    /// Operation needs more days than the table holds.
    #[error("operation requires at least {required} days, but table has {available}")]
    InsufficientData { required: usize, available: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_bounds() {
        let err = WeatherError::Range { k: 0, num_days: 3 };
        assert_eq!(err.to_string(), "window of 0 days is out of range 1..=3");

        let err = WeatherError::InsufficientData {
            required: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "operation requires at least 2 days, but table has 1"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let err: anyhow::Error = WeatherError::Shape("empty input".into()).into();
        assert!(err.downcast_ref::<WeatherError>().is_some());
    }
}
