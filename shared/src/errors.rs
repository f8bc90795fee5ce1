//! Error types for the Health Advisor engine

use thiserror::Error;

/// Errors raised by the health metrics engine
///
/// The engine only fails on malformed numeric input. Unrecognized category,
/// activity level or goal strings never raise; they resolve to a default
/// bucket instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),
}

impl MetricsError {
    pub fn invalid(message: impl Into<String>) -> Self {
        MetricsError::InvalidMeasurement(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_measurement_message() {
        let err = MetricsError::invalid("height must be positive");
        assert_eq!(err.to_string(), "Invalid measurement: height must be positive");
    }
}
