//! # Duration Parsing
//!
//! Parses Kubernetes duration strings such as `300s`, `5m0s`, `1h30m`, `1.5h` or `250ms`.

use crate::error::ReleaseError;
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

static DURATION_COMPONENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<number>\d+(?:\.\d+)?)(?P<unit>ms|h|m|s)")
        .expect("Failed to compile duration regex - this should never happen")
});

/// Parse a Kubernetes duration string for the given field
///
/// A duration is one or more `<number><unit>` components, with units `ms`, `s`, `m`
/// and `h`. A bare `0` is accepted as zero.
///
/// # Errors
///
/// Returns [`ReleaseError::InvalidDuration`] naming `field` when the string is empty,
/// contains anything besides duration components, or overflows.
pub fn parse_kubernetes_duration(
    field: &'static str,
    value: &str,
) -> Result<Duration, ReleaseError> {
    let invalid = |reason: &str| ReleaseError::InvalidDuration {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid("duration string cannot be empty"));
    }
    if trimmed == "0" {
        return Ok(Duration::ZERO);
    }

    let mut seconds = 0f64;
    let mut consumed = 0;
    for captures in DURATION_COMPONENT.captures_iter(trimmed) {
        let (Some(component), Some(number), Some(unit)) = (
            captures.get(0),
            captures.name("number"),
            captures.name("unit"),
        ) else {
            return Err(invalid("malformed duration component"));
        };
        if component.start() != consumed {
            return Err(invalid(
                "expected <number><unit> components (e.g. '5m0s', '1h30m', '300s')",
            ));
        }
        consumed = component.end();

        let number: f64 = number
            .as_str()
            .parse()
            .map_err(|e| invalid(&format!("invalid number '{}': {e}", number.as_str())))?;
        let unit_seconds = match unit.as_str() {
            "ms" => 0.001,
            "s" => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            other => return Err(invalid(&format!("unknown unit '{other}'"))),
        };
        seconds += number * unit_seconds;
    }

    if consumed != trimmed.len() {
        return Err(invalid(
            "expected <number><unit> components (e.g. '5m0s', '1h30m', '300s')",
        ));
    }

    Duration::try_from_secs_f64(seconds).map_err(|e| invalid(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: &str) -> Result<Duration, ReleaseError> {
        parse_kubernetes_duration("spec.timeout", value)
    }

    #[test]
    fn test_single_units() {
        assert_eq!(parse("300s").unwrap(), Duration::from_secs(300));
        assert_eq!(parse("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse("250ms").unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn test_compound_durations() {
        assert_eq!(parse("5m0s").unwrap(), Duration::from_secs(300));
        assert_eq!(parse("1h30m").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse("1m30s").unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn test_fractional_duration() {
        assert_eq!(parse("1.5h").unwrap(), Duration::from_secs(5400));
    }

    #[test]
    fn test_zero() {
        assert_eq!(parse("0").unwrap(), Duration::ZERO);
        assert_eq!(parse("0s").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(parse(" 10s ").unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn test_empty_is_rejected() {
        assert!(matches!(
            parse(""),
            Err(ReleaseError::InvalidDuration { field: "spec.timeout", .. })
        ));
    }

    #[test]
    fn test_invalid_formats_are_rejected() {
        for value in ["5", "m5", "5x", "5m garbage", "-5s", "5 m", "1d"] {
            assert!(parse(value).is_err(), "expected '{value}' to be rejected");
        }
    }

    #[test]
    fn test_error_names_field_and_value() {
        let err = parse("soon").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("spec.timeout"));
        assert!(message.contains("soon"));
    }
}
