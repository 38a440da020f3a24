//! Raw field sanitization.
//!
//! Coordinate fields arrive as free text and are sometimes corrupted:
//! several coordinates concatenated into one cell by an upstream formatting
//! error, stray labels, or plain garbage. The cleaner extracts the first
//! signed decimal it can find and rejects values outside the plausible
//! coordinate range. It never fails loudly; anything unusable is missing.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Raw values longer than this are assumed to hold several coordinates run
/// together by a formatting error.
const CORRUPTION_THRESHOLD: usize = 100;

/// Largest magnitude a coordinate may have in decimal degrees.
const COORDINATE_RANGE: f64 = 90.0;

static SIGNED_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d+\.\d+").expect("pattern compiles"));

/// Extracts a single cleaned coordinate from a raw field value.
///
/// Blank input, input without a signed-decimal substring, and parsed values
/// outside ±90 degrees all yield `None`. In an oversized field the first
/// signed decimal wins. The service bounding box is checked later by the
/// engine on the assembled (latitude, longitude) pair, not here.
///
/// # Examples
///
/// ```
/// use depot_routes::prepare::clean_coordinate;
///
/// assert_eq!(clean_coordinate("9.9281"), Some(9.9281));
/// assert_eq!(clean_coordinate("lat: -84.0907"), Some(-84.0907));
/// assert_eq!(clean_coordinate("n/a"), None);
/// assert_eq!(clean_coordinate("95.5"), None);
/// ```
pub fn clean_coordinate(raw: &str) -> Option<f64> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    if value.len() > CORRUPTION_THRESHOLD {
        debug!(
            length = value.len(),
            "oversized coordinate field, extracting first match"
        );
    }

    let matched = SIGNED_DECIMAL.find(value)?;
    let coordinate: f64 = matched.as_str().parse().ok()?;
    if coordinate.abs() > COORDINATE_RANGE {
        return None;
    }
    Some(coordinate)
}

/// Parses a raw volume field.
///
/// Full-string numeric parse; anything unparseable or non-finite is
/// missing. Unlike coordinates there is no substring extraction here, a
/// volume cell either is a number or it is not.
pub fn parse_volume(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_coordinate() {
        assert_eq!(clean_coordinate("9.9281"), Some(9.9281));
        assert_eq!(clean_coordinate("-84.0907"), Some(-84.0907));
        assert_eq!(clean_coordinate("  10.125  "), Some(10.125));
    }

    #[test]
    fn test_blank_is_missing() {
        assert_eq!(clean_coordinate(""), None);
        assert_eq!(clean_coordinate("   "), None);
    }

    #[test]
    fn test_no_decimal_is_missing() {
        // The exports always carry a decimal point; a bare integer means
        // the cell held something else.
        assert_eq!(clean_coordinate("9"), None);
        assert_eq!(clean_coordinate("garbage"), None);
        assert_eq!(clean_coordinate("N/A"), None);
    }

    #[test]
    fn test_embedded_coordinate_extracted() {
        assert_eq!(clean_coordinate("lat: 9.93 (gps)"), Some(9.93));
    }

    #[test]
    fn test_concatenated_field_takes_first() {
        // Several coordinates fused into one cell, well past the
        // corruption threshold.
        let raw = "9.123,-84.321,9.555,-84.002,".repeat(5);
        assert!(raw.len() > 100);
        assert_eq!(clean_coordinate(&raw), Some(9.123));
    }

    #[test]
    fn test_out_of_range_is_missing() {
        assert_eq!(clean_coordinate("91.5"), None);
        assert_eq!(clean_coordinate("-120.25"), None);
        // ±90 itself is still a coordinate.
        assert_eq!(clean_coordinate("90.0"), Some(90.0));
        assert_eq!(clean_coordinate("-90.0"), Some(-90.0));
    }

    #[test]
    fn test_parse_volume() {
        assert_eq!(parse_volume("48"), Some(48.0));
        assert_eq!(parse_volume("35.5"), Some(35.5));
        assert_eq!(parse_volume(" 120 "), Some(120.0));
    }

    #[test]
    fn test_parse_volume_rejects_garbage() {
        assert_eq!(parse_volume(""), None);
        assert_eq!(parse_volume("12 cajas"), None);
        assert_eq!(parse_volume("NaN"), None);
        assert_eq!(parse_volume("inf"), None);
    }
}
