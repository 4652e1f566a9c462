//! Console formatting for simulation output.
//!
//! The driver displays vectors as tab-separated coordinates rounded to
//! three decimal places, with a leading space on non-negative entries so
//! the sign column lines up.

use crate::budget::Budget;

/// Formats one coordinate: three decimal places, padded with a leading
/// space where a minus sign would otherwise sit.
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    let rendered = format!("{value:.3}");
    if rendered.starts_with('-') {
        rendered
    } else {
        format!(" {rendered}")
    }
}

/// Formats a budget as one tab-separated, sign-aligned line.
#[must_use]
pub fn format_budget(budget: &Budget) -> String {
    budget
        .coordinates()
        .iter()
        .map(|&v| format_coordinate(v))
        .collect::<Vec<_>>()
        .join("\t")
}

/// Formats the distortion value: three decimal places, no padding.
#[must_use]
pub fn format_distortion(value: f64) -> String {
    format!("{value:.3}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonnegative_coordinates_get_a_leading_space() {
        assert_eq!(format_coordinate(0.5), " 0.500");
        assert_eq!(format_coordinate(0.0), " 0.000");
        assert_eq!(format_coordinate(1.0), " 1.000");
    }

    #[test]
    fn test_negative_coordinates_are_flush() {
        assert_eq!(format_coordinate(-0.5), "-0.500");
        assert_eq!(format_coordinate(-0.0004), "-0.000");
    }

    #[test]
    fn test_rounding_to_three_places() {
        assert_eq!(format_coordinate(0.12345), " 0.123");
        assert_eq!(format_coordinate(0.9999), " 1.000");
    }

    #[test]
    fn test_format_budget_tab_separates_coordinates() {
        let budget = Budget::new(vec![0.5, -0.25, 0.75]).unwrap();
        assert_eq!(format_budget(&budget), " 0.500\t-0.250\t 0.750");
    }

    #[test]
    fn test_format_distortion() {
        assert_eq!(format_distortion(1.0), "1.000");
        assert_eq!(format_distortion(1.23456), "1.235");
    }
}
