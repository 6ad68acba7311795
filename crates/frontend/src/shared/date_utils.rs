/// Date formatting helpers for the Argentine short-date convention.

use chrono::{NaiveDate, Utc};

/// Format an ISO date to the es-AR short form, without leading zeros.
/// Example: "2024-06-01" -> "1/6/2024"
pub fn format_fecha_corta(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%-d/%-m/%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Today's date in ISO form, for prefilling date inputs.
pub fn hoy_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_zeros() {
        assert_eq!(format_fecha_corta("2024-06-01"), "1/6/2024");
        assert_eq!(format_fecha_corta("2024-01-09"), "9/1/2024");
    }

    #[test]
    fn keeps_two_digit_parts() {
        assert_eq!(format_fecha_corta("2024-12-31"), "31/12/2024");
    }

    #[test]
    fn passes_through_unparseable_input() {
        assert_eq!(format_fecha_corta("mañana"), "mañana");
    }
}
