/// Group an integer with dots, the es-AR thousands separator.
/// Example: 1234567 -> "1.234.567"
pub fn format_miles(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Keep only ASCII digits, mirroring the km input filter.
pub fn solo_digitos(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_miles(0), "0");
        assert_eq!(format_miles(999), "999");
        assert_eq!(format_miles(1000), "1.000");
        assert_eq!(format_miles(1234567), "1.234.567");
    }

    #[test]
    fn keeps_sign() {
        assert_eq!(format_miles(-45000), "-45.000");
    }

    #[test]
    fn filters_non_digits() {
        assert_eq!(solo_digitos("12a3 4,5"), "12345");
        assert_eq!(solo_digitos(""), "");
    }
}
