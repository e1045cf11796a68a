/// Reduces raw phone input to the national digit string the booking widget expects.
///
/// Keeps only ASCII digits, then drops a single leading `1` when exactly eleven
/// digits remain. The widget renders its own country picker, so sending `+1` again
/// would double the country code. Nothing else is checked: short or long numbers
/// pass through as their digits.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.strip_prefix('1') {
        Some(national) if digits.len() == 11 => national.to_string(),
        _ => digits,
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_phone;

    #[test]
    fn strips_country_code_from_formatted_us_number() {
        assert_eq!(normalize_phone("+1 (555) 123-4567"), "5551234567");
        assert_eq!(normalize_phone("1-555-123-4567"), "5551234567");
    }

    #[test]
    fn keeps_ten_digit_numbers() {
        assert_eq!(normalize_phone("555-123-4567"), "5551234567");
        assert_eq!(normalize_phone("(555) 123-4567"), "5551234567");
    }

    #[test]
    fn is_idempotent() {
        let once = normalize_phone("+1 555 123 4567");
        assert_eq!(normalize_phone(&once), once);
        assert_eq!(normalize_phone("5551234567"), "5551234567");
    }

    #[test]
    fn only_strips_leading_one_at_eleven_digits() {
        // 11 digits but not a leading 1
        assert_eq!(normalize_phone("25551234567"), "25551234567");
        // 12 digits starting with 1
        assert_eq!(normalize_phone("115551234567"), "115551234567");
        // 10 digits starting with 1 stay as they are
        assert_eq!(normalize_phone("1555123456"), "1555123456");
    }

    #[test]
    fn no_digits_gives_empty_string() {
        assert_eq!(normalize_phone("call me"), "");
        assert_eq!(normalize_phone(""), "");
    }

    #[test]
    fn ignores_non_ascii_digits() {
        assert_eq!(normalize_phone("٥٥٥ 555-123-4567"), "5551234567");
    }
}
