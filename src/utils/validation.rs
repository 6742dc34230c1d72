use regex::Regex;

pub fn is_valid_email(email: &str) -> bool {
    let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
    email_regex.is_match(email)
}

/// Phone in the loose Brazilian formats the signup form accepts:
/// digits with optional punctuation, 10 or 11 digits total.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    (10..=11).contains(&digits.len())
}

pub fn parse_optional_i32(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

pub fn parse_optional_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

/// Empty or whitespace-only form fields become NULL columns.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_emails() {
        assert!(is_valid_email("tutor@example.com"));
        assert!(is_valid_email("maria.silva+pets@mail.com.br"));
        assert!(!is_valid_email("sem-arroba.com"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn valid_phones() {
        assert!(is_valid_phone("(11) 98765-4321"));
        assert!(is_valid_phone("1187654321"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("123456789012"));
    }

    #[test]
    fn optional_parsers() {
        assert_eq!(parse_optional_i32("  7 "), Some(7));
        assert_eq!(parse_optional_i32(""), None);
        assert_eq!(parse_optional_i32("abc"), None);
        assert_eq!(parse_optional_f64("99.9"), Some(99.9));
        assert_eq!(parse_optional_f64("   "), None);
        assert_eq!(non_empty("  oi  "), Some("oi".to_string()));
        assert_eq!(non_empty("   "), None);
    }
}
