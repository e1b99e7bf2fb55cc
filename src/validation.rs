//! Field-level validation helpers shared by the repositories.

use crate::error::{NavalhaError, NavalhaResult};

/// Minimum number of digits a client/barber phone must carry.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Reject blank identifiers and scope keys before any store access.
pub fn require_id(field: &'static str, value: &str) -> NavalhaResult<()> {
    if value.trim().is_empty() {
        return Err(NavalhaError::MissingField(field));
    }
    Ok(())
}

/// Normalize a phone number to its digits. `"(11) 99999-9999"` and
/// `"11999999999"` compare equal after normalization.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a phone number and return its normalized form.
pub fn require_phone(raw: &str) -> NavalhaResult<String> {
    let digits = normalize_phone(raw);
    if digits.len() < MIN_PHONE_DIGITS {
        return Err(NavalhaError::PhoneTooShort(raw.to_string()));
    }
    Ok(digits)
}

/// Check an `HH:MM` wall-clock time (00-23 hours, 00-59 minutes).
pub fn is_valid_time(value: &str) -> bool {
    let Some((hours, minutes)) = value.split_once(':') else {
        return false;
    };
    if hours.len() != 2 || minutes.len() != 2 {
        return false;
    }
    let (Ok(h), Ok(m)) = (hours.parse::<u8>(), minutes.parse::<u8>()) else {
        return false;
    };
    h < 24 && m < 60
}

/// Validate an appointment time string.
pub fn require_time(value: &str) -> NavalhaResult<()> {
    if !is_valid_time(value) {
        return Err(NavalhaError::InvalidTime(value.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_id_rejects_blank() {
        assert!(require_id("id", "").is_err());
        assert!(require_id("id", "   ").is_err());
        assert!(require_id("id", "client-9").is_ok());
    }

    #[test]
    fn test_normalize_phone_strips_formatting() {
        assert_eq!(normalize_phone("(11) 99999-9999"), "11999999999");
        assert_eq!(normalize_phone("11999999999"), "11999999999");
        assert_eq!(normalize_phone("+55 11 9999-8888"), "551199998888");
    }

    #[test]
    fn test_require_phone_minimum_digits() {
        assert!(require_phone("(11) 99999-9999").is_ok());
        assert!(matches!(
            require_phone("999-9999"),
            Err(NavalhaError::PhoneTooShort(_))
        ));
    }

    #[test]
    fn test_is_valid_time() {
        assert!(is_valid_time("00:00"));
        assert!(is_valid_time("09:00"));
        assert!(is_valid_time("23:59"));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("09:60"));
        assert!(!is_valid_time("9:00"));
        assert!(!is_valid_time("09-00"));
        assert!(!is_valid_time("0900"));
    }
}
