use once_cell::sync::Lazy;
use regex::Regex;
use validator::Validate;

use crate::params::requests::notification::NotificationParams;

// Russian mobile number: optional trunk/country digit, operator prefix 9, nine digits.
static RUSSIAN_MOBILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[78]?9[0-9]{9}$").expect("phone pattern is a valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    FieldRequired(&'static str),

    #[error("notification_text too long")]
    TextTooLong,

    #[error("invalid phone")]
    InvalidPhone,
}

/// Checks a notification request before anything is sent.
///
/// Checks run in a fixed order and the first failure is returned:
/// required fields (`phone`, `company_name`, `notification_text`), the text
/// length cap, then the phone shape.
pub fn validate(params: &NotificationParams) -> Result<(), ValidationError> {
    require(&params.phone, "phone")?;
    require(&params.company_name, "company_name")?;
    require(&params.notification_text, "notification_text")?;

    // The only declarative rule on the type is the text byte cap.
    if params.validate().is_err() {
        return Err(ValidationError::TextTooLong);
    }

    if !is_valid_phone(&params.phone) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(())
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::FieldRequired(field));
    }
    Ok(())
}

pub fn is_valid_phone(phone: &str) -> bool {
    RUSSIAN_MOBILE.is_match(&digits_only(phone))
}

fn digits_only(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::requests::notification::MAX_NOTIFICATION_TEXT_BYTES;

    fn valid() -> NotificationParams {
        NotificationParams::new("+7 912 345 67 89", "Test Company", "Test message")
    }

    #[test]
    fn accepts_valid_request() {
        assert_eq!(validate(&valid()), Ok(()));
    }

    #[test]
    fn empty_or_blank_fields_are_required() {
        for blank in ["", "   ", "\t\n"] {
            let mut params = valid();
            params.phone = blank.to_string();
            assert_eq!(validate(&params), Err(ValidationError::FieldRequired("phone")));

            let mut params = valid();
            params.company_name = blank.to_string();
            assert_eq!(validate(&params), Err(ValidationError::FieldRequired("company_name")));

            let mut params = valid();
            params.notification_text = blank.to_string();
            assert_eq!(
                validate(&params),
                Err(ValidationError::FieldRequired("notification_text"))
            );
        }
    }

    #[test]
    fn first_missing_field_wins() {
        let params = NotificationParams::new("", "", "");
        assert_eq!(validate(&params), Err(ValidationError::FieldRequired("phone")));

        let params = NotificationParams::new("+7 912 345 67 89", " ", "");
        assert_eq!(validate(&params), Err(ValidationError::FieldRequired("company_name")));
    }

    #[test]
    fn text_length_cap() {
        let max = MAX_NOTIFICATION_TEXT_BYTES;

        let mut params = valid();
        params.notification_text = "a".repeat(max);
        assert_eq!(validate(&params), Ok(()));

        params.notification_text = "a".repeat(max + 1);
        assert_eq!(validate(&params), Err(ValidationError::TextTooLong));
    }

    #[test]
    fn text_cap_is_measured_in_bytes() {
        let mut params = valid();

        // 127 two-byte letters plus one ASCII byte: exactly 255 bytes.
        params.notification_text = format!("{}a", "ж".repeat(127));
        assert_eq!(validate(&params), Ok(()));

        // 200 letters, 400 bytes.
        params.notification_text = "я".repeat(200);
        assert_eq!(validate(&params), Err(ValidationError::TextTooLong));
    }

    #[test]
    fn length_is_checked_before_phone() {
        let params = NotificationParams::new("not a phone", "Test Company", &"a".repeat(300));
        assert_eq!(validate(&params), Err(ValidationError::TextTooLong));
    }

    #[test]
    fn phone_shapes() {
        let cases = [
            ("+7 912 345 67 89", true),
            ("8 912 345 67 89", true),
            ("7 912 345 67 89", true),
            ("79123456789", true),
            ("9123456789", true),
            ("+7 (912) 345-67-89", true),
            ("+7 812 345 67 89", false),
            ("+7 912 345 67", false),
            ("+7 912 345 67 89 12", false),
            ("", false),
            ("+7 912 abc 67 89", false),
            ("6 912 345 67 89", false),
            ("+7 ９12 345 67 89", false),
        ];

        for (phone, expected) in cases {
            assert_eq!(is_valid_phone(phone), expected, "phone {:?}", phone);
        }
    }

    #[test]
    fn invalid_phone_error() {
        let mut params = valid();
        params.phone = "invalid phone".to_string();
        assert_eq!(validate(&params), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn error_messages() {
        assert_eq!(ValidationError::FieldRequired("phone").to_string(), "phone is required");
        assert_eq!(ValidationError::TextTooLong.to_string(), "notification_text too long");
        assert_eq!(ValidationError::InvalidPhone.to_string(), "invalid phone");
    }
}
