use serde::{Deserialize, Serialize};
use validator::Validate;

/// Cap on `notification_text`, in UTF-8 bytes.
pub const MAX_NOTIFICATION_TEXT_BYTES: usize = 255;

/// Body of `POST /api/v1/notification`.
///
/// Absent fields decode as empty strings so that they are reported by the
/// validator as required rather than as a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct NotificationParams {
    pub phone: String,

    pub company_name: String,

    #[validate(custom(function = "within_text_byte_limit"))]
    pub notification_text: String,
}

impl NotificationParams {
    pub fn new(phone: &str, company_name: &str, notification_text: &str) -> Self {
        NotificationParams {
            phone: phone.to_string(),
            company_name: company_name.to_string(),
            notification_text: notification_text.to_string(),
        }
    }
}

// `length(max = ..)` counts chars; the cap is on the encoded size.
fn within_text_byte_limit(text: &str) -> Result<(), validator::ValidationError> {
    if text.len() > MAX_NOTIFICATION_TEXT_BYTES {
        return Err(validator::ValidationError::new("notification_text_too_long"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_as_empty() {
        let params: NotificationParams = serde_json::from_str(r#"{"phone":"79123456789"}"#).unwrap();
        assert_eq!(params.phone, "79123456789");
        assert!(params.company_name.is_empty());
        assert!(params.notification_text.is_empty());
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<NotificationParams>(r#"{"phone":79123456789}"#);
        assert!(result.is_err());
    }

    #[test]
    fn text_rule_counts_bytes() {
        let ascii = "a".repeat(MAX_NOTIFICATION_TEXT_BYTES);
        let params = NotificationParams::new("79123456789", "ООО Ромашка", &ascii);
        assert!(params.validate().is_ok());

        // 128 two-byte letters: 256 bytes.
        let cyrillic = "я".repeat(128);
        let params = NotificationParams::new("79123456789", "ООО Ромашка", &cyrillic);
        assert!(params.validate().is_err());
    }
}
