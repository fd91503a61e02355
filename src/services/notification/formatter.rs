use crate::params::requests::notification::NotificationParams;

/// Renders the chat message for an already validated request.
///
/// Fields are interpolated verbatim; the phone keeps the form the client typed.
pub fn format(params: &NotificationParams) -> String {
    format!(
        "Клиент: {};\nТелефон: {};\nТекст обращение: {}",
        params.company_name, params.phone, params.notification_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_fields_in_template_order() {
        let params = NotificationParams::new("+7 912 345 67 89", "Test Company", "Test message");
        assert_eq!(
            format(&params),
            "Клиент: Test Company;\nТелефон: +7 912 345 67 89;\nТекст обращение: Test message"
        );
    }

    #[test]
    fn keeps_quotes_and_newlines_verbatim() {
        let params = NotificationParams::new(
            "8 912 345 67 89",
            "ООО \"Рога и копыта\"",
            "Сообщение с переносами\nстрок",
        );
        assert_eq!(
            format(&params),
            "Клиент: ООО \"Рога и копыта\";\nТелефон: 8 912 345 67 89;\nТекст обращение: Сообщение с переносами\nстрок"
        );
    }

    #[test]
    fn does_not_trim() {
        let params = NotificationParams::new(" 79123456789 ", "  Acme ", "hi ");
        assert_eq!(
            format(&params),
            "Клиент:   Acme ;\nТелефон:  79123456789 ;\nТекст обращение: hi "
        );
    }
}
