// API types module
// Order submission as sent by the Mini App front-end

use serde_json::{Map, Value};

/// A submitted service order.
///
/// The front-end posts a JSON object with `name`, `service`, `contact` and
/// `description` keys, all optional and untyped, plus whatever extra fields
/// it chooses to attach (the Telegram WebApp user object, for one). The raw
/// mapping is kept verbatim for persistence; the four known fields are read
/// tolerantly.
#[derive(Debug, Clone)]
pub struct OrderSubmission {
    fields: Map<String, Value>,
}

impl OrderSubmission {
    /// Parse a request body as an order submission.
    ///
    /// Anything that is not a JSON object is rejected; missing or
    /// non-string fields are not.
    pub fn from_slice(body: &[u8]) -> Result<Self, String> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| format!("Invalid JSON body: {e}"))?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(format!(
                "Expected a JSON object, got {}",
                json_type_name(&other)
            )),
        }
    }

    /// The raw submitted mapping, exactly as received
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn name(&self) -> Option<&str> {
        self.text_field("name")
    }

    pub fn service(&self) -> Option<&str> {
        self.text_field("service")
    }

    pub fn contact(&self) -> Option<&str> {
        self.text_field("contact")
    }

    pub fn description(&self) -> Option<&str> {
        self.text_field("description")
    }

    /// Read a field as text; absent, null, or non-string values yield None
    fn text_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// Human-readable JSON type name for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_submission() {
        let body = r#"{
            "name": "Иван",
            "service": "telegram-bot",
            "contact": "@ivan",
            "description": "Бот для записи клиентов"
        }"#;
        let submission = OrderSubmission::from_slice(body.as_bytes()).unwrap();
        assert_eq!(submission.name(), Some("Иван"));
        assert_eq!(submission.service(), Some("telegram-bot"));
        assert_eq!(submission.contact(), Some("@ivan"));
        assert_eq!(submission.description(), Some("Бот для записи клиентов"));
    }

    #[test]
    fn test_missing_fields_become_none() {
        let submission = OrderSubmission::from_slice(br#"{"name": "Anna"}"#).unwrap();
        assert_eq!(submission.name(), Some("Anna"));
        assert_eq!(submission.service(), None);
        assert_eq!(submission.contact(), None);
        assert_eq!(submission.description(), None);
    }

    #[test]
    fn test_non_string_fields_become_none() {
        let submission =
            OrderSubmission::from_slice(br#"{"name": 42, "service": null}"#).unwrap();
        assert_eq!(submission.name(), None);
        assert_eq!(submission.service(), None);
    }

    #[test]
    fn test_extra_fields_preserved() {
        let body = br#"{"name": "Anna", "telegram_user": {"id": 7, "username": "anna"}}"#;
        let submission = OrderSubmission::from_slice(body).unwrap();
        assert!(submission.fields().contains_key("telegram_user"));
        assert_eq!(submission.fields()["telegram_user"]["id"], 7);
    }

    #[test]
    fn test_non_object_bodies_rejected() {
        assert!(OrderSubmission::from_slice(b"[1, 2, 3]").is_err());
        assert!(OrderSubmission::from_slice(b"\"order\"").is_err());
        assert!(OrderSubmission::from_slice(b"not json at all").is_err());
        assert!(OrderSubmission::from_slice(b"").is_err());
    }
}
