//! Schema-validated response shape for delegated extraction.

use serde::{Deserialize, Serialize};

/// The single largest number reported by the hosted model.
///
/// Field-for-field the same shape as a locally extracted record; the
/// response schema passed to the model constrains the reply to exactly
/// this object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberResponse {
    /// The number exactly as it appears in the document.
    pub raw_value: String,
    /// Label or surrounding-text snippet.
    pub context: String,
    /// One of Millions, Billions, Thousands, Percent, None.
    pub modifier: String,
    /// Fully expanded numeric value.
    pub interpreted_value: f64,
    /// Source page, 1-indexed.
    pub page_number: u32,
    /// Table title, empty for running text.
    pub table_name: String,
}

/// JSON response schema in the generative API's OpenAPI subset.
pub fn number_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "raw_value": { "type": "STRING" },
            "context": { "type": "STRING" },
            "modifier": {
                "type": "STRING",
                "enum": ["Millions", "Billions", "Thousands", "Percent", "None"]
            },
            "interpreted_value": { "type": "NUMBER" },
            "page_number": { "type": "INTEGER" },
            "table_name": { "type": "STRING" }
        },
        "required": [
            "raw_value",
            "context",
            "modifier",
            "interpreted_value",
            "page_number",
            "table_name"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_model_reply() {
        let reply = r#"{
            "raw_value": "28,239.2",
            "context": "Total Revenue FY 2023",
            "modifier": "Millions",
            "interpreted_value": 28239200000,
            "page_number": 9,
            "table_name": "AFWCF Financial Summary"
        }"#;

        let parsed: NumberResponse = serde_json::from_str(reply).unwrap();
        assert_eq!(parsed.raw_value, "28,239.2");
        assert_eq!(parsed.modifier, "Millions");
        assert_eq!(parsed.interpreted_value, 28_239_200_000.0);
        assert_eq!(parsed.page_number, 9);
    }

    #[test]
    fn test_reply_missing_fields_is_rejected() {
        let reply = r#"{ "raw_value": "5" }"#;
        assert!(serde_json::from_str::<NumberResponse>(reply).is_err());
    }

    #[test]
    fn test_schema_requires_every_field() {
        let schema = number_response_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 6);
        for field in required {
            let name = field.as_str().unwrap();
            assert!(schema["properties"][name].is_object());
        }
    }
}
