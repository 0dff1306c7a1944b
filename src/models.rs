use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A request field forwarded to the prompt without any type checking.
///
/// Renders the way a JavaScript template literal would: strings as-is,
/// whole floats without a fraction, arrays joined with `,`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PromptValue(pub Value);

fn write_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {

    match value {
        Value::String(text) => f.write_str(text),
        Value::Number(number) => {
            if let Some(n) = number.as_i64() {
                write!(f, "{}", n)
            } else if let Some(n) = number.as_u64() {
                write!(f, "{}", n)
            } else if let Some(n) = number.as_f64() {
                // f64 Display drops the ".0" of whole numbers
                write!(f, "{}", n)
            } else {
                write!(f, "{}", number)
            }
        }
        Value::Bool(flag) => write!(f, "{}", flag),
        Value::Null => f.write_str("null"),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                // null elements render empty inside a joined array
                if !item.is_null() {
                    write_value(item, f)?;
                }
            }
            Ok(())
        }
        Value::Object(_) => f.write_str("[object Object]")
    }

}

impl fmt::Display for PromptValue {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {

        write_value(&self.0, f)

    }

}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipesRequest {
    pub ingredients: PromptValue,
    pub recipe_count: PromptValue
}

// Gemini generateContent payload

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String
}
