use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field values exactly as the form submitted them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFormInputs {
    #[serde(default)]
    pub food: String,
    #[serde(default)]
    pub drink: String,
    #[serde(default)]
    pub age: String,
}

/// Trimmed and parsed inputs; also the JSON body sent to `/check_gizi`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormInputs {
    pub food: String,
    pub drink: String,
    pub age: i64,
}

/// Response of the remote analysis endpoint. No field is guaranteed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub food: Option<ItemAnalysis>,
    #[serde(default)]
    pub drink: Option<ItemAnalysis>,
    #[serde(default)]
    pub food_error: Option<Value>,
    #[serde(default)]
    pub drink_error: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemAnalysis {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub nutrients: Option<Nutrients>,
    #[serde(default)]
    pub assessment: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Nutrients {
    #[serde(rename = "Kalori", default)]
    pub kalori: Option<Value>,
    #[serde(rename = "Protein", default)]
    pub protein: Option<Value>,
    #[serde(rename = "Karbohidrat", default)]
    pub karbohidrat: Option<Value>,
    #[serde(rename = "Lemak", default)]
    pub lemak: Option<Value>,
    #[serde(rename = "Serat", default)]
    pub serat: Option<Value>,
}

impl AnalysisResult {
    /// Decodes a parsed body. A `null` body is unusable; any other non-object carries no fields.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        match value {
            Value::Object(_) => serde_json::from_value(value),
            Value::Null => Err(serde::de::Error::custom("response body is null")),
            _ => Ok(Self::default()),
        }
    }

    pub fn food_error(&self) -> Option<String> {
        display_value(self.food_error.as_ref())
    }

    pub fn drink_error(&self) -> Option<String> {
        display_value(self.drink_error.as_ref())
    }

    pub fn server_error(&self) -> Option<String> {
        display_value(self.error.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.food.is_none()
            && self.drink.is_none()
            && self.food_error().is_none()
            && self.drink_error().is_none()
    }
}

impl ItemAnalysis {
    pub fn name(&self) -> Option<String> {
        display_value(self.name.as_ref())
    }

    pub fn assessment(&self) -> Option<String> {
        display_value(self.assessment.as_ref())
    }
}

impl Nutrients {
    /// Rows in display order.
    pub fn rows(&self) -> [(&'static str, Option<String>); 5] {
        [
            ("Kalori", display_value(self.kalori.as_ref())),
            ("Protein", display_value(self.protein.as_ref())),
            ("Karbohidrat", display_value(self.karbohidrat.as_ref())),
            ("Lemak", display_value(self.lemak.as_ref())),
            ("Serat", display_value(self.serat.as_ref())),
        ]
    }
}

/// Empty strings, zero, `false` and `null` count as absent.
fn display_value(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".into()),
        _ => None,
    }
}
