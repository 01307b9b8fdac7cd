use serde::Deserialize;
use serde_json::{Map, Value};

/// One configured token entry.
///
/// Kept as an open, order-preserving map rather than a closed struct: the
/// schema pins down the discriminant and the per-variant required fields,
/// but records may carry arbitrary extra scalar or object fields and all of
/// them are emitted into the generated module in their original order.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct TokenRecord(Map<String, Value>);

impl TokenRecord {
    /// The `type` discriminant, when present and a string.
    pub fn token_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// All fields in record order, `type` included.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}
