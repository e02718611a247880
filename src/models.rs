//! Frontend Models
//!
//! Data structures matching the treasure records the server embeds in the page.

use serde::{Deserialize, Deserializer};

/// Treasure data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Treasure {
    #[serde(deserialize_with = "text_or_number")]
    pub id: String,
    pub name: String,
    /// Decimal value, kept as the server formatted it
    #[serde(deserialize_with = "text_or_number")]
    pub value: String,
    pub material: String,
    pub location: String,
}

impl Treasure {
    /// Path of the treasure's detail page
    pub fn detail_path(&self) -> String {
        format!("/{}/", self.id)
    }
}

/// Accept either a JSON string or number and keep its text form
fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("expected string or number, got {other}"))),
    }
}
