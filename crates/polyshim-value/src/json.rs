//! JSON import.
//!
//! Object keys keep document order (serde_json is built with
//! `preserve_order`), so an imported object iterates the way it was written.

use serde_json::Value as Json;
use thiserror::Error;

use crate::model::{Array, Object, Value};

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            // Every JSON number fits a double, possibly rounded.
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect::<Array>()),
            Json::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl Value {
    /// Parse JSON text into a host value.
    pub fn from_json_str(s: &str) -> Result<Value, ValueError> {
        let json: Json = serde_json::from_str(s)?;
        Ok(Value::from(json))
    }
}
