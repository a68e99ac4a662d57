use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes a single field, `null` or a value of the wrong type becomes the default.
/// One bad field never throws away the rest of the record.
pub fn field<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value.clone()).unwrap_or_else(|e| {
        warn!("Ignoring undecodable field value {}: {}", value, e);
        T::default()
    }))
}

/// Decodes a list element by element, elements that can not be decoded are skipped
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values: Vec<Value> = field(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value.clone()) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping undecodable list element {}: {}", value, e);
                None
            }
        })
        .collect())
}
