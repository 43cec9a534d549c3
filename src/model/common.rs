use std::fmt::{Display, Formatter};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Record identifier. The API hands out numbers, but string ids are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl Default for ItemId {
    fn default() -> Self {
        ItemId::Text(String::new())
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Number(n)
    }
}

/// A payload that is sometimes a bare object and sometimes a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// The object itself, or the first element of the list.
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::Many(items) => items.into_iter().next(),
            OneOrMany::One(item) => Some(item),
        }
    }
}

/// Decode a field the API ships as a JSON-encoded string.
///
/// Absent, blank or malformed input yields `T::default()`.
pub fn decode_json_field<T: DeserializeOwned + Default>(raw: Option<&str>) -> T {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return T::default();
    };
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!(error = %e, "malformed JSON-encoded field, using default");
        T::default()
    })
}

/// Serde adapter around [`decode_json_field`].
///
/// Also accepts the field already decoded (a real array or object).
pub(crate) mod json_string {
    use super::*;

    pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            None | Some(Value::Null) => T::default(),
            Some(Value::String(s)) => decode_json_field(Some(&s)),
            Some(other) => serde_json::from_value(other).unwrap_or_else(|e| {
                warn!(error = %e, "unexpected shape for JSON field, using default");
                T::default()
            }),
        })
    }
}

/// `null` decodes to the type's default instead of failing the record.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Integers that may arrive as numbers or numeric strings.
pub(crate) fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(|n| i32::try_from(n).ok())
            .unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}
