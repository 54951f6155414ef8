//! Generic tree bridging catalog values and target records.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Intermediate value produced by [`serialize_record`](crate::serialize_record).
///
/// Scalars are carried as text; the consumer parses them against its own
/// schema. `Object` preserves insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum InterchangeValue {
    Null,
    Scalar(String),
    Sequence(Vec<InterchangeValue>),
    Object(Vec<(String, InterchangeValue)>),
}

impl InterchangeValue {
    pub fn scalar(text: impl Into<String>) -> Self {
        Self::Scalar(text.into())
    }

    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, InterchangeValue)>) -> Self {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Look up `name` in an `Object`; `None` for missing entries and
    /// non-object values.
    pub fn get(&self, name: &str) -> Option<&InterchangeValue> {
        match self {
            InterchangeValue::Object(entries) => {
                entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            InterchangeValue::Null => "null",
            InterchangeValue::Scalar(_) => "scalar",
            InterchangeValue::Sequence(_) => "sequence",
            InterchangeValue::Object(_) => "object",
        }
    }
}

/// Serializes as the equivalent JSON shape: `Scalar` becomes a string,
/// `Object` a map in entry order.
impl Serialize for InterchangeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            InterchangeValue::Null => serializer.serialize_none(),
            InterchangeValue::Scalar(text) => serializer.serialize_str(text),
            InterchangeValue::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            InterchangeValue::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}
