/*
[INPUT]:  Task service JSON schema
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - task records exchanged with the service
[UPDATE]: When the task service schema changes
[UPDATE]: Accept numeric timestamps in TaskExecution
*/

use serde::{Deserialize, Serialize};

/// A named, owned shell command managed by the task service.
///
/// Stored records are not re-validated; null or missing text fields decode as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_lenient_string")]
    pub owner: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_lenient_string")]
    pub command: String,
}

/// Draft of a task collected client-side before it is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFormData {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub command: String,
}

impl TaskFormData {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        owner: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner: owner.into(),
            command: command.into(),
        }
    }
}

/// A single recorded run of a task's command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskExecution {
    #[serde(default, deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub end_time: Option<String>,
    #[serde(default)]
    pub output: Option<String>,
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Timestamps arrive as ISO strings or as epoch milliseconds.
    pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(serde::de::Error::custom(format!(
                "expected timestamp string or number, got {other}"
            ))),
        }
    }
}
