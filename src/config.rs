use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::warn;

use crate::errors::{ContextError, Result};

/// Live settings pushed into every context definition through `update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Configuration {
    /// Tags describing this server, matched by the `server-tag` context.
    #[serde(deserialize_with = "lenient_tags")]
    pub server_tags: Vec<String>,

    /// Zone name for time contexts. Accepted but not applied yet.
    pub time_zone: Option<String>,
}

impl Configuration {
    pub fn with_server_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            server_tags: tags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ContextError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ContextError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }
}

// A malformed tag list means "no active tags", never a failed config.
fn lenient_tags<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let items = match raw {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            warn!(value = %other, "server-tags is not a list, ignoring");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(tag) => Some(tag),
            other => {
                warn!(value = %other, "skipping non-string server tag");
                None
            }
        })
        .collect())
}
