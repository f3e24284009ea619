use itertools::Itertools;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use super::ContextDefinition;
use crate::codec::{IdentityCodec, ValueCodec};
use crate::config::Configuration;
use crate::errors::Result;
use crate::subject::CalculatedSubject;

pub const SERVER_TAG: &str = "server-tag";

/// Matches rules against the tags this server is configured with.
///
/// Tags are process-wide: every subject sees the same active set.
#[derive(Debug, Default)]
pub struct ServerTagContextDefinition {
    active_tags: RwLock<Arc<Vec<String>>>,
}

impl ServerTagContextDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the tags installed by the last `update`.
    pub fn active_tags(&self) -> Arc<Vec<String>> {
        Arc::clone(&self.active_tags.read())
    }
}

impl ContextDefinition for ServerTagContextDefinition {
    type Value = String;

    fn name(&self) -> &str {
        SERVER_TAG
    }

    fn serialize(&self, value: &String) -> String {
        IdentityCodec.serialize(value)
    }

    fn deserialize(&self, canonical: &str) -> Result<String> {
        IdentityCodec.deserialize(SERVER_TAG, canonical)
    }

    fn matches(&self, own: &String, test: &String) -> bool {
        own == test
    }

    fn update(&self, config: &Configuration) {
        let tags = Arc::new(config.server_tags.clone());
        debug!(
            count = tags.len(),
            tags = %tags.iter().join(", "),
            "updating active server tags"
        );
        *self.active_tags.write() = tags;
    }

    fn accumulate_current_values(
        &self,
        _subject: &CalculatedSubject,
        emit: &mut dyn FnMut(String),
    ) {
        // The read lock is released before any value is emitted.
        let tags = self.active_tags();
        tags.iter().cloned().for_each(emit);
    }
}
