use chrono::{NaiveDateTime, SubsecRound};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::ContextDefinition;
use crate::clock::{Clock, SystemClock};
use crate::codec::{LocalDateTimeCodec, ValueCodec};
use crate::config::Configuration;
use crate::errors::Result;
use crate::subject::CalculatedSubject;

pub const TIME: &str = "time";
pub const BEFORE_TIME: &str = "before-time";
pub const AFTER_TIME: &str = "after-time";

/// How a current time is compared against a rule's time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOrdering {
    /// Same second.
    Exact,
    /// Current time strictly before the rule's time.
    Before,
    /// Current time strictly after the rule's time.
    After,
}

/// Local date-time contexts, compared at second precision.
///
/// The three variants share the clock, the codec and accumulation; only the
/// comparison differs.
pub struct TimeContextDefinition {
    name: String,
    ordering: TimeOrdering,
    clock: Arc<dyn Clock>,
    codec: LocalDateTimeCodec,
}

impl TimeContextDefinition {
    pub fn new(name: impl Into<String>, ordering: TimeOrdering) -> Self {
        Self::with_clock(name, ordering, Arc::new(SystemClock))
    }

    pub fn with_clock(name: impl Into<String>, ordering: TimeOrdering, clock: Arc<dyn Clock>) -> Self {
        Self {
            name: name.into(),
            ordering,
            codec: LocalDateTimeCodec::new(Arc::clone(&clock)),
            clock,
        }
    }

    /// `time`: matches during the exact second.
    pub fn exact() -> Self {
        Self::new(TIME, TimeOrdering::Exact)
    }

    /// `before-time`: matches while the current time precedes the rule's.
    pub fn before() -> Self {
        Self::new(BEFORE_TIME, TimeOrdering::Before)
    }

    /// `after-time`: matches once the current time passes the rule's.
    pub fn after() -> Self {
        Self::new(AFTER_TIME, TimeOrdering::After)
    }

    pub fn ordering(&self) -> TimeOrdering {
        self.ordering
    }
}

impl fmt::Debug for TimeContextDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeContextDefinition")
            .field("name", &self.name)
            .field("ordering", &self.ordering)
            .finish_non_exhaustive()
    }
}

impl ContextDefinition for TimeContextDefinition {
    type Value = NaiveDateTime;

    fn name(&self) -> &str {
        &self.name
    }

    fn serialize(&self, value: &NaiveDateTime) -> String {
        self.codec.serialize(value)
    }

    fn deserialize(&self, canonical: &str) -> Result<NaiveDateTime> {
        self.codec.deserialize(&self.name, canonical)
    }

    fn matches(&self, own: &NaiveDateTime, test: &NaiveDateTime) -> bool {
        let own = own.trunc_subsecs(0);
        let test = test.trunc_subsecs(0);
        match self.ordering {
            TimeOrdering::Exact => test == own,
            TimeOrdering::Before => test < own,
            TimeOrdering::After => test > own,
        }
    }

    fn update(&self, config: &Configuration) {
        // TODO: apply `time-zone` by swapping in a clock for the named zone.
        if let Some(zone) = &config.time_zone {
            debug!(context = %self.name, zone = %zone, "time zone setting not applied yet");
        }
    }

    fn accumulate_current_values(
        &self,
        _subject: &CalculatedSubject,
        emit: &mut dyn FnMut(NaiveDateTime),
    ) {
        emit(self.clock.now().trunc_subsecs(0));
    }
}
