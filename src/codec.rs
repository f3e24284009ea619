//! Conversions between context values and their canonical text.

use chrono::{Datelike, NaiveDateTime};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::errors::{ContextError, Result};

const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Shape of an ISO-8601 local date-time: zero-padded fields, optional seconds
/// and fraction, nothing around it.
static ISO_LOCAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}(:[0-9]{2}(\.[0-9]{1,9})?)?$")
        .expect("ISO local date-time regex is valid")
});

/// Per-kind serializer for context values.
///
/// `serialize` is total; `deserialize` reports malformed input instead of
/// substituting a default.
pub trait ValueCodec: Send + Sync {
    type Value;

    fn serialize(&self, value: &Self::Value) -> String;

    /// `context` names the definition the text belongs to, for error reporting.
    fn deserialize(&self, context: &str, canonical: &str) -> Result<Self::Value>;
}

/// Strings are their own canonical form.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCodec;

impl ValueCodec for IdentityCodec {
    type Value = String;

    fn serialize(&self, value: &String) -> String {
        value.clone()
    }

    fn deserialize(&self, _context: &str, canonical: &str) -> Result<String> {
        Ok(canonical.to_string())
    }
}

/// ISO-8601 local date-times, with whole epoch seconds accepted on input.
#[derive(Clone)]
pub struct LocalDateTimeCodec {
    clock: Arc<dyn Clock>,
}

impl LocalDateTimeCodec {
    /// `clock` supplies the zone used for epoch-second input.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    fn parse_iso(canonical: &str) -> Option<NaiveDateTime> {
        if !ISO_LOCAL_REGEX.is_match(canonical) {
            return None;
        }
        NaiveDateTime::parse_from_str(canonical, CANONICAL_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(canonical, MINUTE_FORMAT))
            .ok()
    }
}

impl ValueCodec for LocalDateTimeCodec {
    type Value = NaiveDateTime;

    fn serialize(&self, value: &NaiveDateTime) -> String {
        value.format(CANONICAL_FORMAT).to_string()
    }

    fn deserialize(&self, context: &str, canonical: &str) -> Result<NaiveDateTime> {
        if let Some(parsed) = Self::parse_iso(canonical) {
            return Ok(parsed);
        }

        let secs: i64 = canonical.parse().map_err(|_| {
            debug!(context, input = canonical, "rejecting malformed date-time");
            ContextError::parse(
                context,
                canonical,
                "expected a local date-time (YYYY-MM-DDTHH:MM[:SS]) or epoch seconds",
            )
        })?;

        trace!(context, secs, "reading date-time as epoch seconds");
        // Only four-digit years have a canonical form to serialize back to.
        self.clock
            .from_epoch_seconds(secs)
            .filter(|value| (0..=9999).contains(&value.year()))
            .ok_or_else(|| ContextError::parse(context, canonical, "epoch seconds out of range"))
    }
}
