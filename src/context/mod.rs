//! Context definitions: the extension point through which each context kind
//! describes its values, how they match, and which values are currently true.

pub mod fallback;
pub mod server_tag;
pub mod time;

use std::fmt;
use std::sync::Arc;

use crate::config::Configuration;
use crate::errors::Result;
use crate::subject::CalculatedSubject;

/// A named kind of context with its own value type.
///
/// Definitions are built once and shared for the process lifetime, so every
/// method takes `&self`; the only state they keep is whatever `update`
/// refreshes from configuration.
pub trait ContextDefinition: Send + Sync {
    type Value: Clone + fmt::Debug + Send + Sync;

    /// Unique name of this context kind, e.g. `server-tag`.
    fn name(&self) -> &str;

    fn serialize(&self, value: &Self::Value) -> String;

    /// Reads the canonical text of a value. Malformed text is a
    /// [`ContextError::Parse`](crate::errors::ContextError::Parse).
    fn deserialize(&self, canonical: &str) -> Result<Self::Value>;

    /// Whether `test` (a current value) satisfies `own` (the value a rule was
    /// written with). Must depend on the two values only.
    fn matches(&self, own: &Self::Value, test: &Self::Value) -> bool;

    /// Refreshes cached state from a new configuration snapshot. Missing or
    /// malformed settings mean "no active values".
    fn update(&self, config: &Configuration);

    /// Calls `emit` once per value of this kind currently true for `subject`.
    /// Emission order carries no meaning.
    fn accumulate_current_values(
        &self,
        subject: &CalculatedSubject,
        emit: &mut dyn FnMut(Self::Value),
    );

    /// Placeholder definitions stand in for unknown names and never match.
    fn is_fallback(&self) -> bool {
        false
    }

    fn current_values(&self, subject: &CalculatedSubject) -> Vec<Self::Value> {
        let mut values = Vec::new();
        self.accumulate_current_values(subject, &mut |value| values.push(value));
        values
    }

    /// True when some current value for `subject` matches `own`.
    fn is_satisfied(&self, own: &Self::Value, subject: &CalculatedSubject) -> bool {
        if self.is_fallback() {
            return false;
        }
        let mut satisfied = false;
        self.accumulate_current_values(subject, &mut |value| {
            if !satisfied && self.matches(own, &value) {
                satisfied = true;
            }
        });
        satisfied
    }
}

/// Object-safe view of a [`ContextDefinition`] over canonical text, for
/// holding definitions with different value types side by side.
pub trait DynContextDefinition: Send + Sync {
    fn name(&self) -> &str;

    fn is_fallback(&self) -> bool;

    fn update(&self, config: &Configuration);

    /// Deserializes then re-serializes `text`.
    fn canonicalize(&self, text: &str) -> Result<String>;

    fn matches_canonical(&self, own: &str, test: &str) -> Result<bool>;

    fn current_values_canonical(&self, subject: &CalculatedSubject) -> Vec<String>;

    fn is_satisfied_by(&self, own: &str, subject: &CalculatedSubject) -> Result<bool>;
}

/// Adapter produced by [`erase`].
pub struct Erased<D>(Arc<D>);

/// Wraps a shared definition in its text-typed view. The returned handle
/// shares state with `definition`, so updates through either are visible to
/// both.
pub fn erase<D>(definition: Arc<D>) -> Arc<dyn DynContextDefinition>
where
    D: ContextDefinition + 'static,
{
    Arc::new(Erased(definition))
}

impl<D: ContextDefinition> DynContextDefinition for Erased<D> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn is_fallback(&self) -> bool {
        self.0.is_fallback()
    }

    fn update(&self, config: &Configuration) {
        self.0.update(config)
    }

    fn canonicalize(&self, text: &str) -> Result<String> {
        let value = self.0.deserialize(text)?;
        Ok(self.0.serialize(&value))
    }

    fn matches_canonical(&self, own: &str, test: &str) -> Result<bool> {
        let own = self.0.deserialize(own)?;
        let test = self.0.deserialize(test)?;
        Ok(self.0.matches(&own, &test))
    }

    fn current_values_canonical(&self, subject: &CalculatedSubject) -> Vec<String> {
        let mut values = Vec::new();
        self.0
            .accumulate_current_values(subject, &mut |value| values.push(self.0.serialize(&value)));
        values
    }

    fn is_satisfied_by(&self, own: &str, subject: &CalculatedSubject) -> Result<bool> {
        let own = self.0.deserialize(own)?;
        Ok(self.0.is_satisfied(&own, subject))
    }
}

impl fmt::Debug for dyn DynContextDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynContextDefinition")
            .field("name", &self.name())
            .field("fallback", &self.is_fallback())
            .finish()
    }
}

pub use fallback::FallbackContextDefinition;
pub use server_tag::ServerTagContextDefinition;
pub use time::{TimeContextDefinition, TimeOrdering};
