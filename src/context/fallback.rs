use super::ContextDefinition;
use crate::codec::{IdentityCodec, ValueCodec};
use crate::config::Configuration;
use crate::errors::Result;
use crate::subject::CalculatedSubject;

/// Stand-in for a context name with no registered definition.
///
/// Values are plain strings compared for equality, but no value is ever
/// active, so a rule scoped to an unknown context is never satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackContextDefinition {
    name: String,
}

impl FallbackContextDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ContextDefinition for FallbackContextDefinition {
    type Value = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn serialize(&self, value: &String) -> String {
        IdentityCodec.serialize(value)
    }

    fn deserialize(&self, canonical: &str) -> Result<String> {
        IdentityCodec.deserialize(&self.name, canonical)
    }

    fn matches(&self, own: &String, test: &String) -> bool {
        own == test
    }

    fn update(&self, _config: &Configuration) {}

    fn accumulate_current_values(&self, _subject: &CalculatedSubject, _emit: &mut dyn FnMut(String)) {}

    fn is_fallback(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_the_unknown_name() {
        assert_eq!(FallbackContextDefinition::new("world").name(), "world");
    }

    #[test]
    fn never_satisfied_even_for_equal_values() {
        let def = FallbackContextDefinition::new("world");
        let subject = CalculatedSubject::new("user", "a");
        def.update(&Configuration::with_server_tags(["world"]));
        assert!(def.matches(&"world".into(), &"world".into()));
        assert!(!def.is_satisfied(&"world".into(), &subject));
        assert!(def.current_values(&subject).is_empty());
    }
}
