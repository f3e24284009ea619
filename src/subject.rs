/// Opaque handle for the entity whose permissions are being evaluated.
///
/// Context kinds receive it during accumulation. None of the built-in kinds
/// look inside it; subject-scoped kinds can read the identifier pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalculatedSubject {
    collection: String,
    identifier: String,
}

impl CalculatedSubject {
    pub fn new(collection: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            identifier: identifier.into(),
        }
    }

    /// Subject type, e.g. `user` or `group`.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}
