//! Pluggable context matching for permission evaluation.
//!
//! A context scopes a permission grant to circumstances such as "on a server
//! tagged `lobby`" or "before 2024-01-01T00:00:00". Each kind of context is a
//! [`ContextDefinition`] with its own value type; hosts keep them side by
//! side through [`DynContextDefinition`].

pub mod clock;
pub mod codec;
pub mod config;
pub mod context;
pub mod errors;
pub mod logging;
pub mod subject;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Configuration;
pub use context::{
    erase, ContextDefinition, DynContextDefinition, FallbackContextDefinition,
    ServerTagContextDefinition, TimeContextDefinition, TimeOrdering,
};
pub use errors::{ContextError, Result};
pub use subject::CalculatedSubject;

use std::sync::Arc;

/// The built-in context kinds, each ready to be shared with the host's
/// registry: `server-tag`, `time`, `before-time` and `after-time`.
pub fn builtin_definitions() -> Vec<Arc<dyn DynContextDefinition>> {
    vec![
        erase(Arc::new(ServerTagContextDefinition::new())),
        erase(Arc::new(TimeContextDefinition::exact())),
        erase(Arc::new(TimeContextDefinition::before())),
        erase(Arc::new(TimeContextDefinition::after())),
    ]
}
