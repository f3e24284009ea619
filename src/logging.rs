//! Optional `tracing` subscriber setup for hosts and tests that do not
//! install their own.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::{ContextError, Result};

/// Environment variable holding an `EnvFilter` directive, e.g. `pex_context=debug`.
pub const LOG_ENV: &str = "PEX_LOG";

/// Installs a global fmt subscriber.
///
/// The filter comes from `PEX_LOG` when set, else from `default_directive`,
/// else `info`. Fails if a global subscriber is already installed.
pub fn init_logging(default_directive: Option<&str>) -> Result<()> {
    let filter = build_filter(default_directive)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| ContextError::Logging(e.to_string()))
}

fn build_filter(default_directive: Option<&str>) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(default_directive.unwrap_or("info"))
        .map_err(|e| ContextError::Logging(format!("invalid log filter: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_module_directive() {
        assert!(build_filter(Some("pex_context=trace")).is_ok());
    }

    #[test]
    fn second_init_fails() {
        let _ = init_logging(Some("warn"));
        let err = init_logging(Some("warn")).unwrap_err();
        assert!(matches!(err, ContextError::Logging(_)));
    }
}
