//! Diagnostic logging.
//!
//! User-facing progress goes through the progress reporter; this module
//! only sets up `tracing` output for troubleshooting. Diagnostics are off
//! unless `SENTINEL_LOG` or `--verbose` asks for them, and always go to
//! stderr.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "SENTINEL_LOG";

/// Filter used when `SENTINEL_LOG` is unset or unparsable.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "sentinel_assess=debug"
    } else {
        "sentinel_assess=warn"
    }
}

fn build_filter(env_value: Option<&str>, verbose: bool) -> EnvFilter {
    env_value
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(env_value.as_deref(), verbose);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "sentinel_assess=debug");
        assert_eq!(default_directive(false), "sentinel_assess=warn");
    }

    #[test]
    fn test_env_value_wins() {
        let filter = build_filter(Some("sentinel_assess=trace"), false);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_invalid_env_value_falls_back() {
        let filter = build_filter(Some("sentinel_assess=loud"), true);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
