//! Log output setup
//!
//! Events go to stderr so stdout carries only the display text. `RUST_LOG`
//! overrides the level picked from `-q`/`-v`.

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Builds the filter for a verbosity level and optional `RUST_LOG` value
#[must_use]
pub fn filter_for(verbosity: Verbosity, rust_log: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(verbosity.level_filter().into())
        .parse_lossy(rust_log.unwrap_or_default())
}

/// Installs the global subscriber; returns false if one was already set
pub fn init(verbosity: Verbosity) -> bool {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_filter_follows_verbosity() {
        for (verbosity, level) in [
            (Verbosity::Quiet, LevelFilter::ERROR),
            (Verbosity::Normal, LevelFilter::WARN),
            (Verbosity::Verbose, LevelFilter::INFO),
            (Verbosity::Debug, LevelFilter::DEBUG),
            (Verbosity::Trace, LevelFilter::TRACE),
        ] {
            assert_eq!(filter_for(verbosity, None).max_level_hint(), Some(level));
        }
    }

    #[test]
    fn test_rust_log_overrides_quiet() {
        let filter = filter_for(Verbosity::Quiet, Some("trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_rust_log_target_directive_raises_hint() {
        let filter = filter_for(Verbosity::Normal, Some("keycalc=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_empty_rust_log_keeps_verbosity() {
        let filter = filter_for(Verbosity::Verbose, Some(""));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_init_is_idempotent() {
        init(Verbosity::Quiet);
        assert!(!init(Verbosity::Debug));
    }
}
