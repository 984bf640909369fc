// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;
use tracing_core::LevelFilter;

use crate::TracingConfig;

/// Set the global default subscriber. It can't be unset or changed, which is what an
/// app wants. `options` is anything that converts into a [`TracingConfig`], eg
/// [`tracing::Level::DEBUG`].
///
/// Logging is **disabled** by default: unless this is called with a level other than
/// [`LevelFilter::OFF`], the [`tracing`] events emitted by this crate go nowhere.
///
/// # Errors
///
/// If the log file can't be created, or a global subscriber is already set.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(());
    }

    it.install_global()
}

/// Set a subscriber for the current thread only, which is what a test wants. Logging
/// stops when the returned guard is dropped. Returns `None` if the level is
/// [`LevelFilter::OFF`].
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WriterConfig;

    #[test]
    fn test_off_is_a_no_op() {
        let config = TracingConfig {
            level_filter: LevelFilter::OFF,
            writer_config: WriterConfig::None,
        };
        assert!(try_initialize_logging_thread_local(config).unwrap().is_none());
    }

    #[test]
    fn test_thread_local_guard() {
        let config = TracingConfig {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::None,
        };
        let guard = try_initialize_logging_thread_local(config).unwrap();
        assert!(guard.is_some());
        tracing::debug!("logged to no writer");
    }
}
