// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::try_create_layers;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where the logs go, and how verbose they are. Build one from any of the types that
/// convert into it, and compose them with `+`:
///
/// ```
/// use r3bl_canvas::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let level: TracingConfig = tracing_core::LevelFilter::TRACE.into();
/// let display: TracingConfig = DisplayPreference::Stderr.into();
/// let config = level + display;
///
/// assert_eq!(config.level_filter, tracing_core::LevelFilter::TRACE);
/// assert_eq!(
///     config.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "log.txt".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    /// Path of the log file.
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Set the global default subscriber. This can only succeed once per process.
    ///
    /// # Errors
    ///
    /// If the log file can't be created, or a global subscriber is already set.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|error| miette::miette!("Could not set global subscriber: {error}"))
    }

    /// Set the subscriber for the current thread, until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// If the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<tracing::dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?;
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// The more verbose level wins, and the writers are merged.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// `rhs` has higher specificity: on a collision its display preference or file path
/// clobbers the one in `self`, and a `None` never clobbers anything.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            // No collision.
            (None, it) | (it, None) => it,
            (Display(display), File(file)) | (File(file), Display(display)) => {
                DisplayAndFile(display, file)
            }

            // Collision, rhs wins.
            (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(display, file)) => {
                DisplayAndFile(display, file)
            }
            (Display(_), Display(display)) => Display(display),
            (File(_), File(file)) => File(file),
            (DisplayAndFile(_, file), Display(display)) => DisplayAndFile(display, file),
            (DisplayAndFile(display, _), File(file)) => DisplayAndFile(display, file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_writer_configs() {
        let fname = "log.txt".to_string();
        let none = WriterConfig::None;
        let stdout = WriterConfig::Display(DisplayPreference::Stdout);
        let stderr = WriterConfig::Display(DisplayPreference::Stderr);
        let file = WriterConfig::File(fname.clone());
        let stdout_and_file =
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, fname.clone());
        let stderr_and_file =
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, fname.clone());

        assert_eq!(none.clone() + none.clone(), none);
        assert_eq!(stdout.clone() + none.clone(), stdout);
        assert_eq!(none.clone() + file.clone(), file);
        assert_eq!(stdout.clone() + stderr.clone(), stderr);
        assert_eq!(file.clone() + stdout.clone(), stdout_and_file);
        assert_eq!(stdout.clone() + file.clone(), stdout_and_file);
        assert_eq!(stdout_and_file.clone() + stderr.clone(), stderr_and_file);
        assert_eq!(stderr.clone() + stdout_and_file.clone(), stdout_and_file);
        assert_eq!(
            stdout_and_file.clone() + WriterConfig::File("other.txt".to_string()),
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "other.txt".to_string())
        );
    }

    #[test]
    fn test_add_tracing_configs() {
        let lhs: TracingConfig = LevelFilter::WARN.into();
        let rhs: TracingConfig = DisplayPreference::Stdout.into();
        let sum = lhs + rhs;
        assert_eq!(sum.level_filter, LevelFilter::DEBUG);
        assert_eq!(
            sum.writer_config,
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "log.txt".to_string())
        );
    }

    #[test]
    fn test_from_level() {
        let config: TracingConfig = tracing::Level::INFO.into();
        assert_eq!(config.level_filter, LevelFilter::INFO);
        assert_eq!(
            config.writer_config,
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
    }
}
