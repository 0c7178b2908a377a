//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `LessonSession`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("unknown lesson: {0}")]
    UnknownLesson(String),
    #[error("no lesson is open")]
    NoLessonOpen,
    #[error("choice {index} is out of range for {len} choices")]
    ChoiceOutOfRange { index: usize, len: usize },
}

/// Errors reported by a `ChartSurface` when it cannot draw.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    #[error("chart canvas is not present")]
    CanvasMissing,
    #[error("charting library is not available")]
    Unavailable,
}

/// Errors emitted while reading viewer configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid {var} value: {raw}")]
    InvalidValue { var: &'static str, raw: String },
}
