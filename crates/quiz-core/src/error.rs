use thiserror::Error;

use crate::quiz::Resource;

/// Everything that can go wrong in the quiz core.
///
/// Configuration variants are raised at construction time. The remaining
/// variants put a running [`Quiz`](crate::Quiz) into its absorbing error phase.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuizError {
    #[error("invalid spring config: {0}")]
    InvalidSpring(String),

    #[error("history length {cap} must be smaller than the table size {table_len}")]
    HistoryTooLarge { cap: usize, table_len: usize },

    #[error("country table is empty")]
    EmptyRegistry,

    #[error("invalid country table: {0}")]
    InvalidTable(String),

    #[error("invalid quiz config: {0}")]
    InvalidConfig(String),

    #[error("event {event} is not valid while {phase}")]
    ProtocolViolation { phase: &'static str, event: String },

    #[error("failed to load {resource:?}: {reason}")]
    ResourceFailed { resource: Resource, reason: String },

    #[error("selector resolved candidate {resolved} outside table of {table_len}")]
    SelectionOutOfRange { resolved: usize, table_len: usize },
}

pub type QuizResult<T> = Result<T, QuizError>;
