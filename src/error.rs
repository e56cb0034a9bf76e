use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskFlowError>;

/// The kind of entity an id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Board,
    List,
    Card,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board => write!(f, "Board"),
            Self::List => write!(f, "List"),
            Self::Card => write!(f, "Card"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TaskFlowError {
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("Invalid due date: {0}")]
    InvalidDate(String),

    #[error("No active board")]
    NoActiveBoard,

    #[error("Persisted state is corrupt: {0}")]
    CorruptState(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl TaskFlowError {
    pub(crate) fn not_found(kind: EntityKind, id: impl fmt::Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Returns true for errors caused by bad caller input rather than infrastructure
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::NotFound { .. }
                | Self::NoActiveBoard
                | Self::InvalidDate(_)
        )
    }
}
