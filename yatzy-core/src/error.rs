use std::fmt;
use thiserror::Error;

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Player,
    Category,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("player"),
            Self::Category => f.write_str("category"),
        }
    }
}

/// Errors raised by the score store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// Cell text or value the sheet refuses to store. The prior value is kept.
    #[error("rejected cell input {input:?}: {reason}")]
    InvalidInput { input: String, reason: &'static str },
    /// Reference to a player or category the session was not created with.
    #[error("unknown {kind} '{name}'")]
    NotFound { kind: LookupKind, name: String },
    /// Player list or snapshot that cannot start a session.
    #[error("invalid player configuration: {0}")]
    InvalidConfiguration(String),
}

impl ScoreError {
    pub(crate) fn invalid_input(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason,
        }
    }

    pub(crate) fn player_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: LookupKind::Player,
            name: name.into(),
        }
    }

    pub(crate) fn category_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: LookupKind::Category,
            name: name.into(),
        }
    }

    /// True for input the UI should swallow rather than surface.
    #[must_use]
    pub const fn is_rejected_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
