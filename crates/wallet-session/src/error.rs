/*
[INPUT]:  Error sources (helper SDK, facade misuse, session queries)
[OUTPUT]: Structured error types with display messages for UI publication
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

use crate::types::Chain;

/// Main error type for the wallet-session facade
#[derive(Error, Debug)]
pub enum SessionError {
    /// Facade used before initialize() created the helper handle
    #[error("session facade not initialized, call initialize() first")]
    NotInitialized,

    /// Helper has no active session for the requested query
    #[error("no active session, please log in")]
    NoSession,

    /// Key requested for a chain the helper cannot serve
    #[error("unsupported chain: {chain:?}")]
    UnsupportedChain { chain: Chain },

    /// Interactive auth flow failed inside the helper
    #[error("authentication failed: {message}")]
    Auth { message: String },

    /// Any other failure surfaced by the helper SDK
    #[error("helper error: {0}")]
    Helper(String),
}

impl SessionError {
    /// Check if the error indicates a missing or broken session
    pub fn is_session_error(&self) -> bool {
        matches!(
            self,
            SessionError::NoSession | SessionError::Auth { .. }
        )
    }

    /// Check if the error is caller misuse rather than a helper failure
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            SessionError::NotInitialized | SessionError::UnsupportedChain { .. }
        )
    }

    /// Failure description published to the UI error field.
    ///
    /// Auth-flow and helper failures drop the variant prefix so the UI
    /// shows the SDK's own description (e.g. "network unreachable").
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Auth { message } => message.clone(),
            SessionError::Helper(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Create a helper error from any displayable SDK failure
    pub fn helper(message: impl Into<String>) -> Self {
        SessionError::Helper(message.into())
    }

    /// Create an auth-flow error with a descriptive message
    pub fn auth(message: impl Into<String>) -> Self {
        SessionError::Auth {
            message: message.into(),
        }
    }
}

/// Result type alias for wallet-session operations
pub type Result<T> = std::result::Result<T, SessionError>;
