//! Error types for the console.
//!
//! Uses `thiserror` for typed errors. Only [`ConsoleError::Transport`] and
//! [`ConsoleError::Decode`] ever reach the page; the other variants surface
//! at startup or in logs.

/// Errors that can occur while driving the console.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not JSON, or not the JSON shape expected.
    #[error("invalid response: {0}")]
    Decode(String),

    /// An HTML fragment template failed to load or render.
    #[error("template error: {0}")]
    Template(String),

    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),
}

impl ConsoleError {
    /// Whether this error came from the network round trip itself
    /// (as opposed to startup or rendering).
    pub const fn is_round_trip(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
