//! Connection status state machine for the chat session.
//!
//! Three states: `Checking` → `Connected` (first candidate that answers
//! a liveness probe) or `Checking` → `Disconnected` (all candidates
//! exhausted). A resolved status only returns to `Checking` via an
//! explicit session reset; a disconnected session never retries on its
//! own.

use serde::{Deserialize, Serialize};

/// Reachability of the backend as observed by the session client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// No probe cycle has resolved yet.
    #[default]
    Checking,
    /// A candidate answered successfully this session.
    Connected,
    /// Every candidate failed.
    Disconnected,
}

impl ConnectionStatus {
    /// Whether a probe cycle has already resolved this session.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Checking)
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Checking => "connecting",
            Self::Connected => "online",
            Self::Disconnected => "offline",
        };
        write!(f, "{label}")
    }
}
