//! Core domain types shared across the Veltrix workspace.
//!
//! Everything that flows between the chat session client, the site
//! backend, and the mail relay is defined here: chat messages, the
//! connection state machine, and the error taxonomy.

pub mod error;
pub mod message;
pub mod status;

pub use error::{ClientError, Error, MailError, Result, UpstreamError};
pub use message::{ChatMessage, HistoryEntry, Sender};
pub use status::ConnectionStatus;
