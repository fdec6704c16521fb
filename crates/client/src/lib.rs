//! Chat session client.
//!
//! Discovers a working backend across a ranked list of candidate base
//! URLs, remembers the first one that answers for the rest of the
//! session, and exchanges messages bundled with recent history and the
//! freshly assembled site knowledge.

pub mod endpoints;
pub mod session;
pub mod transport;

pub use endpoints::Endpoints;
pub use session::{ChatSession, SendOutcome};
pub use transport::{ChatReply, ChatRequest, HttpTransport, Transport};
