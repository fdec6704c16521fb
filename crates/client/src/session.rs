//! Chat session state machine.
//!
//! One `ChatSession` spans one loaded page view. It owns the message
//! log, the connection status, and the remembered-working-URL slot.
//! Both operations walk the ranked candidate list in order with a
//! bounded timeout per candidate; the first success wins and is
//! remembered for the rest of the session.

use crate::endpoints::Endpoints;
use crate::transport::{ChatRequest, Transport};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use veltrix_content::assemble_knowledge;
use veltrix_core::error::ClientError;
use veltrix_core::message::{ChatMessage, HistoryEntry};
use veltrix_core::status::ConnectionStatus;

/// Liveness probes give a candidate 5 seconds to answer.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
/// Message exchanges give a candidate 10 seconds.
const EXCHANGE_TIMEOUT: Duration = Duration::from_secs(10);
/// At most this many prior messages accompany each exchange.
const HISTORY_WINDOW: usize = 3;

const GREETING: &str = "Hello! I'm the Veltrix Labs AI assistant. How can I help you today? \
                        Feel free to ask about our services, team, careers, projects, or \
                        contact information!";

/// How a `send_message` call settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// A candidate answered; its reply was appended.
    Delivered,
    /// Every candidate failed; the fallback reply was appended and the
    /// caller should surface a transient offline notice.
    Offline,
    /// Blank input; nothing happened.
    Ignored,
}

/// A single chat session: message log, connection status, and the
/// session-scoped remembered URL.
pub struct ChatSession {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
    status: ConnectionStatus,
    remembered: Option<String>,
    messages: Vec<ChatMessage>,
    probe_timeout: Duration,
    exchange_timeout: Duration,
}

impl ChatSession {
    /// Create a session seeded with the assistant greeting.
    pub fn new(transport: Arc<dyn Transport>, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
            status: ConnectionStatus::Checking,
            remembered: None,
            messages: vec![ChatMessage::bot(GREETING)],
            probe_timeout: PROBE_TIMEOUT,
            exchange_timeout: EXCHANGE_TIMEOUT,
        }
    }

    /// Override the per-candidate timeouts.
    pub fn with_timeouts(mut self, probe: Duration, exchange: Duration) -> Self {
        self.probe_timeout = probe;
        self.exchange_timeout = exchange;
        self
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The URL that answered successfully this session, if any.
    pub fn remembered_url(&self) -> Option<&str> {
        self.remembered.as_deref()
    }

    /// Manual retry affordance: return to `Checking` and forget the
    /// remembered URL so the next `probe` runs a fresh cycle. A
    /// disconnected session never does this on its own.
    pub fn reset(&mut self) {
        self.status = ConnectionStatus::Checking;
        self.remembered = None;
    }

    /// Run one liveness probe cycle, but only if no cycle has resolved
    /// this session. Tries candidates in priority order; the first that
    /// answers wins and is remembered. All failing leaves the session
    /// disconnected with nothing remembered.
    pub async fn probe(&mut self) {
        if self.status.is_resolved() {
            return;
        }

        let candidates = self.endpoints.candidates(self.remembered.as_deref());
        for base_url in &candidates {
            debug!(url = %base_url, "Probing endpoint candidate");
            match tokio::time::timeout(self.probe_timeout, self.transport.probe(base_url)).await
            {
                Ok(Ok(())) => {
                    info!(url = %base_url, "Backend connected");
                    self.status = ConnectionStatus::Connected;
                    self.remembered = Some(base_url.clone());
                    return;
                }
                Ok(Err(e)) => {
                    warn!(url = %base_url, error = %e, "Probe failed, trying next candidate");
                }
                Err(_) => {
                    warn!(
                        url = %base_url,
                        timeout_secs = self.probe_timeout.as_secs(),
                        "Probe timed out, trying next candidate"
                    );
                }
            }
        }

        warn!("All endpoint candidates failed liveness probe");
        self.status = ConnectionStatus::Disconnected;
    }

    /// Send a message. Blank input is a no-op. Otherwise the user
    /// message is appended immediately and exactly one bot message
    /// (reply or fallback) is appended before this returns — the log
    /// never ends on an unanswered user message.
    pub async fn send_message(&mut self, text: &str) -> SendOutcome {
        if text.trim().is_empty() {
            return SendOutcome::Ignored;
        }

        self.messages.push(ChatMessage::user(text));

        // Recent-history window: the messages prior to the one just
        // appended, oldest first.
        let prior = &self.messages[..self.messages.len() - 1];
        let start = prior.len().saturating_sub(HISTORY_WINDOW);
        let history: Vec<HistoryEntry> = prior[start..].iter().map(HistoryEntry::from).collect();

        let request = ChatRequest {
            message: text.to_string(),
            conversation_history: history,
            website_knowledge: assemble_knowledge(),
        };

        let candidates = self.endpoints.candidates(self.remembered.as_deref());
        let mut last_error = ClientError::NoCandidates;

        for base_url in &candidates {
            debug!(url = %base_url, "Sending message to candidate");
            match tokio::time::timeout(
                self.exchange_timeout,
                self.transport.exchange(base_url, &request),
            )
            .await
            {
                Ok(Ok(reply)) => {
                    self.status = ConnectionStatus::Connected;
                    self.remembered = Some(base_url.clone());
                    self.messages.push(ChatMessage::bot(reply));
                    return SendOutcome::Delivered;
                }
                Ok(Err(e)) => {
                    warn!(url = %base_url, error = %e, "Exchange failed, trying next candidate");
                    last_error = e;
                }
                Err(_) => {
                    warn!(
                        url = %base_url,
                        timeout_secs = self.exchange_timeout.as_secs(),
                        "Exchange timed out, trying next candidate"
                    );
                    last_error = ClientError::Timeout(self.exchange_timeout.as_secs());
                }
            }
        }

        warn!(error = %last_error, "All endpoint candidates failed, going offline");
        self.status = ConnectionStatus::Disconnected;
        self.messages.push(ChatMessage::bot(fallback_reply()));
        SendOutcome::Offline
    }
}

/// The fixed apology appended when every candidate fails, pointing at
/// the alternate contact channel.
fn fallback_reply() -> String {
    let contact = veltrix_content::site_data().contact;
    format!(
        "Sorry, I encountered an error connecting to the server. Please try again later \
         or contact us at {} for assistance.",
        contact.email
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use veltrix_core::message::Sender;

    #[derive(Clone, Copy)]
    enum Mode {
        Ok,
        Fail,
        Hang,
    }

    /// Scripted transport: per-URL behavior plus a call log.
    struct MockTransport {
        probe_modes: HashMap<String, Mode>,
        exchange_modes: HashMap<String, Mode>,
        calls: Mutex<Vec<String>>,
        last_request: Mutex<Option<ChatRequest>>,
    }

    impl MockTransport {
        fn new() -> Self {
            Self {
                probe_modes: HashMap::new(),
                exchange_modes: HashMap::new(),
                calls: Mutex::new(Vec::new()),
                last_request: Mutex::new(None),
            }
        }

        fn probe_mode(mut self, url: &str, mode: Mode) -> Self {
            self.probe_modes.insert(url.into(), mode);
            self
        }

        fn exchange_mode(mut self, url: &str, mode: Mode) -> Self {
            self.exchange_modes.insert(url.into(), mode);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn last_request(&self) -> Option<ChatRequest> {
            self.last_request.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Transport for MockTransport {
        async fn probe(&self, base_url: &str) -> Result<(), ClientError> {
            self.calls.lock().unwrap().push(format!("probe {base_url}"));
            match self.probe_modes.get(base_url).copied().unwrap_or(Mode::Fail) {
                Mode::Ok => Ok(()),
                Mode::Fail => Err(ClientError::Network("connection refused".into())),
                Mode::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    unreachable!()
                }
            }
        }

        async fn exchange(
            &self,
            base_url: &str,
            request: &ChatRequest,
        ) -> Result<String, ClientError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("exchange {base_url}"));
            *self.last_request.lock().unwrap() = Some(request.clone());
            match self
                .exchange_modes
                .get(base_url)
                .copied()
                .unwrap_or(Mode::Fail)
            {
                Mode::Ok => Ok(format!("reply from {base_url}")),
                Mode::Fail => Err(ClientError::Network("connection refused".into())),
                Mode::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    unreachable!()
                }
            }
        }
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            override_url: None,
            production_url: "https://prod".into(),
            local_url: "http://localhost:3001".into(),
        }
    }

    fn session(transport: Arc<MockTransport>) -> ChatSession {
        ChatSession::new(transport, endpoints())
            .with_timeouts(Duration::from_millis(50), Duration::from_millis(50))
    }

    #[tokio::test]
    async fn probe_first_success_wins() {
        let transport = Arc::new(MockTransport::new().probe_mode("https://prod", Mode::Ok));
        let mut sess = session(transport.clone());

        sess.probe().await;

        assert_eq!(sess.status(), ConnectionStatus::Connected);
        assert_eq!(sess.remembered_url(), Some("https://prod"));
        assert_eq!(transport.calls(), vec!["probe https://prod"]);
    }

    #[tokio::test]
    async fn probe_all_fail_goes_disconnected() {
        let transport = Arc::new(MockTransport::new());
        let mut sess = session(transport.clone());

        sess.probe().await;

        assert_eq!(sess.status(), ConnectionStatus::Disconnected);
        assert_eq!(sess.remembered_url(), None);
        assert_eq!(transport.calls().len(), 2);
    }

    #[tokio::test]
    async fn probe_skips_resolved_sessions() {
        let transport = Arc::new(MockTransport::new().probe_mode("https://prod", Mode::Ok));
        let mut sess = session(transport.clone());

        sess.probe().await;
        sess.probe().await;
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn disconnected_session_never_retries_without_reset() {
        let transport = Arc::new(MockTransport::new());
        let mut sess = session(transport.clone());

        sess.probe().await;
        let calls_after_first = transport.calls().len();
        sess.probe().await;
        assert_eq!(transport.calls().len(), calls_after_first);

        sess.reset();
        assert_eq!(sess.status(), ConnectionStatus::Checking);
        sess.probe().await;
        assert!(transport.calls().len() > calls_after_first);
    }

    #[tokio::test]
    async fn probe_falls_through_to_localhost() {
        // Candidates [prod, localhost]; prod health-check fails,
        // localhost succeeds.
        let transport =
            Arc::new(MockTransport::new().probe_mode("http://localhost:3001", Mode::Ok));
        let mut sess = session(transport.clone());

        sess.probe().await;

        assert_eq!(sess.status(), ConnectionStatus::Connected);
        assert_eq!(sess.remembered_url(), Some("http://localhost:3001"));
        assert_eq!(
            transport.calls(),
            vec!["probe https://prod", "probe http://localhost:3001"]
        );
    }

    #[tokio::test]
    async fn probe_timeout_tries_next_candidate() {
        let transport = Arc::new(
            MockTransport::new()
                .probe_mode("https://prod", Mode::Hang)
                .probe_mode("http://localhost:3001", Mode::Ok),
        );
        let mut sess = session(transport.clone());

        sess.probe().await;

        assert_eq!(sess.status(), ConnectionStatus::Connected);
        assert_eq!(sess.remembered_url(), Some("http://localhost:3001"));
    }

    #[tokio::test]
    async fn send_appends_exactly_user_and_bot() {
        let transport = Arc::new(MockTransport::new().exchange_mode("https://prod", Mode::Ok));
        let mut sess = session(transport);
        let before = sess.messages().len();

        let outcome = sess.send_message("What services do you offer?").await;

        assert_eq!(outcome, SendOutcome::Delivered);
        assert_eq!(sess.messages().len(), before + 2);
        let last = sess.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, "reply from https://prod");
        assert_eq!(sess.status(), ConnectionStatus::Connected);
        assert_eq!(sess.remembered_url(), Some("https://prod"));
    }

    #[tokio::test]
    async fn blank_send_is_a_noop() {
        let transport = Arc::new(MockTransport::new().exchange_mode("https://prod", Mode::Ok));
        let mut sess = session(transport.clone());
        let before = sess.messages().len();

        assert_eq!(sess.send_message("").await, SendOutcome::Ignored);
        assert_eq!(sess.send_message("   ").await, SendOutcome::Ignored);

        assert_eq!(sess.messages().len(), before);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn send_falls_back_to_next_candidate() {
        let transport =
            Arc::new(MockTransport::new().exchange_mode("http://localhost:3001", Mode::Ok));
        let mut sess = session(transport.clone());
        let before = sess.messages().len();

        let outcome = sess.send_message("hello").await;

        assert_eq!(outcome, SendOutcome::Delivered);
        assert_eq!(sess.messages().len(), before + 2);
        assert_eq!(sess.remembered_url(), Some("http://localhost:3001"));
        assert_eq!(
            transport.calls(),
            vec!["exchange https://prod", "exchange http://localhost:3001"]
        );
    }

    #[tokio::test]
    async fn send_all_fail_appends_fallback_reply() {
        let transport = Arc::new(MockTransport::new());
        let mut sess = session(transport.clone());
        let before = sess.messages().len();

        let outcome = sess.send_message("anyone there?").await;

        assert_eq!(outcome, SendOutcome::Offline);
        assert_eq!(sess.status(), ConnectionStatus::Disconnected);
        // Still exactly one user + one bot message appended.
        assert_eq!(sess.messages().len(), before + 2);
        let last = sess.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.text.contains("hello@veltrixlabs.com"));
        assert_eq!(transport.calls().len(), 2);
    }

    #[tokio::test]
    async fn send_timeout_counts_as_ordinary_failure() {
        let transport = Arc::new(
            MockTransport::new()
                .exchange_mode("https://prod", Mode::Hang)
                .exchange_mode("http://localhost:3001", Mode::Ok),
        );
        let mut sess = session(transport);

        let outcome = sess.send_message("slow backend").await;

        assert_eq!(outcome, SendOutcome::Delivered);
        assert_eq!(sess.remembered_url(), Some("http://localhost:3001"));
    }

    #[tokio::test]
    async fn remembered_url_tried_first_on_next_send() {
        let transport =
            Arc::new(MockTransport::new().exchange_mode("http://localhost:3001", Mode::Ok));
        let mut sess = session(transport.clone());

        sess.send_message("first").await;
        sess.send_message("second").await;

        // Second send starts with the remembered localhost URL.
        let calls = transport.calls();
        assert_eq!(calls.last().unwrap(), "exchange http://localhost:3001");
        assert_eq!(calls.len(), 3);
    }

    #[tokio::test]
    async fn history_window_holds_three_prior_messages() {
        let transport = Arc::new(MockTransport::new().exchange_mode("https://prod", Mode::Ok));
        let mut sess = session(transport.clone());

        // First send: history is just the greeting.
        sess.send_message("m1").await;
        let history = transport.last_request().unwrap().conversation_history;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].sender, Sender::Bot);

        sess.send_message("m2").await;
        sess.send_message("m3").await;

        // Log: greeting, u1, b1, u2, b2 before m3 — window is the last
        // three of those, oldest first.
        let history = transport.last_request().unwrap().conversation_history;
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].text, "reply from https://prod");
        assert_eq!(history[1].text, "m2");
        assert_eq!(history[2].text, "reply from https://prod");
        assert_eq!(history[1].sender, Sender::User);
    }

    #[tokio::test]
    async fn knowledge_sent_with_every_exchange() {
        let transport = Arc::new(MockTransport::new().exchange_mode("https://prod", Mode::Ok));
        let mut sess = session(transport.clone());

        sess.send_message("what do you do?").await;

        let request = transport.last_request().unwrap();
        assert!(request.website_knowledge.contains("## SERVICES OFFERED"));
        assert!(request.website_knowledge.contains("Veltrix Labs"));
    }
}
