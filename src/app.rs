use tokio::task::JoinHandle;

use crate::backend::{ChatClient, ChatReply};
use crate::safety;
use crate::transcript::{Role, Transcript};

pub struct App {
    pub should_quit: bool,

    // Input state
    pub input: String,
    pub cursor: usize, // cursor position in chars

    // Transcript state
    pub transcript: Transcript,
    pub scroll: u16,
    pub chat_height: u16, // inner chat area, set at render time
    pub chat_width: u16,

    // In-flight exchange. At most one request at a time; submissions made
    // while this is Some are dropped.
    pub pending: Option<JoinHandle<anyhow::Result<ChatReply>>>,
    pub animation_frame: u8,

    // Last transport error, shown in the footer only. The transcript gets
    // the fixed apology text.
    pub last_error: Option<String>,

    backend: ChatClient,
}

impl App {
    pub fn new(backend: ChatClient) -> Self {
        Self {
            should_quit: false,
            input: String::new(),
            cursor: 0,
            transcript: Transcript::new(),
            scroll: 0,
            chat_height: 0,
            chat_width: 0,
            pending: None,
            animation_frame: 0,
            last_error: None,
            backend,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.backend.endpoint()
    }

    pub fn waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit the current input. Empty input and submissions made while a
    /// request is in flight have no effect. Messages that trip the local
    /// safety filter are answered with the fixed crisis response and never
    /// reach the backend.
    pub fn submit(&mut self) {
        if self.pending.is_some() {
            return;
        }

        let message = self.input.trim().to_string();
        if message.is_empty() {
            return;
        }

        self.transcript.push(Role::User, message.clone());
        self.input.clear();
        self.cursor = 0;

        if safety::contains_crisis_language(&message) {
            self.transcript.push(Role::Meta, safety::crisis_response());
            self.scroll_to_bottom();
            return;
        }

        let backend = self.backend.clone();
        self.pending = Some(tokio::spawn(async move {
            backend.send(&message).await
        }));
        self.scroll_to_bottom();
    }

    /// Collect the result of an in-flight exchange, if it has settled.
    /// Called from the tick event so the UI never blocks on the backend.
    pub async fn poll_reply(&mut self) {
        let finished = self
            .pending
            .as_ref()
            .map(|task| task.is_finished())
            .unwrap_or(false);
        if !finished {
            return;
        }

        let task = self.pending.take().unwrap();
        match task.await {
            Ok(Ok(reply)) => {
                self.last_error = None;
                self.transcript.push(Role::Bot, reply.reply);
                if reply.is_crisis {
                    self.transcript
                        .push(Role::Meta, safety::emergency_resources());
                }
            }
            Ok(Err(err)) => {
                self.last_error = Some(err.to_string());
                self.transcript
                    .push(Role::Meta, safety::backend_unavailable());
            }
            Err(join_err) => {
                self.last_error = Some(join_err.to_string());
                self.transcript
                    .push(Role::Meta, safety::backend_unavailable());
            }
        }
        self.scroll_to_bottom();
    }

    /// Advance the typing-indicator ellipsis. Driven by the tick event.
    pub fn tick_animation(&mut self) {
        if self.waiting() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    /// Pin the view to the newest entry.
    pub fn scroll_to_bottom(&mut self) {
        let mut total = self.transcript.rendered_lines(self.chat_width);
        if self.waiting() {
            total += 2; // indicator label + dots line
        }
        self.scroll = total.saturating_sub(self.chat_height.max(1));
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let total = self.transcript.rendered_lines(self.chat_width);
        let max = total.saturating_sub(self.chat_height.max(1));
        self.scroll = (self.scroll + lines).min(max);
    }
}
