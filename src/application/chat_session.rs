use crate::domain::{
    learning::chat::{self, ChatTopic},
    logging::{LogComponent, LogLevel, get_logger},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// Chat line. User text is plain text; bot text is canned HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: usize,
    pub sender: Sender,
    pub text: String,
}

/// Bot answer computed at submission time and appended once its delay elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub topic: Option<ChatTopic>,
    pub html: &'static str,
}

/// Append-only message log of the chat widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_id: usize,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record a user question and compute its reply. Blank input is ignored
    /// and yields `None`.
    pub fn submit(&mut self, raw: &str) -> Option<PendingReply> {
        let question = raw.trim();
        if question.is_empty() {
            return None;
        }
        self.push(Sender::User, question.to_string());

        let rule = chat::match_rule(question);
        let reply = PendingReply {
            topic: rule.map(|r| r.topic),
            html: rule.map_or(chat::FALLBACK_ANSWER, |r| r.answer),
        };
        get_logger().log_with_metadata(
            LogLevel::Debug,
            LogComponent::Application("Chat"),
            "Question answered",
            &format!(
                "topic={}",
                reply.topic.map_or_else(|| "fallback".to_string(), |t| t.to_string())
            ),
        );
        Some(reply)
    }

    /// Append a reply produced by [`submit`](Self::submit).
    pub fn deliver(&mut self, reply: PendingReply) {
        self.push(Sender::Bot, reply.html.to_string());
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.messages.push(ChatMessage { id: self.next_id, sender, text });
        self.next_id += 1;
    }
}
