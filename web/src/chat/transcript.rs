use std::collections::VecDeque;

pub const TYPING_INDICATOR: &str = "...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "chat-message user-message",
            Sender::Assistant => "chat-message ai-message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub typing: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatTranscript {
    open: bool,
    messages: Vec<ChatMessage>,
    pending: VecDeque<usize>,
}

impl ChatTranscript {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends the user's message and a typing indicator. Returns the text to send,
    /// or `None` for blank input.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let message = input.trim();
        if message.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: message.to_string(),
            typing: false,
        });
        self.pending.push_back(self.messages.len());
        self.messages.push(ChatMessage {
            sender: Sender::Assistant,
            text: TYPING_INDICATOR.to_string(),
            typing: true,
        });
        Some(message.to_string())
    }

    /// Replaces the oldest typing indicator with `text`.
    pub fn resolve(&mut self, text: String) {
        let Some(index) = self.pending.pop_front() else {
            return;
        };
        if let Some(message) = self.messages.get_mut(index) {
            message.text = text;
            message.typing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_ignored() {
        let mut transcript = ChatTranscript::default();
        assert_eq!(transcript.submit("   "), None);
        assert!(transcript.messages().is_empty());
    }

    #[test]
    fn submit_appends_message_and_typing_indicator() {
        let mut transcript = ChatTranscript::default();

        let sent = transcript.submit("  Where is the ER?  ");

        assert_eq!(sent.as_deref(), Some("Where is the ER?"));
        let messages = transcript.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[1].text, TYPING_INDICATOR);
        assert!(messages[1].typing);
    }

    #[test]
    fn replies_resolve_oldest_indicator_first() {
        let mut transcript = ChatTranscript::default();
        transcript.submit("first");
        transcript.submit("second");

        transcript.resolve("reply one".to_string());

        let messages = transcript.messages();
        assert_eq!(messages[1].text, "reply one");
        assert!(!messages[1].typing);
        assert!(messages[3].typing);

        transcript.resolve("reply two".to_string());
        transcript.resolve("stray".to_string());
        assert_eq!(transcript.messages()[3].text, "reply two");
        assert_eq!(transcript.messages().len(), 4);
    }

    #[test]
    fn toggle_flips_window() {
        let mut transcript = ChatTranscript::default();
        transcript.toggle();
        assert!(transcript.is_open());
        transcript.toggle();
        assert!(!transcript.is_open());
    }
}
