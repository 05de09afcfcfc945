pub mod api;
pub mod transcript;

pub use api::{ChatApi, ChatError, HttpChatApi};
pub use transcript::ChatTranscript;

/// Sends `message` and turns the outcome into the text shown in the chat window.
pub async fn relay<A: ChatApi>(api: &A, message: &str) -> String {
    match api.send(message).await {
        Ok(reply) => reply,
        Err(err) => {
            if let ChatError::Unreachable(detail) = &err {
                leptos::logging::error!("AI chat error: {}", detail);
            }
            err.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedChat(Result<String, ChatError>);

    impl ChatApi for CannedChat {
        async fn send(&self, _message: &str) -> Result<String, ChatError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn relay_passes_replies_through() {
        let api = CannedChat(Ok("Visit room 101.".to_string()));
        assert_eq!(relay(&api, "hi").await, "Visit room 101.");
    }

    #[tokio::test]
    async fn relay_turns_errors_into_apologies() {
        let missing = CannedChat(Err(ChatError::NoReply));
        assert_eq!(relay(&missing, "hi").await, "Sorry, an error occurred.");

        let offline = CannedChat(Err(ChatError::Unreachable("dns".to_string())));
        assert_eq!(
            relay(&offline, "hi").await,
            "Sorry, I was unable to connect. Please try again later."
        );
    }
}
