use reqwest::Client;
use shared_types::{ChatReply, ChatRequest};
use thiserror::Error;

use crate::booking::api::CSRF_HEADER;

pub const AI_CHAT_PATH: &str = "/api/ai-chat/";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Sorry, I was unable to connect. Please try again later.")]
    Unreachable(String),
    #[error("Sorry, an error occurred.")]
    NoReply,
}

impl From<reqwest::Error> for ChatError {
    fn from(e: reqwest::Error) -> Self {
        ChatError::Unreachable(e.to_string())
    }
}

#[allow(async_fn_in_trait)]
pub trait ChatApi {
    async fn send(&self, message: &str) -> Result<String, ChatError>;
}

#[derive(Clone, Debug)]
pub struct HttpChatApi {
    client: Client,
    url: String,
    csrf_token: String,
}

impl HttpChatApi {
    pub fn new(origin: &str, csrf_token: String) -> Self {
        Self {
            client: Client::new(),
            url: format!("{}{}", origin.trim_end_matches('/'), AI_CHAT_PATH),
            csrf_token,
        }
    }
}

impl ChatApi for HttpChatApi {
    /// The status code is not inspected; any JSON body without `reply` counts as an error.
    async fn send(&self, message: &str) -> Result<String, ChatError> {
        let reply: ChatReply = self
            .client
            .post(&self.url)
            .header(CSRF_HEADER, &self.csrf_token)
            .json(&ChatRequest {
                message: message.to_string(),
            })
            .send()
            .await?
            .json()
            .await?;

        reply
            .reply
            .filter(|r| !r.is_empty())
            .ok_or(ChatError::NoReply)
    }
}
