use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::services::message_sender::{MessageSender, SendError};
use crate::utils::config::BotConfig;

/// Envelope of every Bot API reply.
#[derive(Debug, Deserialize)]
struct TelegramResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
    error_code: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct BotUser {
    pub id: i64,
    pub first_name: String,
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    chat_id: i64,
    text: &'a str,
}

pub struct TelegramBotService {
    client: Client,
    method_url: String,
    chat_id: i64,
}

impl TelegramBotService {
    /// Builds the client without contacting Telegram.
    pub fn new(config: &BotConfig) -> Result<Self, SendError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(transport)?;

        Ok(TelegramBotService {
            client,
            method_url: format!("{}/bot{}", config.api_url, config.bot_token),
            chat_id: config.chat_id,
        })
    }

    /// Builds the client and checks the token with `getMe`.
    pub async fn connect(config: &BotConfig) -> Result<Self, SendError> {
        let service = Self::new(config)?;

        let me = service.get_me().await.map_err(|e| {
            error!("failed to create telegram bot: {}", e);
            e
        })?;
        info!(
            bot_name = me.username.as_deref().unwrap_or(&me.first_name),
            bot_id = me.id,
            "telegram bot created"
        );

        Ok(service)
    }

    pub async fn get_me(&self) -> Result<BotUser, SendError> {
        let request = self.client.get(self.method("getMe"));
        Self::call(request).await
    }

    fn method(&self, name: &str) -> String {
        format!("{}/{}", self.method_url, name)
    }

    async fn call<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, SendError> {
        let response = request.send().await.map_err(transport)?;
        let reply: TelegramResponse<T> = response.json().await.map_err(transport)?;

        match reply {
            TelegramResponse {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            TelegramResponse {
                description,
                error_code,
                ..
            } => Err(SendError::Rejected {
                code: error_code.unwrap_or_default(),
                description: description.unwrap_or_else(|| "empty result".to_string()),
            }),
        }
    }
}

// Request URLs embed the bot token; drop them before the error can be logged.
fn transport(e: reqwest::Error) -> SendError {
    SendError::Transport(Box::new(e.without_url()))
}

#[async_trait]
impl MessageSender for TelegramBotService {
    async fn send_message(&self, text: &str) -> Result<(), SendError> {
        info!(chat_id = self.chat_id, "sending message");

        let body = SendMessageBody {
            chat_id: self.chat_id,
            text,
        };
        let request = self.client.post(self.method("sendMessage")).json(&body);

        if let Err(e) = Self::call::<serde_json::Value>(request).await {
            error!(chat_id = self.chat_id, "failed to send message: {}", e);
            return Err(e);
        }

        info!(chat_id = self.chat_id, "message sent");
        Ok(())
    }
}
