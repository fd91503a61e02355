use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// The request never produced a usable reply (network, timeout, undecodable body).
    #[error("delivery request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("destination rejected the message ({code}): {description}")]
    Rejected { code: i64, description: String },
}

/// Delivers a text to the preconfigured destination chat.
///
/// One call is one delivery attempt; callers treat any error as final.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_message(&self, text: &str) -> Result<(), SendError>;
}
