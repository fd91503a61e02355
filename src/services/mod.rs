pub mod message_sender;
pub mod notification;
pub mod telegram;
