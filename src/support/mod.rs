#[cfg(feature = "desktop")]
pub mod commands;
pub mod controller;
pub mod reply;
pub mod transcript;

pub use controller::{ChatState, SupportChatController};
pub use reply::{KeywordReplies, ReplyStrategy};
