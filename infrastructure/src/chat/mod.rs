//! Chat platform adapters

#[cfg(feature = "slack")]
mod slack;

#[cfg(feature = "slack")]
pub use slack::SlackChatPoster;
