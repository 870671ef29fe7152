//! Chat surface for terminal runs

mod console_poster;

pub use console_poster::ConsoleChatPoster;
