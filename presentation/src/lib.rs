//! Presentation layer for agora
//!
//! This crate contains the CLI definition, the console chat surface,
//! output formatters and progress reporters.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ConsoleChatPoster;
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
