//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod chat_poster;
pub mod conversation_logger;
pub mod model_invoker;
pub mod progress;
pub mod session_store;
pub mod token_store;
