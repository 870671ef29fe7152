//! Model provider adapters
//!
//! Each provider implements the application layer's
//! [`ModelInvoker`](agora_application::ports::model_invoker::ModelInvoker).

#[cfg(feature = "bedrock")]
pub mod bedrock;
