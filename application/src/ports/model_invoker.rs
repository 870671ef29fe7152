//! Model invoker port
//!
//! Defines the interface for a single language-model inference call.

use agora_domain::GenerationParams;
use async_trait::async_trait;
use thiserror::Error;

/// Returned in place of text when a response carries none
pub const NO_RESPONSE_SENTINEL: &str = "No response generated";

/// Errors that can occur during a model call
#[derive(Error, Debug)]
pub enum ModelInvocationError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// A single inference call: system prompt + user prompt in, text out.
///
/// Implementations never retry; retry policy belongs to the caller.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn invoke(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ModelInvocationError>;
}

/// Check the input constraints every invoker enforces before calling out.
pub fn validate_request(
    user_prompt: &str,
    params: &GenerationParams,
) -> Result<(), ModelInvocationError> {
    if user_prompt.trim().is_empty() {
        return Err(ModelInvocationError::InvalidRequest(
            "user prompt must not be empty".to_string(),
        ));
    }
    if params.max_output_tokens == 0 {
        return Err(ModelInvocationError::InvalidRequest(
            "max_output_tokens must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Replace missing or blank text with [`NO_RESPONSE_SENTINEL`].
pub fn text_or_sentinel(text: Option<String>) -> String {
    match text {
        Some(text) if !text.trim().is_empty() => text,
        _ => NO_RESPONSE_SENTINEL.to_string(),
    }
}
