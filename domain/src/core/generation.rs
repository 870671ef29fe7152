//! Inference parameters attached to every model call

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Generation parameters for a single inference call (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Model backing the call
    pub model: Model,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: f32,
    /// Upper bound on generated tokens, must be positive
    pub max_output_tokens: u32,
}

impl GenerationParams {
    pub fn new(model: Model, temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            model,
            temperature: temperature.clamp(0.0, 1.0),
            max_output_tokens,
        }
    }
}
