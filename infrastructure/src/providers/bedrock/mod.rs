//! AWS Bedrock Converse API provider
//!
//! Provides access to Claude models via AWS IAM authentication
//! through the Bedrock Converse API.

mod invoker;
mod model_map;
mod types;

pub use invoker::BedrockModelInvoker;
pub use model_map::to_bedrock_model_id;
