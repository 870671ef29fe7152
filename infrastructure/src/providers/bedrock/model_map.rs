//! Bedrock model ID mapping
//!
//! Maps domain `Model` variants to Bedrock model identifiers,
//! with optional cross-region inference prefix.

use agora_domain::Model;

/// Convert a domain Model to a Bedrock model ID string.
///
/// - Models that require inference profiles always use the region-group
///   prefix (`us.`, `eu.`, etc.) regardless of `cross_region`.
/// - When `cross_region` is true, other models get the same prefix.
/// - Custom ids are passed through untouched.
pub fn to_bedrock_model_id(model: &Model, cross_region: bool, region: &str) -> String {
    let base_id = match model {
        Model::ClaudeSonnet35V2 => "anthropic.claude-3-5-sonnet-20241022-v2:0",
        Model::ClaudeHaiku35 => "anthropic.claude-3-5-haiku-20241022-v1:0",
        Model::ClaudeSonnet4 => "anthropic.claude-sonnet-4-20250514-v1:0",
        Model::ClaudeSonnet45 => "anthropic.claude-sonnet-4-5-20250929-v1:0",
        Model::ClaudeHaiku45 => "anthropic.claude-haiku-4-5-20251001-v1:0",
        Model::Custom(id) => return id.clone(),
    };

    if cross_region || requires_inference_profile(model) {
        format!("{}.{base_id}", inference_profile_prefix(region))
    } else {
        base_id.to_string()
    }
}

/// Whether a model requires an inference profile (cannot use on-demand throughput).
fn requires_inference_profile(model: &Model) -> bool {
    matches!(model, Model::ClaudeSonnet45 | Model::ClaudeHaiku45)
}

/// Derive the inference profile region group from an AWS region string.
///
/// `us-east-1` → `us`, `eu-west-1` → `eu`, `ap-northeast-1` → `apac`.
fn inference_profile_prefix(region: &str) -> &str {
    match region.split('-').next() {
        Some("ap") => "apac",
        Some(prefix @ ("us" | "eu" | "ca")) => prefix,
        _ => "us",
    }
}
