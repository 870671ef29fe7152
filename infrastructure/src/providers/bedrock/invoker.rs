//! Bedrock model invoker
//!
//! One Converse API call per invocation. The Converse API is stateless,
//! so each call carries a single user message.

use super::{model_map, types};
use crate::config::FileBedrockConfig;
use agora_application::ports::model_invoker::{
    ModelInvocationError, ModelInvoker, text_or_sentinel, validate_request,
};
use agora_domain::GenerationParams;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::types as bedrock;
use tracing::{debug, info};

pub struct BedrockModelInvoker {
    client: BedrockClient,
    region: String,
    cross_region: bool,
}

impl BedrockModelInvoker {
    /// Create a new Bedrock invoker.
    ///
    /// Loads AWS credentials from the default chain (optionally a named
    /// profile) and creates a Bedrock Runtime client.
    pub async fn new(config: &FileBedrockConfig) -> Self {
        let mut aws_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(ref profile) = config.profile {
            aws_config_loader = aws_config_loader.profile_name(profile);
        }

        let aws_config = aws_config_loader.load().await;
        info!(region = %config.region, "Bedrock provider initialized");

        Self {
            client: BedrockClient::new(&aws_config),
            region: config.region.clone(),
            cross_region: config.cross_region,
        }
    }
}

#[async_trait]
impl ModelInvoker for BedrockModelInvoker {
    async fn invoke(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ModelInvocationError> {
        validate_request(user_prompt, params)?;

        let model_id = model_map::to_bedrock_model_id(&params.model, self.cross_region, &self.region);
        let max_tokens = i32::try_from(params.max_output_tokens).map_err(|_| {
            ModelInvocationError::InvalidRequest(format!(
                "max_output_tokens {} is out of range",
                params.max_output_tokens
            ))
        })?;

        let user_msg = bedrock::Message::builder()
            .role(bedrock::ConversationRole::User)
            .content(bedrock::ContentBlock::Text(user_prompt.to_string()))
            .build()
            .map_err(|e| {
                ModelInvocationError::InvalidRequest(format!("Failed to build message: {}", e))
            })?;

        let system = if system_prompt.is_empty() {
            vec![]
        } else {
            vec![bedrock::SystemContentBlock::Text(system_prompt.to_string())]
        };

        debug!(
            model = %model_id,
            temperature = params.temperature,
            max_tokens,
            "Calling Bedrock Converse API"
        );

        let response = self
            .client
            .converse()
            .model_id(&model_id)
            .set_system(Some(system))
            .messages(user_msg)
            .inference_config(
                bedrock::InferenceConfiguration::builder()
                    .max_tokens(max_tokens)
                    .temperature(params.temperature)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| types::convert_converse_error(&e))?;

        let output = response.output().ok_or_else(|| {
            ModelInvocationError::MalformedResponse("No output in Bedrock response".to_string())
        })?;

        Ok(text_or_sentinel(types::extract_text(output)))
    }
}
