//! Conversions between the Bedrock SDK and the model invoker port

use agora_application::ports::model_invoker::ModelInvocationError;
use aws_sdk_bedrockruntime::types as bedrock;

/// Concatenate the text blocks of a Converse output.
///
/// Returns `None` when the output carries no text at all.
pub fn extract_text(output: &bedrock::ConverseOutput) -> Option<String> {
    let bedrock::ConverseOutput::Message(message) = output else {
        return None;
    };
    let text: Vec<&str> = message
        .content()
        .iter()
        .filter_map(|block| match block {
            bedrock::ContentBlock::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text.join(""))
    }
}

/// Convert a Bedrock SDK error to a ModelInvocationError.
pub fn convert_converse_error(
    err: &aws_sdk_bedrockruntime::error::SdkError<
        aws_sdk_bedrockruntime::operation::converse::ConverseError,
    >,
) -> ModelInvocationError {
    use aws_sdk_bedrockruntime::error::SdkError;
    use aws_sdk_bedrockruntime::operation::converse::ConverseError;

    match err {
        SdkError::ServiceError(service_err) => match service_err.err() {
            ConverseError::ThrottlingException(e) => {
                ModelInvocationError::RequestFailed(format!("Bedrock throttled: {}", e))
            }
            ConverseError::ModelNotReadyException(e) => {
                ModelInvocationError::ModelNotAvailable(format!("Bedrock model not ready: {}", e))
            }
            ConverseError::ResourceNotFoundException(e) => {
                ModelInvocationError::ModelNotAvailable(format!("Bedrock model not found: {}", e))
            }
            ConverseError::ValidationException(e) => {
                ModelInvocationError::InvalidRequest(format!("Bedrock validation error: {}", e))
            }
            ConverseError::ModelTimeoutException(_) => ModelInvocationError::Timeout,
            other => ModelInvocationError::RequestFailed(format!("Bedrock error: {:?}", other)),
        },
        SdkError::TimeoutError(_) => ModelInvocationError::Timeout,
        SdkError::ResponseError(e) => {
            ModelInvocationError::MalformedResponse(format!("Bedrock response error: {:?}", e))
        }
        other => ModelInvocationError::ConnectionError(format!("Bedrock SDK error: {}", other)),
    }
}
