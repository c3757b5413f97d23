use std::sync::Arc;
use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use backoff::ExponentialBackoff;

use super::prompt::PromptRequest;
use crate::config::AppConfig;
use crate::error::AppError;

/// AI 클라이언트 인터페이스
///
/// 외부 텍스트 생성 API 호출을 추상화하여 테스트에서 Mock 객체로 대체할 수 있습니다.
/// 호출 한 번에 요청 한 번이며, 재시도하지 않습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AiClientTrait: Send + Sync {
    /// 프롬프트를 보내고 생성된 텍스트를 받습니다. 텍스트가 없으면 `None`.
    async fn complete(&self, request: PromptRequest) -> Result<Option<String>, AppError>;
}

/// Arc로 래핑된 AiClient (Clone 지원)
pub type AiClient = Arc<dyn AiClientTrait>;

/// Gemini(OpenAI 호환 엔드포인트) 클라이언트 구현체
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(config: &AppConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.gemini_api_key.clone())
            .with_api_base(config.gemini_api_base.clone());

        Self {
            client: Client::with_config(openai_config).with_backoff(no_retry_backoff()),
            model: config.gemini_model.clone(),
            timeout: Duration::from_secs(config.gemini_timeout_secs),
        }
    }
}

/// async-openai는 rate limit 응답을 기본적으로 재시도하므로, 경과 시간 0으로 막습니다.
fn no_retry_backoff() -> ExponentialBackoff {
    ExponentialBackoff {
        max_elapsed_time: Some(Duration::ZERO),
        ..Default::default()
    }
}

#[async_trait::async_trait]
impl AiClientTrait for OpenAiClient {
    async fn complete(&self, request: PromptRequest) -> Result<Option<String>, AppError> {
        let messages = vec![
            build_system_message(&request.system)?,
            build_user_message(&request.user)?,
        ];

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(messages)
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .build()
            .map_err(|e| AppError::GenerationFailed(e.to_string()))?;

        tracing::debug!(model = %self.model, "Sending chat completion request");

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(chat_request))
            .await
            .map_err(|_| AppError::GenerationFailed("요청 시간이 초과되었습니다".to_string()))?
            .map_err(|e| AppError::GenerationFailed(e.to_string()))?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

fn build_system_message(content: &str) -> Result<ChatCompletionRequestMessage, AppError> {
    Ok(ChatCompletionRequestMessage::System(
        ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| AppError::GenerationFailed(e.to_string()))?,
    ))
}

fn build_user_message(content: &str) -> Result<ChatCompletionRequestMessage, AppError> {
    Ok(ChatCompletionRequestMessage::User(
        ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| AppError::GenerationFailed(e.to_string()))?,
    ))
}
