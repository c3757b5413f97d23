use super::client::AiClient;
use super::prompt::PromptRequest;
use super::validator::Word;
use crate::error::AppError;

/// 모델이 프롬프트의 라벨을 그대로 따라 쓴 줄
const ECHOED_LABELS: [&str; 2] = ["결과:", "단어:"];

/// 생성된 N행시
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemResult {
    pub word: String,
    pub lines: Vec<String>,
}

/// N행시 생성 서비스
///
/// 시작 시 한 번 만든 클라이언트를 주입받아 사용합니다.
#[derive(Clone)]
pub struct PoemService {
    client: AiClient,
}

impl PoemService {
    pub fn new(client: AiClient) -> Self {
        Self { client }
    }

    /// 검증된 단어로 N행시를 생성합니다. 외부 호출은 정확히 한 번입니다.
    pub async fn generate(&self, word: &Word) -> Result<PoemResult, AppError> {
        let request = PromptRequest::for_word(word);
        let expected_lines = request.line_count;

        tracing::info!(word = %word, expected_lines, "Generating acrostic poem");

        let raw = match self.client.complete(request).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => return Err(AppError::EmptyResponse),
            Err(error) if error.is_generation_failure() => return Err(error),
            Err(other) => return Err(AppError::GenerationFailed(other.to_string())),
        };

        let lines = clean_poem_text(&raw);
        if lines.is_empty() {
            return Err(AppError::EmptyResponse);
        }

        if lines.len() != expected_lines {
            tracing::warn!(
                word = %word,
                expected_lines,
                actual_lines = lines.len(),
                "Line count differs from character count"
            );
        }

        tracing::info!(word = %word, line_count = lines.len(), "Poem generated successfully");

        Ok(PoemResult {
            word: word.to_string(),
            lines,
        })
    }
}

/// 응답 텍스트를 줄 단위로 정리
///
/// 줄마다 공백을 제거하고, 빈 줄과 `결과:`/`단어:` 라벨 줄을 버립니다. 순서는 유지합니다.
pub fn clean_poem_text(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !ECHOED_LABELS.iter().any(|label| line.starts_with(label)))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::poem::client::MockAiClientTrait;
    use crate::domain::poem::validator::validate;
    use std::sync::Arc;

    fn service_with(mock: MockAiClientTrait) -> PoemService {
        PoemService::new(Arc::new(mock))
    }

    #[test]
    fn clean_poem_text_should_drop_blank_and_label_lines() {
        let raw = "[바]람이 분다\n\n단어: 바다\n[다]정한 하루";

        let lines = clean_poem_text(raw);

        assert_eq!(lines, vec!["[바]람이 분다", "[다]정한 하루"]);
    }

    #[test]
    fn clean_poem_text_should_trim_and_keep_order() {
        let raw = "결과:\n   [사]람들 사이의 따뜻한 마음  \r\n\t[랑]랑한 목소리로 불러주는 이름\n   \n";

        let lines = clean_poem_text(raw);

        assert_eq!(
            lines,
            vec!["[사]람들 사이의 따뜻한 마음", "[랑]랑한 목소리로 불러주는 이름"]
        );
    }

    #[test]
    fn clean_poem_text_should_keep_labels_in_middle_of_line() {
        let lines = clean_poem_text("[결]과: 좋은 하루");
        assert_eq!(lines, vec!["[결]과: 좋은 하루"]);
    }

    #[tokio::test]
    async fn should_call_client_once_with_all_characters() {
        // Arrange
        let mut mock = MockAiClientTrait::new();
        mock.expect_complete()
            .times(1)
            .withf(|request: &PromptRequest| {
                request.line_count == 3
                    && request.user.contains("각 글자: 사, 랑, 해")
                    && request.user.contains("3줄의 N행시")
                    && (request.temperature - 0.8).abs() < f32::EPSILON
                    && request.max_tokens == 1000
            })
            .returning(|_| {
                Ok(Some(
                    "[사]랑이 가득한 하루\n[랑]만이 넘치는 오후\n[해]맑은 미소로 마무리해요".to_string(),
                ))
            });
        let service = service_with(mock);
        let word = validate("사랑해").unwrap();

        // Act
        let result = service.generate(&word).await.unwrap();

        // Assert
        assert_eq!(result.word, "사랑해");
        assert_eq!(result.lines.len(), 3);
        for (line, c) in result.lines.iter().zip(word.characters()) {
            assert!(line.starts_with(&format!("[{}]", c)));
        }
    }

    #[tokio::test]
    async fn should_clean_response_lines() {
        // Arrange
        let mut mock = MockAiClientTrait::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Ok(Some("[바]람이 분다\n\n단어: 바다\n[다]정한 하루".to_string())));
        let service = service_with(mock);

        // Act
        let result = service.generate(&validate("바다").unwrap()).await.unwrap();

        // Assert
        assert_eq!(result.lines, vec!["[바]람이 분다", "[다]정한 하루"]);
    }

    #[tokio::test]
    async fn should_fail_with_empty_response_when_no_text() {
        let mut mock = MockAiClientTrait::new();
        mock.expect_complete().times(1).returning(|_| Ok(None));
        let service = service_with(mock);

        let result = service.generate(&validate("바다").unwrap()).await;

        assert!(matches!(result, Err(AppError::EmptyResponse)));
    }

    #[tokio::test]
    async fn should_fail_with_empty_response_when_text_is_blank() {
        let mut mock = MockAiClientTrait::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Ok(Some("  \n \n".to_string())));
        let service = service_with(mock);

        let result = service.generate(&validate("바다").unwrap()).await;

        assert!(matches!(result, Err(AppError::EmptyResponse)));
    }

    #[tokio::test]
    async fn should_fail_with_empty_response_when_only_labels_remain() {
        let mut mock = MockAiClientTrait::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Ok(Some("단어: 바다\n결과:".to_string())));
        let service = service_with(mock);

        let result = service.generate(&validate("바다").unwrap()).await;

        assert!(matches!(result, Err(AppError::EmptyResponse)));
    }

    #[tokio::test]
    async fn should_wrap_client_failure_without_retry() {
        // Arrange
        let mut mock = MockAiClientTrait::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Err(AppError::GenerationFailed("quota exceeded".to_string())));
        let service = service_with(mock);

        // Act
        let result = service.generate(&validate("희망").unwrap()).await;

        // Assert
        match result {
            Err(AppError::GenerationFailed(cause)) => assert!(cause.contains("quota exceeded")),
            other => panic!("Expected GenerationFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_convert_other_client_errors_to_generation_failure() {
        let mut mock = MockAiClientTrait::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Err(AppError::Internal("broken builder".to_string())));
        let service = service_with(mock);

        let result = service.generate(&validate("희망").unwrap()).await;

        assert!(matches!(result, Err(AppError::GenerationFailed(cause)) if cause.contains("broken builder")));
    }

    #[tokio::test]
    async fn should_keep_mismatched_line_count_as_is() {
        let mut mock = MockAiClientTrait::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Ok(Some("[행]복한 하루\n[복]된 시간\n덧붙인 한 줄".to_string())));
        let service = service_with(mock);

        let result = service.generate(&validate("행복").unwrap()).await.unwrap();

        assert_eq!(result.lines.len(), 3);
    }
}
