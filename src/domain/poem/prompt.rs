//! N행시 생성 프롬프트
//!
//! 외부 모델에 전달할 System/User 프롬프트와 생성 파라미터를 구성합니다.

use super::validator::Word;

/// 창의적인 결과를 위해 기본값보다 조금 높인 온도
pub const TEMPERATURE: f32 = 0.8;

/// 응답 최대 토큰 수
pub const MAX_OUTPUT_TOKENS: u16 = 1000;

/// N행시 System Prompt
pub const SYSTEM_PROMPT: &str = r#"당신은 창의적인 한국어 N행시(acrostic poem) 작가입니다.
주어진 단어의 각 글자로 시작하는 아름답고 의미있는 문장들을 만들어주세요.

규칙:
1. 각 줄은 해당 글자를 대괄호 []로 감싸서 시작해야 합니다
2. 각 줄은 완전한 문장이어야 합니다
3. 전체적으로 일관된 주제나 분위기를 가져야 합니다
4. 긍정적이고 아름다운 내용으로 작성해주세요
5. 각 줄은 10-20글자 정도로 적당한 길이여야 합니다

예시:
단어: "바다"
결과:
[바]람이 불어오는 해변에서
[다]정한 사람들과 추억을 만들어요"#;

/// 외부 모델 호출 한 번에 필요한 입력
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u16,
    /// 요청한 줄 수 (= 글자 수)
    pub line_count: usize,
}

impl PromptRequest {
    pub fn for_word(word: &Word) -> Self {
        Self {
            system: SYSTEM_PROMPT.to_string(),
            user: user_prompt(word),
            temperature: TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
            line_count: word.char_count(),
        }
    }
}

/// 단어별 User Prompt 생성
pub fn user_prompt(word: &Word) -> String {
    let characters = word
        .characters()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"다음 단어로 N행시를 만들어주세요: "{}"

각 글자: {}

위의 규칙을 따라서 {}줄의 N행시를 작성해주세요."#,
        word,
        characters,
        word.char_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::poem::validator::validate;

    #[test]
    fn system_prompt_should_contain_all_rules() {
        assert!(SYSTEM_PROMPT.contains("대괄호 []"));
        assert!(SYSTEM_PROMPT.contains("완전한 문장"));
        assert!(SYSTEM_PROMPT.contains("일관된 주제나 분위기"));
        assert!(SYSTEM_PROMPT.contains("긍정적"));
        assert!(SYSTEM_PROMPT.contains("10-20글자"));
    }

    #[test]
    fn system_prompt_example_should_follow_bracket_format() {
        assert!(SYSTEM_PROMPT.contains("[바]"));
        assert!(SYSTEM_PROMPT.contains("[다]"));
    }

    #[test]
    fn should_generate_user_prompt_with_all_characters() {
        // Arrange
        let word = validate("봄날여행").unwrap();

        // Act
        let prompt = user_prompt(&word);

        // Assert
        assert!(prompt.contains("\"봄날여행\""));
        assert!(prompt.contains("각 글자: 봄, 날, 여, 행"));
        assert!(prompt.contains("4줄의 N행시"));
    }

    #[test]
    fn prompt_request_should_carry_generation_parameters() {
        // Arrange
        let word = validate("사랑").unwrap();

        // Act
        let request = PromptRequest::for_word(&word);

        // Assert
        assert_eq!(request.system, SYSTEM_PROMPT);
        assert_eq!(request.line_count, 2);
        assert!((request.temperature - 0.8).abs() < f32::EPSILON);
        assert_eq!(request.max_tokens, 1000);
        assert!(request.user.contains("사, 랑"));
    }
}
