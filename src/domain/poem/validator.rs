//! 입력 단어 검증
//!
//! N행시를 만들 단어가 2~6글자의 한글 음절로만 이루어져 있는지 확인합니다.

use std::fmt;

/// 입력창에서 받는 최대 글자 수 (검증 전 단계)
pub const MAX_INPUT_CHARS: usize = 10;

/// 생성 가능한 최소 글자 수
pub const MIN_WORD_CHARS: usize = 2;

/// 생성 가능한 최대 글자 수
pub const MAX_WORD_CHARS: usize = 6;

const HANGUL_SYLLABLE_START: char = '\u{AC00}'; // 가
const HANGUL_SYLLABLE_END: char = '\u{D7A3}'; // 힣

/// 단어 검증 실패 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WordRejection {
    #[error("단어를 입력해주세요!")]
    Empty,
    #[error("한글만 입력 가능합니다!")]
    NonKorean,
    #[error("최소 2글자 이상 입력해주세요!")]
    TooShort,
    #[error("6글자 이하로 입력해주세요!")]
    TooLong,
}

impl WordRejection {
    pub fn error_code(&self) -> &'static str {
        match self {
            WordRejection::Empty => "POEM_001",
            WordRejection::NonKorean => "POEM_002",
            WordRejection::TooShort => "POEM_003",
            WordRejection::TooLong => "POEM_004",
        }
    }
}

/// 검증을 통과한 단어 (앞뒤 공백이 제거된 한글 음절 문자열)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word(String);

impl Word {
    /// 검증 없이 단어를 만듭니다. 추천 단어처럼 이미 선별된 값에만 사용합니다.
    pub(crate) fn trusted(text: &str) -> Self {
        Self(text.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 단어를 구성하는 글자들 (순서 유지)
    pub fn characters(&self) -> Vec<char> {
        self.0.chars().collect()
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 검증 결과. `Ok`는 `Valid(trimmed)`에 해당합니다.
pub type ValidationOutcome = Result<Word, WordRejection>;

/// 한글 음절(가~힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_START..=HANGUL_SYLLABLE_END).contains(&c)
}

/// 공백을 제외한 내용이 있고, 모든 글자가 한글 음절인지 확인
pub fn is_korean_word(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().all(is_hangul_syllable)
}

/// N행시 생성 전 단어 검증
///
/// 공백 제거 → 빈 값 → 한글 여부 → 최소 길이 → 최대 길이 순으로 확인합니다.
pub fn validate(raw: &str) -> ValidationOutcome {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(WordRejection::Empty);
    }

    if !trimmed.chars().all(is_hangul_syllable) {
        return Err(WordRejection::NonKorean);
    }

    let length = trimmed.chars().count();
    if length < MIN_WORD_CHARS {
        return Err(WordRejection::TooShort);
    }
    if length > MAX_WORD_CHARS {
        return Err(WordRejection::TooLong);
    }

    Ok(Word(trimmed.to_string()))
}
