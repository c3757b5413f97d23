//! 추천 단어
//!
//! 화면 하단에 버튼으로 노출되는 단어 목록입니다. 선별된 값이므로
//! 선택 시 단어 검증을 거치지 않고 바로 생성 단계로 넘어갑니다.

use super::validator::Word;

/// 추천 단어 목록 (화면 표시 순서)
pub const EXAMPLE_WORDS: [&str; 12] = [
    "사랑", "희망", "친구", "가족", "꿈", "행복", "봄날", "여행", "커피", "독서", "음악", "자연",
];

/// 추천 단어 목록에 있는 경우에만 `Word`로 변환
pub fn curated_word(text: &str) -> Option<Word> {
    let text = text.trim();
    EXAMPLE_WORDS
        .iter()
        .find(|candidate| **candidate == text)
        .map(|candidate| Word::trusted(candidate))
}
