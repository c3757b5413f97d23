use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::service::PoemResult;

/// N행시 생성 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// N행시를 만들 한글 단어 (입력은 최대 10자, 생성은 2~6자)
    #[validate(length(max = 10, message = "입력은 10글자 이하여야 합니다"))]
    #[schema(example = "바다")]
    pub word: String,
}

/// 추천 단어로 N행시 생성 요청 DTO
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExampleRequest {
    /// 추천 단어 목록 중 하나
    #[schema(example = "꿈")]
    pub word: String,
}

/// N행시 생성 결과 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoemResponse {
    /// 사용된 단어
    #[schema(example = "바다")]
    pub word: String,

    /// 생성된 줄 (순서 유지)
    #[schema(example = json!(["[바]람이 불어오는 해변에서", "[다]정한 사람들과 추억을 만들어요"]))]
    pub lines: Vec<String>,

    /// 줄 수
    #[schema(example = 2)]
    pub line_count: usize,
}

impl From<PoemResult> for PoemResponse {
    fn from(result: PoemResult) -> Self {
        Self {
            line_count: result.lines.len(),
            word: result.word,
            lines: result.lines,
        }
    }
}

/// 추천 단어 목록 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExampleWordsResponse {
    #[schema(example = json!(["사랑", "희망", "친구"]))]
    pub words: Vec<String>,
}

/// N행시 생성 성공 응답 (OpenAPI 스키마용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoemSuccessResponse {
    #[schema(example = true)]
    pub is_success: bool,

    #[schema(example = "COMMON200")]
    pub code: String,

    #[schema(example = "성공입니다.")]
    pub message: String,

    pub result: PoemResponse,
}

/// 추천 단어 목록 성공 응답 (OpenAPI 스키마용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExampleWordsSuccessResponse {
    #[schema(example = true)]
    pub is_success: bool,

    #[schema(example = "COMMON200")]
    pub code: String,

    #[schema(example = "성공입니다.")]
    pub message: String,

    pub result: ExampleWordsResponse,
}
