use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::error::AppError;
use crate::response::{BaseResponse, ErrorResponse};
use crate::AppState;

use super::dto::{
    ExampleRequest, ExampleWordsResponse, ExampleWordsSuccessResponse, GenerateRequest,
    PoemResponse, PoemSuccessResponse,
};
use super::examples::{curated_word, EXAMPLE_WORDS};
use super::validator::validate;

/// N행시 생성
///
/// 입력 단어를 검증한 뒤 각 글자로 시작하는 N행시를 생성합니다.
#[utoipa::path(
    post,
    path = "/api/poem/generate",
    tag = "Poem",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "생성 성공", body = PoemSuccessResponse),
        (status = 400, description = "잘못된 단어", body = ErrorResponse),
        (status = 502, description = "빈 응답", body = ErrorResponse),
        (status = 503, description = "생성 실패", body = ErrorResponse)
    )
)]
pub async fn generate_poem(
    State(state): State<AppState>,
    request: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<PoemResponse>>, AppError> {
    // JSON 파싱 에러 처리
    let Json(request) = request?;

    tracing::info!(input_length = request.word.chars().count(), "Generate request received");

    // 입력 길이 제한 (10자)
    request.validate()?;

    // 단어 검증
    let word = validate(&request.word)?;
    tracing::debug!(word = %word, "Word validation passed");

    let result = state.poem_service.generate(&word).await?;

    Ok(Json(BaseResponse::success(result.into())))
}

/// 추천 단어로 N행시 생성
///
/// 선별된 추천 단어는 단어 검증 없이 바로 생성합니다.
#[utoipa::path(
    post,
    path = "/api/poem/example",
    tag = "Poem",
    request_body = ExampleRequest,
    responses(
        (status = 200, description = "생성 성공", body = PoemSuccessResponse),
        (status = 400, description = "추천 단어가 아님", body = ErrorResponse),
        (status = 502, description = "빈 응답", body = ErrorResponse),
        (status = 503, description = "생성 실패", body = ErrorResponse)
    )
)]
pub async fn generate_example_poem(
    State(state): State<AppState>,
    request: Result<Json<ExampleRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<PoemResponse>>, AppError> {
    let Json(request) = request?;

    let word = curated_word(&request.word).ok_or_else(|| {
        AppError::BadRequest(format!("추천 단어가 아닙니다: {}", request.word))
    })?;

    tracing::info!(word = %word, "Example word selected");

    let result = state.poem_service.generate(&word).await?;

    Ok(Json(BaseResponse::success(result.into())))
}

/// 추천 단어 목록
#[utoipa::path(
    get,
    path = "/api/poem/examples",
    tag = "Poem",
    responses(
        (status = 200, description = "조회 성공", body = ExampleWordsSuccessResponse)
    )
)]
pub async fn list_examples() -> Json<BaseResponse<ExampleWordsResponse>> {
    Json(BaseResponse::success(ExampleWordsResponse {
        words: EXAMPLE_WORDS.iter().map(|w| w.to_string()).collect(),
    }))
}
