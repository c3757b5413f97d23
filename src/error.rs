use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::poem::validator::WordRejection;
use crate::response::ErrorResponse;

/// 재시도 안내 문구
pub const RETRY_HINT: &str = "💡 잠시 후 다시 시도해주세요.";

/// 애플리케이션 전역 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 단어 검증 실패 (사용자가 고칠 수 있는 입력 오류)
    #[error(transparent)]
    InvalidWord(#[from] WordRejection),

    #[error("잘못된 요청입니다: {0}")]
    BadRequest(String),

    #[error("잘못된 요청 형식입니다: {0}")]
    JsonParseFailed(String),

    /// 외부 모델이 사용할 수 있는 텍스트를 돌려주지 않음
    #[error("N행시 생성에 실패했습니다. 다시 시도해주세요.")]
    EmptyResponse,

    /// 외부 모델 호출 실패 (원인 메시지 포함)
    #[error("N행시 생성에 실패했습니다: {0}")]
    GenerationFailed(String),

    #[error("내부 에러: {0}")]
    Internal(String),
}

impl AppError {
    /// 에러 코드 반환
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidWord(rejection) => rejection.error_code(),
            AppError::BadRequest(_) => "COMMON400",
            AppError::JsonParseFailed(_) => "COMMON400",
            AppError::EmptyResponse => "POEM_005",
            AppError::GenerationFailed(_) => "POEM_006",
            AppError::Internal(_) => "COMMON500",
        }
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidWord(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::JsonParseFailed(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyResponse => StatusCode::BAD_GATEWAY,
            AppError::GenerationFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 생성 단계 실패 여부 (재시도 안내 대상)
    pub fn is_generation_failure(&self) -> bool {
        matches!(self, AppError::EmptyResponse | AppError::GenerationFailed(_))
    }

    /// 사용자에게 보여줄 메시지
    pub fn user_message(&self) -> String {
        match self {
            AppError::GenerationFailed(cause) => format!("오류가 발생했습니다: {}", cause),
            AppError::Internal(_) => "서버 에러, 관리자에게 문의 바랍니다.".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.user_message();

        match &self {
            AppError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal Server Error");
            }
            AppError::EmptyResponse | AppError::GenerationFailed(_) => {
                tracing::error!(code, error = %self, "Poem generation failed");
            }
            _ => {
                tracing::warn!(code, error = %self, "Request rejected");
            }
        }

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::BadRequest(errors.to_string())
    }
}
