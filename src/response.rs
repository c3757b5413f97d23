use serde::Serialize;
use utoipa::ToSchema;

/// API 공통 응답 형식
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse<T: Serialize> {
    /// 성공 여부
    pub is_success: bool,

    /// 응답 코드
    pub code: String,

    /// 응답 메시지
    pub message: String,

    /// 응답 데이터
    pub result: Option<T>,
}

/// 에러 응답 형식
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// 성공 여부 (에러 시 항상 false)
    #[schema(example = false)]
    pub is_success: bool,

    /// 에러 코드
    #[schema(example = "POEM_002")]
    pub code: String,

    /// 에러 메시지
    #[schema(example = "한글만 입력 가능합니다!")]
    pub message: String,

    /// 항상 null
    #[schema(value_type = Option<String>)]
    pub result: Option<()>,
}

impl<T: Serialize> BaseResponse<T> {
    /// 성공 응답 생성
    pub fn success(result: T) -> Self {
        Self {
            is_success: true,
            code: "COMMON200".to_string(),
            message: "성공입니다.".to_string(),
            result: Some(result),
        }
    }
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            code: code.into(),
            message: message.into(),
            result: None,
        }
    }
}
