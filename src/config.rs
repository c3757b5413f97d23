use std::env;

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,

    // AI Service (Gemini OpenAI 호환 엔드포인트)
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub gemini_timeout_secs: u64,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 조회 함수로부터 설정 로드
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
            None => 8080,
        };

        let gemini_timeout_secs = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(secs) => secs.parse().map_err(|_| ConfigError::InvalidTimeout(secs))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            server_host,
            server_port,
            gemini_api_key,
            gemini_api_base: lookup("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            gemini_model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_timeout_secs,
        })
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Gemini API 키가 설정되지 않았습니다. 환경 변수 'GEMINI_API_KEY'를 설정해주세요.")]
    MissingApiKey,
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
    #[error("Invalid timeout seconds: {0}")]
    InvalidTimeout(String),
}
