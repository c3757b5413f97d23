use std::sync::OnceLock;
use std::time::Instant;

use super::dto::{HealthState, HealthStatus};

/// 서버 시작 시간
static START_TIME: OnceLock<Instant> = OnceLock::new();

/// 서버 시작 시간 초기화
///
/// main 함수에서 서버 시작 시 호출해야 합니다.
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// 서버 가동 시간(초) 반환
pub fn get_uptime_secs() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

/// 헬스 체크 (외부 모델은 호출하지 않음)
pub fn check_health(model: &str) -> HealthStatus {
    HealthStatus {
        status: HealthState::Healthy,
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: get_uptime_secs(),
        model: model.to_string(),
    }
}
