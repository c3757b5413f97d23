use axum::routing::get;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nhaengsi_server::{
    config::AppConfig, create_router, domain::health::init_start_time, shutdown::shutdown_signal,
    AppState,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화
    init_tracing();
    init_start_time();

    // 3. 설정 로드 (API 키가 없으면 폼을 열지 않고 종료)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "❌ 설정을 불러오지 못했습니다");
            std::process::exit(1);
        }
    };

    // 4. 라우터 설정
    let mut app = create_router(AppState::from_config(&config));

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            app = app.route("/metrics", get(move || std::future::ready(handle.render())));
        }
        Err(e) => tracing::warn!(error = %e, "Metrics recorder not installed"),
    }

    // 5. 서버 실행
    let listener =
        tokio::net::TcpListener::bind((config.server_host.as_str(), config.server_port)).await?;
    tracing::info!(
        model = %config.gemini_model,
        "Server listening on {}:{}",
        config.server_host,
        config.server_port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nhaengsi_server=debug,tower_http=debug"));

    let json = std::env::var("LOG_FORMAT").map(|f| f == "json").unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
