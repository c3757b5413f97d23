pub mod config;
pub mod domain;
pub mod error;
pub mod global;
pub mod response;
pub mod shutdown;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::AppConfig;
use domain::health::health_check;
use domain::poem::{handler, page};

pub use domain::poem::{AiClient, AiClientTrait, OpenAiClient, PoemService};

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::poem::handler::generate_poem,
        domain::poem::handler::generate_example_poem,
        domain::poem::handler::list_examples,
        domain::health::handler::health_check,
    ),
    components(
        schemas(
            domain::poem::dto::GenerateRequest,
            domain::poem::dto::ExampleRequest,
            domain::poem::dto::PoemResponse,
            domain::poem::dto::PoemSuccessResponse,
            domain::poem::dto::ExampleWordsResponse,
            domain::poem::dto::ExampleWordsSuccessResponse,
            domain::health::dto::HealthStatus,
            domain::health::dto::HealthState,
            response::ErrorResponse,
        )
    ),
    tags(
        (name = "Poem", description = "N행시 생성 API"),
        (name = "Health", description = "헬스체크 API")
    )
)]
pub struct ApiDoc;

/// 요청 간 공유되는 불변 상태
#[derive(Clone)]
pub struct AppState {
    pub poem_service: PoemService,
    pub model: String,
}

impl AppState {
    pub fn new(client: AiClient, model: impl Into<String>) -> Self {
        Self {
            poem_service: PoemService::new(client),
            model: model.into(),
        }
    }

    /// 설정으로부터 외부 모델 클라이언트를 한 번 생성해 상태를 구성합니다.
    pub fn from_config(config: &AppConfig) -> Self {
        let client: AiClient = Arc::new(OpenAiClient::new(config));
        Self::new(client, config.gemini_model.clone())
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(page::index).post(page::submit))
        .route("/health", get(health_check))
        .route("/api/poem/generate", post(handler::generate_poem))
        .route("/api/poem/example", post(handler::generate_example_poem))
        .route("/api/poem/examples", get(handler::list_examples))
        .layer(middleware::from_fn(global::middleware::request_tracing))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 테스트용 라우터 (Mock AI 클라이언트 주입)
pub fn create_test_router_with_mock<C>(client: C) -> Router
where
    C: AiClientTrait + 'static,
{
    create_router(AppState::new(Arc::new(client), "mock-model"))
}
