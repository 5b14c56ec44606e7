use axum::{
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod jobs;
pub mod models;
pub mod read_model;
pub mod routes;

/// Shared handler state. The connection pool is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    )
)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Service is healthy")
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Investors API",
        version = "0.1.0",
        description = "Provides endpoints to list investors and their commitments."
    ),
    paths(
        routes::investors::list_investors,
        routes::investors::get_investor,
        routes::investors::get_investor_total_commitments,
        routes::investors::list_investors_with_totals,
        health_check
    ),
    components(schemas(
        read_model::InvestorRead,
        read_model::CommitmentRead,
        read_model::InvestorTotalCommitments,
        read_model::InvestorWithTotal
    ))
)]
struct ApiDoc;

/// Allows the frontend origin to call the API with credentials. Methods and
/// headers are mirrored back, since wildcards are rejected alongside credentials.
pub fn cors_layer(frontend_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Create the application with all routes and middleware
pub fn create_app(state: AppState, frontend_origin: HeaderValue) -> Router {
    let api_routes = Router::new()
        .route("/investors", get(routes::list_investors))
        .route("/investors/{investor_id}", get(routes::get_investor))
        .route(
            "/investors/{investor_id}/total_commitments",
            get(routes::get_investor_total_commitments),
        )
        .route("/investors_with_totals", get(routes::list_investors_with_totals))
        .route("/health", get(health_check))
        .with_state(state);

    let docs_router = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(api_routes)
        .merge(docs_router)
        .layer(cors_layer(frontend_origin))
}
