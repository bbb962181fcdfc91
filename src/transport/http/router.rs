use crate::domain::cafe::Cafe;
use crate::transport::http::handlers::{cafes, health, pages};
use crate::transport::http::types::{ActionOutcome, ActionResponse, AddCafeForm, CafeEnvelope};
use axum::routing::{delete, get, patch, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        cafes::random_cafe_handler,
        cafes::all_cafes_handler,
        cafes::search_cafes_handler,
        cafes::add_cafe_handler,
        cafes::update_price_handler,
        cafes::delete_cafe_handler
    ),
    components(schemas(Cafe, CafeEnvelope, ActionResponse, ActionOutcome, AddCafeForm))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/", get(pages::home_handler))
        .route("/health", get(health::healthcheck_handler))
        .route("/random", get(cafes::random_cafe_handler))
        .route("/all", get(cafes::all_cafes_handler))
        .route("/search", get(cafes::search_cafes_handler))
        .route("/add", post(cafes::add_cafe_handler))
        .route("/patch/:id/:new_price", patch(cafes::update_price_handler))
        .route("/delete/:id", delete(cafes::delete_cafe_handler))
        .with_state(app_state)
}
