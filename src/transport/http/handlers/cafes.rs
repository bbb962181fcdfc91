//! The six cafe routes: random, all, search, add, price update, delete.
//!
//! Every handler is one store round trip; recoverable store failures become
//! structured JSON bodies here, anything else is logged and mapped to a 500.

use crate::domain::cafe::{checkbox_set, Cafe, NewCafe};
use crate::storage::StoreError;
use crate::transport::http::types::{
    form_422, ActionResponse, AddCafeForm, AppState, CafeEnvelope, SearchQuery,
};
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use rand::seq::SliceRandom;
use serde_json::json;

fn internal_error(err: StoreError) -> Response {
    tracing::error!(error = %err, "store call failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": err.to_string() })),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/random",
    responses(
        (status = 200, description = "One cafe picked uniformly at random", body = CafeEnvelope),
        (status = 404, description = "No cafes stored yet"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn random_cafe_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.all().await {
        Ok(cafes) => match cafes.choose(&mut rand::thread_rng()) {
            Some(cafe) => {
                (StatusCode::OK, Json(CafeEnvelope { cafe: cafe.clone() })).into_response()
            }
            None => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "No cafes in the database yet." })),
            )
                .into_response(),
        },
        Err(e) => internal_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/all",
    responses(
        (status = 200, description = "Every stored cafe, storage order", body = [Cafe]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn all_cafes_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.all().await {
        Ok(cafes) => (StatusCode::OK, Json(cafes)).into_response(),
        Err(e) => internal_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/search",
    params(
        ("loc" = Option<String>, Query, description = "Exact location to match")
    ),
    responses(
        (status = 200, description = "Single-element array with the first match", body = [Cafe]),
        (status = 400, description = "Missing `loc` query parameter"),
        (status = 404, description = "No cafe at that location"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn search_cafes_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    // An empty `loc=` counts as missing, same as no parameter at all.
    let Some(location) = query.loc.filter(|l| !l.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Missing required query parameter 'loc', e.g. /search?loc=Peckham"
            })),
        )
            .into_response();
    };

    match state.store.find_by_location(&location).await {
        Ok(Some(cafe)) => (StatusCode::OK, Json(vec![cafe])).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": { "not_found": "No cafe found at that location." }
            })),
        )
            .into_response(),
        Err(e) => internal_error(e),
    }
}

#[utoipa::path(
    post,
    path = "/add",
    request_body(content = AddCafeForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Cafe stored", body = ActionResponse),
        (status = 409, description = "A cafe with that name already exists", body = ActionResponse),
        (status = 422, description = "Missing or malformed form field", body = ActionResponse),
        (status = 500, description = "Store failure")
    )
)]
pub async fn add_cafe_handler(
    State(state): State<AppState>,
    form: Result<Form<AddCafeForm>, FormRejection>,
) -> impl IntoResponse {
    let Form(form) = match form {
        Ok(f) => f,
        Err(e) => return form_422(e).into_response(),
    };

    let new_cafe = NewCafe {
        name: form.name,
        map_url: form.map_url,
        img_url: form.img_url,
        location: form.location,
        seats: form.seats,
        has_toilet: checkbox_set(form.toilet.as_deref()),
        has_wifi: checkbox_set(form.wifi.as_deref()),
        has_sockets: checkbox_set(form.sockets.as_deref()),
        can_take_calls: checkbox_set(form.calls.as_deref()),
        coffee_price: form.coffee_price,
    };

    match state.store.insert(new_cafe).await {
        Ok(cafe) => {
            tracing::info!(id = cafe.id, name = %cafe.name, "added cafe");
            (
                StatusCode::OK,
                Json(ActionResponse::success("Successfully added the new cafe.")),
            )
                .into_response()
        }
        Err(StoreError::NameTaken(name)) => (
            StatusCode::CONFLICT,
            Json(ActionResponse::error(format!(
                "A cafe named '{}' already exists.",
                name
            ))),
        )
            .into_response(),
        Err(e) => internal_error(e),
    }
}

#[utoipa::path(
    patch,
    path = "/patch/{id}/{new_price}",
    params(
        ("id" = i32, Path, description = "Cafe id"),
        ("new_price" = String, Path, description = "New coffee price, raw text")
    ),
    responses(
        (status = 200, description = "Price updated", body = ActionResponse),
        (status = 404, description = "No cafe with that id", body = ActionResponse),
        (status = 500, description = "Store failure")
    )
)]
pub async fn update_price_handler(
    State(state): State<AppState>,
    Path((id, new_price)): Path<(i32, String)>,
) -> impl IntoResponse {
    match state.store.update_price(id, &new_price).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ActionResponse::success(format!(
                "Successfully updated the cafe with id {} and changed the price to {}.",
                id, new_price
            ))),
        )
            .into_response(),
        Err(StoreError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ActionResponse::error("Cafe not found")),
        )
            .into_response(),
        Err(e) => internal_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/delete/{id}",
    params(
        ("id" = i32, Path, description = "Cafe id"),
        ("s" = String, Header, description = "Pre-shared secret key")
    ),
    responses(
        (status = 200, description = "Cafe deleted", body = ActionResponse),
        (status = 401, description = "Wrong or missing secret key", body = ActionResponse),
        (status = 404, description = "No cafe with that id", body = ActionResponse),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_cafe_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> impl IntoResponse {
    // Token first: a caller with a wrong key gets the same answer whether or
    // not the id exists, so it learns nothing about the data.
    let supplied = headers
        .get("s")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if supplied != state.secret_key.as_ref() {
        tracing::warn!(id, "delete rejected: invalid secret key");
        return (
            StatusCode::UNAUTHORIZED,
            Json(ActionResponse::error("Invalid secret key")),
        )
            .into_response();
    }

    match state.store.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ActionResponse::success(format!(
                "Successfully deleted the cafe with id {}.",
                id
            ))),
        )
            .into_response(),
        Err(StoreError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ActionResponse::error("Cafe not found")),
        )
            .into_response(),
        Err(e) => internal_error(e),
    }
}
