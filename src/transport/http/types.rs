use crate::domain::cafe::Cafe;
use crate::storage::CafeStore;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CafeStore>,
    /// Pre-shared secret checked by the delete route. A static token compared
    /// by equality is a known weakness of this service; swapping in a real
    /// credential check only touches the delete handler.
    pub secret_key: Arc<str>,
}

/// `{"cafe": {...}}` wrapper returned by the random route.
#[derive(Serialize, Debug, ToSchema)]
pub struct CafeEnvelope {
    pub cafe: Cafe,
}

/// `{"response": {"success"/"error": "..."}}` envelope used by the write
/// routes.
#[derive(Serialize, Debug, ToSchema)]
pub struct ActionResponse {
    pub response: ActionOutcome,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ActionOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            response: ActionOutcome {
                success: Some(message.into()),
                error: None,
            },
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            response: ActionOutcome {
                success: None,
                error: Some(message.into()),
            },
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    pub loc: Option<String>,
}

/// Form payload for `POST /add`.
///
/// The amenity checkboxes are optional; presence of the key alone marks the
/// flag true (see [`crate::domain::cafe::checkbox_set`]).
#[derive(Deserialize, Debug, ToSchema)]
pub struct AddCafeForm {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    #[serde(default)]
    pub coffee_price: Option<String>,
    #[serde(default)]
    pub sockets: Option<String>,
    #[serde(default)]
    pub toilet: Option<String>,
    #[serde(default)]
    pub wifi: Option<String>,
    #[serde(default)]
    pub calls: Option<String>,
}

pub fn form_422(err: FormRejection) -> (StatusCode, Json<ActionResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ActionResponse::error(format!("Invalid form body: {}", err))),
    )
}

#[cfg(test)]
mod tests {
    use super::ActionResponse;

    #[test]
    fn action_response_serializes_only_the_set_key() {
        let ok = serde_json::to_value(ActionResponse::success("done")).unwrap();
        assert_eq!(ok, serde_json::json!({"response": {"success": "done"}}));

        let err = serde_json::to_value(ActionResponse::error("nope")).unwrap();
        assert_eq!(err, serde_json::json!({"response": {"error": "nope"}}));
    }
}
