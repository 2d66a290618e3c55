//! HTTP surface for the exchange

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;
use utoipa::{OpenApi, ToSchema};

use glimpse_core::AccessProtocol;

use crate::client::ScreenshotExchangeClient;
use crate::slot::SlotState;

pub struct ExchangeState {
    client: Arc<ScreenshotExchangeClient>,
}

impl ExchangeState {
    pub fn new(client: Arc<ScreenshotExchangeClient>) -> Self {
        Self { client }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(request_screenshot, list_slots),
    components(schemas(SlotResponse, ErrorResponse)),
    info(
        title = "Screenshot Exchange API",
        description = "Endpoints for requesting fresh endpoint screenshots and reading the \
        current state of each protocol's result slot.",
        version = "1.0.0"
    ),
    tags(
        (name = "Screenshots", description = "Screenshot exchange endpoints")
    )
)]
pub struct ExchangeApiDoc;

#[derive(Debug, Serialize, ToSchema)]
pub struct SlotResponse {
    pub protocol: String,
    /// One of "placeholder", "pending", "image", "missing"
    pub view: String,
    pub locator: Option<String>,
    pub title: String,
}

impl SlotResponse {
    fn from_state(protocol: AccessProtocol, state: &SlotState) -> Self {
        Self {
            protocol: protocol.to_string(),
            view: state.view.kind().to_string(),
            locator: state.view.locator().map(str::to_string),
            title: state.title.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[utoipa::path(
    post,
    path = "/screenshots/{protocol}",
    params(
        ("protocol" = String, Path, description = "Access protocol to capture (http or https)")
    ),
    responses(
        (status = 202, description = "Request submitted to the exchange"),
        (status = 400, description = "Unsupported protocol", body = ErrorResponse),
        (status = 503, description = "Exchange channel not ready", body = ErrorResponse)
    ),
    tag = "Screenshots"
)]
async fn request_screenshot(
    State(state): State<Arc<ExchangeState>>,
    Path(protocol): Path<String>,
) -> Response {
    let protocol: AccessProtocol = match protocol.parse() {
        Ok(protocol) => protocol,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    // Submitting would park until the channel comes up; an HTTP caller gets
    // an immediate 503 instead.
    if !state.client.is_connected() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "exchange channel is not ready".to_string(),
            }),
        )
            .into_response();
    }

    match state.client.request_screenshot(protocol).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(e) => {
            error!("Failed to submit screenshot request: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/screenshots",
    responses(
        (status = 200, description = "Current state of every result slot", body = [SlotResponse])
    ),
    tag = "Screenshots"
)]
async fn list_slots(State(state): State<Arc<ExchangeState>>) -> Json<Vec<SlotResponse>> {
    let slots = state.client.slot_states().await;
    let responses = AccessProtocol::ALL
        .iter()
        .filter_map(|protocol| {
            slots
                .get(protocol)
                .map(|state| SlotResponse::from_state(*protocol, state))
        })
        .collect();
    Json(responses)
}

pub fn configure_routes(state: Arc<ExchangeState>) -> Router {
    Router::new()
        .route("/screenshots", get(list_slots))
        .route("/screenshots/{protocol}", post(request_screenshot))
        .with_state(state)
}
