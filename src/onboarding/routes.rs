//! REST and WebSocket endpoints for the onboarding wizard.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::error::{Error, OnboardingError, ValidationError};

use super::field::Field;
use super::manager::OnboardingManager;

/// Shared state for onboarding routes.
#[derive(Clone)]
pub struct OnboardingRouteState {
    pub manager: Arc<OnboardingManager>,
}

/// Build the router for the onboarding wizard.
pub fn onboarding_routes(state: OnboardingRouteState) -> Router {
    Router::new()
        .route("/api/onboarding/status", get(get_status))
        .route("/api/onboarding/field", put(put_field))
        .route("/api/onboarding/advance", post(post_advance))
        .route("/api/onboarding/retreat", post(post_retreat))
        .route("/api/onboarding/agreement/generate", post(post_generate))
        .route("/api/onboarding/agreement/send", post(post_send))
        .route("/api/onboarding/submit", post(post_submit))
        .route("/ws/onboarding/events", get(ws_events))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct SetFieldRequest {
    field: Field,
    value: String,
}

#[derive(Debug, Serialize)]
struct StepResponse {
    step: u8,
    title: &'static str,
}

#[derive(Debug, Serialize)]
struct ValidationErrorsResponse {
    errors: Vec<ValidationError>,
}

/// GET /api/onboarding/status
async fn get_status(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    Json(state.manager.status().await)
}

/// PUT /api/onboarding/field
///
/// Stores one raw field value. Unknown field names are rejected by
/// deserialization; a frozen profile rejects the write.
async fn put_field(
    State(state): State<OnboardingRouteState>,
    Json(request): Json<SetFieldRequest>,
) -> impl IntoResponse {
    match state.manager.set_field(request.field, request.value).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => onboarding_error_response(e),
    }
}

/// POST /api/onboarding/advance
///
/// Validates the current step. Returns the new step on success, or every
/// failing field's error in one pass (422) so the form can render them all.
async fn post_advance(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    match state.manager.advance().await {
        Ok(step) => Json(StepResponse {
            step: step.index(),
            title: step.title(),
        })
        .into_response(),
        Err(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorsResponse { errors }),
        )
            .into_response(),
    }
}

/// POST /api/onboarding/retreat
async fn post_retreat(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    let step = state.manager.retreat().await;
    Json(StepResponse {
        step: step.index(),
        title: step.title(),
    })
}

/// POST /api/onboarding/agreement/generate
///
/// Returns the agreement preview data plus the rendered document.
async fn post_generate(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    match state.manager.generate_agreement().await {
        Ok(generated) => Json(generated).into_response(),
        Err(e) => onboarding_error_response(e),
    }
}

/// POST /api/onboarding/agreement/send
async fn post_send(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    match state.manager.send_for_signature().await {
        Ok(()) => (
            StatusCode::ACCEPTED,
            Json(serde_json::json!({"signature": "pending"})),
        )
            .into_response(),
        Err(e) => onboarding_error_response(e),
    }
}

/// POST /api/onboarding/submit
///
/// Finalizes onboarding. Until the agreement is signed this fails with
/// `not_ready` and the session snaps to the agreement step; the response
/// carries the (snapped) current step so the frontend can follow.
async fn post_submit(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    match state.manager.submit().await {
        Ok(profile) => {
            info!(company = %profile.company_name, "onboarding submitted");
            Json(profile).into_response()
        }
        Err(Error::Onboarding(e)) => {
            let status = state.manager.status().await;
            (
                StatusCode::CONFLICT,
                Json(serde_json::json!({
                    "error": e.to_string(),
                    "kind": error_kind(&e),
                    "step": status.step,
                })),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

/// GET /ws/onboarding/events — stream notification events as JSON frames.
async fn ws_events(
    ws: WebSocketUpgrade,
    State(state): State<OnboardingRouteState>,
) -> impl IntoResponse {
    let rx = state.manager.subscribe();
    ws.on_upgrade(move |socket| handle_socket(socket, rx))
}

async fn handle_socket(
    mut socket: WebSocket,
    mut rx: broadcast::Receiver<super::events::OnboardingEvent>,
) {
    info!("onboarding events client connected");

    loop {
        tokio::select! {
            result = rx.recv() => {
                match result {
                    Ok(event) => {
                        let Ok(json) = serde_json::to_string(&event) else {
                            continue;
                        };
                        if socket.send(Message::Text(json.into())).await.is_err() {
                            debug!("events client disconnected during send");
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!(missed = n, "events client lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        debug!("event channel closed");
                        break;
                    }
                }
            }

            result = socket.recv() => {
                match result {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!("onboarding events client disconnected");
                        break;
                    }
                    Some(Err(e)) => {
                        warn!(error = %e, "events WebSocket error");
                        break;
                    }
                    _ => {}
                }
            }
        }
    }
}

fn onboarding_error_response(e: OnboardingError) -> axum::response::Response {
    let status = match e {
        OnboardingError::InvalidStep { .. } => StatusCode::BAD_REQUEST,
        OnboardingError::InvalidTransition { .. }
        | OnboardingError::NotReady { .. }
        | OnboardingError::Frozen => StatusCode::CONFLICT,
    };
    (
        status,
        Json(serde_json::json!({
            "error": e.to_string(),
            "kind": error_kind(&e),
        })),
    )
        .into_response()
}

fn error_kind(e: &OnboardingError) -> &'static str {
    match e {
        OnboardingError::InvalidTransition { .. } => "invalid_transition",
        OnboardingError::InvalidStep { .. } => "invalid_step",
        OnboardingError::NotReady { .. } => "not_ready",
        OnboardingError::Frozen => "frozen",
    }
}
