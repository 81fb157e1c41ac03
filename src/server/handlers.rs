use super::types::{SendRequest, SendResponse};
use crate::{Error, dispatch::Dispatcher};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

pub const INFERENCE_UNAVAILABLE_MESSAGE: &str =
    "❌ Cannot connect to Ollama. Please make sure Ollama is running (run `ollama serve` in a terminal).";
pub const SERVER_ERROR_MESSAGE: &str =
    "❌ Server error. Please check the server logs for more details.";

type HandlerError = (StatusCode, Json<SendResponse>);

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

pub async fn send(
    State(state): State<AppState>,
    payload: Result<Json<SendRequest>, JsonRejection>,
) -> Result<Json<SendResponse>, HandlerError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected /send body: {}", rejection);
        server_error()
    })?;

    info!(
        "Received message ({} chars, location: {})",
        request.message.chars().count(),
        request.coordinates().is_some()
    );

    match state
        .dispatcher
        .dispatch(&request.message, request.coordinates())
        .await
    {
        Ok(reply) => Ok(Json(reply.into())),
        Err(e) => Err(error_response(e)),
    }
}

fn error_response(e: Error) -> HandlerError {
    if e.is_inference_unavailable() {
        error!("Inference service unreachable: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SendResponse::failure(INFERENCE_UNAVAILABLE_MESSAGE)),
        );
    }

    error!("Error in /send route: {}", e);
    server_error()
}

fn server_error() -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SendResponse::failure(SERVER_ERROR_MESSAGE)),
    )
}
