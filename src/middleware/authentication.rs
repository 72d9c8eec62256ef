use crate::model::app_state::AppState;
use crate::model::errors::{ApiError, ServerError, SignatureError};
use crate::model::interaction::Interaction;
use crate::shared::signature::verify;
use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// An interaction whose signature has been checked against the application's
/// public key.
pub struct VerifiedInteraction(pub Interaction);

#[async_trait]
impl FromRequest<AppState> for VerifiedInteraction {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let signature = header_value(req.headers(), SIGNATURE_HEADER).map_err(unauthorized)?;
        let timestamp = header_value(req.headers(), TIMESTAMP_HEADER).map_err(unauthorized)?;

        let body = Bytes::from_request(req, state).await.map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ServerError::with_message(e.body_text())),
            )
        })?;

        verify(&state.verifying_key, &timestamp, &body, &signature).map_err(unauthorized)?;

        serde_json::from_slice::<Interaction>(&body)
            .map(VerifiedInteraction)
            .map_err(|e| {
                tracing::error!("Failed to deserialize interaction: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ServerError::with_message("Malformed interaction payload")),
                )
            })
    }
}

fn header_value(headers: &HeaderMap, name: &'static str) -> Result<String, SignatureError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .ok_or(SignatureError::MissingHeader(name))
}

fn unauthorized(error: SignatureError) -> ApiError {
    tracing::warn!("Rejected interaction: {}", error);
    (
        StatusCode::UNAUTHORIZED,
        Json(ServerError::with_message(error.to_string())),
    )
}
