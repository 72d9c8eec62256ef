use crate::controller::export_controller::run_channel_export;
use crate::middleware::VerifiedInteraction;
use crate::model::app_state::AppState;
use crate::model::errors::ServerError;
use crate::model::interaction::{ExportRequest, Interaction, InteractionResponse, InteractionType};
use crate::shared::commands::{EXPORT_COMMAND_NAME, TEST_COMMAND_NAME};
use crate::shared::util::get_random_emoji;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::path::PathBuf;

pub async fn handle_interaction(
    State(state): State<AppState>,
    VerifiedInteraction(interaction): VerifiedInteraction,
) -> Response {
    match interaction.kind {
        InteractionType::Ping => (StatusCode::OK, Json(InteractionResponse::pong())).into_response(),
        InteractionType::ApplicationCommand => handle_command(state, interaction),
        InteractionType::Other(kind) => {
            tracing::error!("unknown interaction type {}", kind);
            (
                StatusCode::BAD_REQUEST,
                Json(ServerError::with_message("unknown interaction type")),
            )
                .into_response()
        }
    }
}

fn handle_command(state: AppState, interaction: Interaction) -> Response {
    let name = interaction.command_name().unwrap_or_default().to_string();
    match name.as_str() {
        TEST_COMMAND_NAME => (
            StatusCode::OK,
            Json(InteractionResponse::text_display(format!(
                "Ping {}",
                get_random_emoji()
            ))),
        )
            .into_response(),
        EXPORT_COMMAND_NAME => start_export(state, interaction),
        _ => {
            tracing::error!("unknown command: {}", name);
            (
                StatusCode::BAD_REQUEST,
                Json(ServerError::with_message("unknown command")),
            )
                .into_response()
        }
    }
}

/// Acknowledges privately right away; the export runs in the background.
fn start_export(state: AppState, interaction: Interaction) -> Response {
    let Some(channel_id) = interaction.channel_id else {
        tracing::error!("{} invoked without a channel id", EXPORT_COMMAND_NAME);
        return (
            StatusCode::BAD_REQUEST,
            Json(ServerError::with_message("missing channel id")),
        )
            .into_response();
    };

    let request = ExportRequest {
        channel_id,
        guild_id: interaction.guild_id,
        interaction_token: interaction.token,
    };

    tokio::spawn(async move {
        let logs_directory = PathBuf::from(&state.configuration.logs_directory);
        // The job logs its own failures.
        let _outcome = run_channel_export(
            &state.discord,
            &state.fs,
            &logs_directory,
            &state.configuration.application_id,
            request,
        )
        .await;
    });

    (
        StatusCode::OK,
        Json(InteractionResponse::deferred_ephemeral()),
    )
        .into_response()
}
