use crate::model::errors::ExportError;
use crate::model::interaction::ExportRequest;
use crate::shared::channel_history::fetch_channel_history;
use crate::shared::clock::Clock;
use crate::shared::discord_client::DiscordClient;
use crate::shared::export_formatter::{write_export, ExportSummary};
use crate::shared::fs::{CreateDirAll, CreateNewFile};
use std::path::{Path, PathBuf};

/// Fetches the whole channel, writes the embed export, and removes the
/// deferred acknowledgement whether or not the export succeeded.
pub async fn run_channel_export<C, F>(
    client: &DiscordClient<C>,
    fs: &F,
    logs_directory: &Path,
    application_id: &str,
    request: ExportRequest,
) -> Result<PathBuf, ExportError>
where
    C: Clock,
    F: CreateDirAll + CreateNewFile + Sync,
{
    let result = export_channel(client, fs, logs_directory, &request).await;
    if let Err(e) = &result {
        tracing::error!(
            "Error exporting messages from channel {}: {}",
            &request.channel_id,
            e
        );
    }

    discard_deferred_response(client, application_id, &request.interaction_token).await;
    result
}

pub async fn export_channel<C, F>(
    client: &DiscordClient<C>,
    fs: &F,
    logs_directory: &Path,
    request: &ExportRequest,
) -> Result<PathBuf, ExportError>
where
    C: Clock,
    F: CreateDirAll + CreateNewFile + Sync,
{
    let history = fetch_channel_history(client, client.clock(), &request.channel_id).await?;
    let embedded = history.embedded();

    let summary = ExportSummary {
        channel_id: &request.channel_id,
        guild_id: request.guild_id.as_deref(),
        exported_at: client.clock().now_utc(),
        total_fetched: history.total(),
    };
    let path = write_export(fs, logs_directory, &summary, &embedded)?;

    tracing::info!(
        "Exported {} of {} messages from channel {} to {}",
        embedded.len(),
        history.total(),
        &request.channel_id,
        path.display()
    );
    Ok(path)
}

/// Best-effort cleanup: a failed deletion is logged and discarded.
async fn discard_deferred_response<C: Clock>(
    client: &DiscordClient<C>,
    application_id: &str,
    interaction_token: &str,
) {
    if let Err(e) = client
        .delete_original_response(application_id, interaction_token)
        .await
    {
        tracing::debug!("Ignoring failure to delete deferred response: {}", e);
    }
}
