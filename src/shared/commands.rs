use crate::model::command::{ApplicationCommand, CHAT_INPUT_COMMAND};
use crate::model::errors::DiscordError;
use crate::shared::clock::Clock;
use crate::shared::discord::{global_commands_endpoint, guild_commands_endpoint};
use crate::shared::discord_client::DiscordClient;

pub const TEST_COMMAND_NAME: &str = "test";
pub const EXPORT_COMMAND_NAME: &str = "cstart";

pub fn all_commands() -> Vec<ApplicationCommand> {
    vec![
        ApplicationCommand {
            name: TEST_COMMAND_NAME.to_string(),
            description: "Basic command".to_string(),
            kind: CHAT_INPUT_COMMAND,
            integration_types: vec![0, 1],
            contexts: vec![0, 1, 2],
        },
        ApplicationCommand {
            name: EXPORT_COMMAND_NAME.to_string(),
            description: "Export all embed messages from the channel to a text file".to_string(),
            kind: CHAT_INPUT_COMMAND,
            integration_types: vec![0],
            contexts: vec![0],
        },
    ]
}

/// Guild registration propagates faster, so it wins when a guild is configured.
pub async fn install_commands<C: Clock>(
    client: &DiscordClient<C>,
    application_id: &str,
    guild_id: Option<&str>,
    commands: &[ApplicationCommand],
) -> Result<(), DiscordError> {
    let endpoint = match guild_id {
        Some(guild_id) => guild_commands_endpoint(application_id, guild_id),
        None => global_commands_endpoint(application_id),
    };

    client.bulk_overwrite_commands(&endpoint, commands).await?;
    tracing::info!("Installed {} commands via {}", commands.len(), endpoint);
    Ok(())
}
