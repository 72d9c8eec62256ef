use clap::{Parser, Subcommand};
use embed_exporter::controller::build_router;
use embed_exporter::model::app_state::AppState;
use embed_exporter::model::configuration::Configuration;
use embed_exporter::shared;
use embed_exporter::shared::commands::{all_commands, install_commands};
use embed_exporter::shared::discord_client::DiscordClient;
use embed_exporter::shared::fs::SystemFs;
use embed_exporter::shared::signature::parse_public_key;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Interactions endpoint that exports a channel's embeds")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Listen for interactions (default)
    Serve,
    /// Bulk-overwrite the bot's slash commands
    RegisterCommands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let configuration = shared::configuration::initialize()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&configuration.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(configuration).await,
        Command::RegisterCommands => register_commands(configuration).await,
    }
}

async fn serve(configuration: Configuration) -> anyhow::Result<()> {
    let verifying_key = parse_public_key(&configuration.public_key)?;
    let discord = DiscordClient::new(&configuration.api_base_url, &configuration.discord_token);
    let addr = SocketAddr::from(([0, 0, 0, 0], configuration.port));

    let state = AppState {
        configuration: Arc::new(configuration),
        discord,
        verifying_key,
        fs: SystemFs,
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on port {}", addr.port());
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn register_commands(configuration: Configuration) -> anyhow::Result<()> {
    let discord = DiscordClient::new(&configuration.api_base_url, &configuration.discord_token);
    install_commands(
        &discord,
        &configuration.application_id,
        configuration.guild_id.as_deref(),
        &all_commands(),
    )
    .await?;
    Ok(())
}
