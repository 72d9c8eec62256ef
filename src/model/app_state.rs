use crate::model::configuration::Configuration;
use crate::shared::discord_client::DiscordClient;
use crate::shared::fs::SystemFs;
use ed25519_dalek::VerifyingKey;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub configuration: Arc<Configuration>,
    pub discord: DiscordClient,
    pub verifying_key: VerifyingKey,
    pub fs: SystemFs,
}
