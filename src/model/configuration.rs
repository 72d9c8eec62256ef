use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOGS_DIRECTORY: &str = "logs";
pub const DEFAULT_API_BASE_URL: &str = "https://discord.com/api/v10";

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Configuration {
    pub discord_token: String,
    pub application_id: String,
    pub public_key: String,
    #[serde(default)]
    pub guild_id: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_logs_directory")]
    pub logs_directory: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_logs_directory() -> String {
    DEFAULT_LOGS_DIRECTORY.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
