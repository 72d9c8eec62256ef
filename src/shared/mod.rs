use once_cell::sync::Lazy;

pub mod channel_history;
pub mod clock;
pub mod commands;
pub mod configuration;
pub mod constants;
pub mod discord;
pub mod discord_client;
pub mod export_formatter;
pub mod fs;
pub mod signature;
pub mod util;

pub static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);
