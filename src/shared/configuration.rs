use crate::model::configuration::{
    Configuration, DEFAULT_API_BASE_URL, DEFAULT_LOGS_DIRECTORY, DEFAULT_LOG_LEVEL, DEFAULT_PORT,
};
use crate::shared::constants::{CONFIGURATION_FILE_NAME, CONFIG_DIRECTORY};
use anyhow::Context;

pub fn initialize() -> anyhow::Result<Configuration> {
    dotenv::dotenv().ok();

    if !std::path::Path::new(CONFIG_DIRECTORY).exists() {
        std::fs::create_dir(CONFIG_DIRECTORY)?;
    }

    let configuration_path = String::from(CONFIG_DIRECTORY) + CONFIGURATION_FILE_NAME;
    if !std::path::Path::new(&configuration_path).exists() {
        // Read from environment variables
        let configuration = from_lookup(|key| std::env::var(key).ok())?;
        let serialized_toml = toml::to_string_pretty(&configuration)?;
        std::fs::write(&configuration_path, serialized_toml)?;
        Ok(configuration)
    } else {
        let toml = std::fs::read_to_string(&configuration_path)?;
        let deserialized_toml = toml::from_str::<Configuration>(&toml)?;
        Ok(deserialized_toml)
    }
}

pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Configuration>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |key: &str| {
        lookup(key)
            .filter(|value| !value.is_empty())
            .with_context(|| format!("Missing required environment variable: {}", key))
    };

    let port = match lookup("PORT") {
        Some(port) => port
            .parse::<u16>()
            .with_context(|| format!("Invalid PORT value: {}", port))?,
        None => DEFAULT_PORT,
    };

    Ok(Configuration {
        discord_token: required("DISCORD_TOKEN")?,
        application_id: required("APP_ID")?,
        public_key: required("PUBLIC_KEY")?,
        guild_id: lookup("GUILD_ID").filter(|id| !id.is_empty()),
        port,
        log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        logs_directory: lookup("LOGS_DIRECTORY")
            .unwrap_or_else(|| DEFAULT_LOGS_DIRECTORY.to_string()),
        api_base_url: lookup("DISCORD_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn reads_required_and_defaults() {
        let vars = env(&[
            ("DISCORD_TOKEN", "token"),
            ("APP_ID", "42"),
            ("PUBLIC_KEY", "abcd"),
        ]);
        let configuration = from_lookup(|key| vars.get(key).cloned()).unwrap();

        assert_eq!(configuration.application_id, "42");
        assert_eq!(configuration.port, 3000);
        assert_eq!(configuration.logs_directory, "logs");
        assert_eq!(configuration.api_base_url, "https://discord.com/api/v10");
        assert!(configuration.guild_id.is_none());
    }

    #[test]
    fn optional_values_override_defaults() {
        let vars = env(&[
            ("DISCORD_TOKEN", "token"),
            ("APP_ID", "42"),
            ("PUBLIC_KEY", "abcd"),
            ("GUILD_ID", "456"),
            ("PORT", "8080"),
        ]);
        let configuration = from_lookup(|key| vars.get(key).cloned()).unwrap();

        assert_eq!(configuration.guild_id.as_deref(), Some("456"));
        assert_eq!(configuration.port, 8080);
    }

    #[test]
    fn missing_token_names_the_variable() {
        let vars = env(&[("APP_ID", "42"), ("PUBLIC_KEY", "abcd")]);
        let error = from_lookup(|key| vars.get(key).cloned()).unwrap_err();
        assert!(error.to_string().contains("DISCORD_TOKEN"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let vars = env(&[
            ("DISCORD_TOKEN", "token"),
            ("APP_ID", "42"),
            ("PUBLIC_KEY", "abcd"),
            ("PORT", "not-a-port"),
        ]);
        assert!(from_lookup(|key| vars.get(key).cloned()).is_err());
    }

    #[test]
    fn toml_round_trip_omits_missing_guild() {
        let vars = env(&[
            ("DISCORD_TOKEN", "token"),
            ("APP_ID", "42"),
            ("PUBLIC_KEY", "abcd"),
        ]);
        let configuration = from_lookup(|key| vars.get(key).cloned()).unwrap();
        let serialized = toml::to_string_pretty(&configuration).unwrap();
        assert!(!serialized.contains("guild_id"));

        let restored = toml::from_str::<Configuration>(&serialized).unwrap();
        assert_eq!(restored.port, configuration.port);
    }
}
