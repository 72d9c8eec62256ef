pub const CONFIG_DIRECTORY: &str = "./config";
pub const CONFIGURATION_FILE_NAME: &str = "/config.toml";
