pub mod app_state;
pub mod command;
pub mod configuration;
pub mod discord;
pub mod errors;
pub mod interaction;
