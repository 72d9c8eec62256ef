use serde::{Deserialize, Serialize};

pub const CHAT_INPUT_COMMAND: u8 = 1;

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct ApplicationCommand {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub integration_types: Vec<u8>,
    pub contexts: Vec<u8>,
}
