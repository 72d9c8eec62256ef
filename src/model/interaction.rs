use serde::{Deserialize, Serialize};

/// Response flag that hides a message from everyone but the invoking user.
pub const EPHEMERAL_FLAG: u64 = 1 << 6;
/// Response flag that opts a message into the component-based layout.
pub const COMPONENTS_V2_FLAG: u64 = 1 << 15;
pub const TEXT_DISPLAY_COMPONENT: u8 = 10;

#[derive(Deserialize, Serialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(from = "u8", into = "u8")]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    Other(u8),
}

impl From<u8> for InteractionType {
    fn from(value: u8) -> Self {
        match value {
            1 => InteractionType::Ping,
            2 => InteractionType::ApplicationCommand,
            other => InteractionType::Other(other),
        }
    }
}

impl From<InteractionType> for u8 {
    fn from(value: InteractionType) -> Self {
        match value {
            InteractionType::Ping => 1,
            InteractionType::ApplicationCommand => 2,
            InteractionType::Other(other) => other,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Interaction {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(default)]
    pub data: Option<InteractionData>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub guild_id: Option<String>,
    #[serde(default)]
    pub token: String,
}

impl Interaction {
    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref().map(|data| data.name.as_str())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct InteractionData {
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(from = "u8", into = "u8")]
pub enum InteractionResponseType {
    Pong,
    ChannelMessageWithSource,
    DeferredChannelMessageWithSource,
    Other(u8),
}

impl From<u8> for InteractionResponseType {
    fn from(value: u8) -> Self {
        match value {
            1 => InteractionResponseType::Pong,
            4 => InteractionResponseType::ChannelMessageWithSource,
            5 => InteractionResponseType::DeferredChannelMessageWithSource,
            other => InteractionResponseType::Other(other),
        }
    }
}

impl From<InteractionResponseType> for u8 {
    fn from(value: InteractionResponseType) -> Self {
        match value {
            InteractionResponseType::Pong => 1,
            InteractionResponseType::ChannelMessageWithSource => 4,
            InteractionResponseType::DeferredChannelMessageWithSource => 5,
            InteractionResponseType::Other(other) => other,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: InteractionResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionResponseData>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        InteractionResponse {
            kind: InteractionResponseType::Pong,
            data: None,
        }
    }

    pub fn deferred_ephemeral() -> Self {
        InteractionResponse {
            kind: InteractionResponseType::DeferredChannelMessageWithSource,
            data: Some(InteractionResponseData {
                flags: Some(EPHEMERAL_FLAG),
                components: None,
            }),
        }
    }

    pub fn text_display<S: Into<String>>(content: S) -> Self {
        InteractionResponse {
            kind: InteractionResponseType::ChannelMessageWithSource,
            data: Some(InteractionResponseData {
                flags: Some(COMPONENTS_V2_FLAG),
                components: Some(vec![Component {
                    kind: TEXT_DISPLAY_COMPONENT,
                    content: content.into(),
                }]),
            }),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct InteractionResponseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Component {
    #[serde(rename = "type")]
    pub kind: u8,
    pub content: String,
}

/// Everything the export job needs from a `cstart` invocation.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub channel_id: String,
    pub guild_id: Option<String>,
    pub interaction_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_command_interaction() {
        let interaction = serde_json::from_value::<Interaction>(json!({
            "id": "1",
            "type": 2,
            "data": { "id": "99", "name": "cstart" },
            "channel_id": "123",
            "guild_id": "456",
            "token": "tok"
        }))
        .unwrap();

        assert_eq!(interaction.kind, InteractionType::ApplicationCommand);
        assert_eq!(interaction.command_name(), Some("cstart"));
        assert_eq!(interaction.channel_id.as_deref(), Some("123"));
    }

    #[test]
    fn unknown_interaction_type_is_preserved() {
        let interaction = serde_json::from_value::<Interaction>(json!({ "type": 3 })).unwrap();
        assert_eq!(interaction.kind, InteractionType::Other(3));
        assert!(interaction.command_name().is_none());
    }

    #[test]
    fn deferred_ephemeral_response_shape() {
        let value = serde_json::to_value(InteractionResponse::deferred_ephemeral()).unwrap();
        assert_eq!(value, json!({ "type": 5, "data": { "flags": 64 } }));
    }

    #[test]
    fn pong_has_no_data() {
        let value = serde_json::to_value(InteractionResponse::pong()).unwrap();
        assert_eq!(value, json!({ "type": 1 }));
    }
}
