use serde::{Deserialize, Serialize};

pub use embed::*;

pub mod embed;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Message {
    pub id: String,
    pub author: MessageAuthor,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub embeds: Vec<Embed>,
    pub timestamp: String,
}

impl Message {
    pub fn has_embeds(&self) -> bool {
        !self.embeds.is_empty()
    }

    /// `username#discriminator (ID: id)`
    pub fn author_tag(&self) -> String {
        format!(
            "{}#{} (ID: {})",
            self.author.username, self.author.discriminator, self.author.id
        )
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct MessageAuthor {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub discriminator: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Attachment {
    pub url: String,
}
