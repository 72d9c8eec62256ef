use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub author: Option<EmbedAuthor>,
    #[serde(default)]
    pub fields: Vec<EmbedField>,
    pub footer: Option<EmbedFooter>,
    pub timestamp: Option<String>,
    pub image: Option<EmbedMedia>,
    pub thumbnail: Option<EmbedMedia>,
    pub video: Option<EmbedMedia>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct EmbedAuthor {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct EmbedFooter {
    pub text: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct EmbedMedia {
    pub url: Option<String>,
}
