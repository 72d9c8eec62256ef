use crate::model::discord::Message;
use crate::model::errors::DiscordError;
use crate::shared::clock::Clock;
use crate::shared::discord_client::DiscordClient;
use async_trait::async_trait;
use std::time::Duration;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Pause between page requests, independent of any rate limiting.
pub const PAGE_DELAY: Duration = Duration::from_millis(250);

#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Up to one page of messages older than `before`, newest first.
    async fn fetch_page(
        &self,
        channel_id: &str,
        before: Option<&str>,
    ) -> Result<Vec<Message>, DiscordError>;
}

#[async_trait]
impl<C: Clock> MessageSource for DiscordClient<C> {
    async fn fetch_page(
        &self,
        channel_id: &str,
        before: Option<&str>,
    ) -> Result<Vec<Message>, DiscordError> {
        self.get_channel_messages(channel_id, before).await
    }
}

/// The complete history of a channel in chronological order.
#[derive(Debug, Clone, Default)]
pub struct ChannelHistory {
    pub messages: Vec<Message>,
}

impl ChannelHistory {
    pub fn total(&self) -> usize {
        self.messages.len()
    }

    /// Messages carrying at least one embed, still in chronological order.
    pub fn embedded(&self) -> Vec<&Message> {
        self.messages
            .iter()
            .filter(|message| message.has_embeds())
            .collect()
    }
}

/// Walks the channel backwards page by page until an empty page comes back.
/// Any failed page aborts the walk and discards what was gathered so far.
pub async fn fetch_channel_history<S, C>(
    source: &S,
    clock: &C,
    channel_id: &str,
) -> Result<ChannelHistory, DiscordError>
where
    S: MessageSource,
    C: Clock,
{
    let mut messages = vec![];
    let mut before: Option<String> = None;

    loop {
        let page = source.fetch_page(channel_id, before.as_deref()).await?;
        let Some(oldest) = page.last() else {
            break;
        };

        before = Some(oldest.id.clone());
        tracing::debug!(
            "Fetched {} messages from channel {}, next cursor {:?}",
            page.len(),
            channel_id,
            &before
        );
        messages.extend(page);

        clock.sleep(PAGE_DELAY).await;
    }

    sort_chronologically(&mut messages);
    Ok(ChannelHistory { messages })
}

/// Stable sort by timestamp; unparsable timestamps sort first.
pub fn sort_chronologically(messages: &mut [Message]) {
    messages.sort_by_key(|message| {
        OffsetDateTime::parse(&message.timestamp, &Rfc3339).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    });
}
