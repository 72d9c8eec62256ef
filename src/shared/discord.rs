pub const MESSAGE_PAGE_LIMIT: usize = 100;

pub fn channel_messages_endpoint(channel_id: &str, before: Option<&str>) -> String {
    match before {
        Some(before) => format!(
            "channels/{}/messages?limit={}&before={}",
            channel_id, MESSAGE_PAGE_LIMIT, before
        ),
        None => format!("channels/{}/messages?limit={}", channel_id, MESSAGE_PAGE_LIMIT),
    }
}

pub fn original_response_endpoint(application_id: &str, token: &str) -> String {
    format!("webhooks/{}/{}/messages/@original", application_id, token)
}

pub fn global_commands_endpoint(application_id: &str) -> String {
    format!("applications/{}/commands", application_id)
}

pub fn guild_commands_endpoint(application_id: &str, guild_id: &str) -> String {
    format!("applications/{}/guilds/{}/commands", application_id, guild_id)
}
