use crate::model::discord::{Embed, Message};
use crate::shared::fs::{CreateDirAll, CreateNewFile};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const RULE_WIDTH: usize = 50;
const EMPTY_CONTENT_PLACEHOLDER: &str = "[Keine Textnachricht]";
const MISSING_GUILD_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy)]
pub struct ExportSummary<'a> {
    pub channel_id: &'a str,
    pub guild_id: Option<&'a str>,
    pub exported_at: OffsetDateTime,
    pub total_fetched: usize,
}

/// `messages_<channel>_<YYYY-MM-DDTHH-MM-SS>.txt`, in UTC.
pub fn export_file_name(channel_id: &str, exported_at: OffsetDateTime) -> String {
    let timestamp = exported_at
        .to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[year]-[month]-[day]T[hour]-[minute]-[second]"
        ))
        .unwrap_or_else(|_| exported_at.unix_timestamp().to_string());
    format!("messages_{}_{}.txt", channel_id, timestamp)
}

pub fn localized_time(datetime: OffsetDateTime) -> String {
    datetime
        .to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[day padding:none].[month padding:none].[year], [hour]:[minute]:[second]"
        ))
        .unwrap_or_else(|_| datetime.to_string())
}

fn localized_timestamp(timestamp: &str) -> String {
    OffsetDateTime::parse(timestamp, &Rfc3339)
        .map(localized_time)
        .unwrap_or_else(|_| timestamp.to_string())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Renders the export header followed by one block per message.
pub fn render_report<W: Write>(
    out: &mut W,
    summary: &ExportSummary,
    messages: &[&Message],
) -> io::Result<()> {
    writeln!(out, "=== Channel Messages Export ===")?;
    writeln!(out, "Channel ID: {}", summary.channel_id)?;
    writeln!(
        out,
        "Guild ID: {}",
        summary.guild_id.unwrap_or(MISSING_GUILD_PLACEHOLDER)
    )?;
    writeln!(out, "Exported: {}", localized_time(summary.exported_at))?;
    writeln!(out, "Total Messages Fetched: {}", summary.total_fetched)?;
    writeln!(out, "Messages with Embeds: {}", messages.len())?;
    writeln!(out, "{}\n", "=".repeat(RULE_WIDTH))?;

    for (index, message) in messages.iter().enumerate() {
        render_message(out, index + 1, message)?;
    }

    Ok(())
}

fn render_message<W: Write>(out: &mut W, position: usize, message: &Message) -> io::Result<()> {
    writeln!(
        out,
        "[{}] {}",
        position,
        localized_timestamp(&message.timestamp)
    )?;
    writeln!(out, "Author: {}", message.author_tag())?;
    writeln!(
        out,
        "Content: {}",
        present(&message.content).unwrap_or(EMPTY_CONTENT_PLACEHOLDER)
    )?;

    if !message.attachments.is_empty() {
        let urls = message
            .attachments
            .iter()
            .map(|attachment| attachment.url.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "Attachments: {}", urls)?;
    }

    if !message.embeds.is_empty() {
        writeln!(out, "\n📋 Einbettungen ({}):", message.embeds.len())?;
        for (index, embed) in message.embeds.iter().enumerate() {
            render_embed(out, index + 1, embed)?;
        }
    }

    writeln!(out, "\n{}\n", "─".repeat(RULE_WIDTH))
}

fn render_embed<W: Write>(out: &mut W, position: usize, embed: &Embed) -> io::Result<()> {
    writeln!(out, "  --- Embed {} ---", position)?;

    if let Some(title) = present(&embed.title) {
        writeln!(out, "  Titel: {}", title)?;
    }
    if let Some(description) = present(&embed.description) {
        writeln!(out, "  Beschreibung: {}", description)?;
    }
    if let Some(url) = present(&embed.url) {
        writeln!(out, "  URL: {}", url)?;
    }
    if let Some(author) = &embed.author {
        if let Some(name) = present(&author.name) {
            writeln!(out, "  Autor: {}", name)?;
        }
        if let Some(url) = present(&author.url) {
            writeln!(out, "  Autor URL: {}", url)?;
        }
    }
    if !embed.fields.is_empty() {
        writeln!(out, "  Felder:")?;
        for field in embed.fields.iter() {
            writeln!(out, "    • {}: {}", field.name, field.value)?;
        }
    }
    if let Some(text) = embed.footer.as_ref().and_then(|f| present(&f.text)) {
        writeln!(out, "  Footer: {}", text)?;
    }
    if let Some(timestamp) = present(&embed.timestamp) {
        writeln!(out, "  Zeitstempel: {}", localized_timestamp(timestamp))?;
    }
    if let Some(url) = embed.image.as_ref().and_then(|m| present(&m.url)) {
        writeln!(out, "  Bild: {}", url)?;
    }
    if let Some(url) = embed.thumbnail.as_ref().and_then(|m| present(&m.url)) {
        writeln!(out, "  Thumbnail: {}", url)?;
    }
    if let Some(url) = embed.video.as_ref().and_then(|m| present(&m.url)) {
        writeln!(out, "  Video: {}", url)?;
    }

    writeln!(out)
}

/// Renders the full report in memory, then writes it to a fresh file in
/// `logs_directory` in one pass. Nothing touches the disk if rendering fails,
/// and an existing report with the same name is left alone.
pub fn write_export<F>(
    fs: &F,
    logs_directory: &Path,
    summary: &ExportSummary,
    messages: &[&Message],
) -> io::Result<PathBuf>
where
    F: CreateDirAll + CreateNewFile,
{
    let mut buffer = Vec::new();
    render_report(&mut buffer, summary, messages)?;

    fs.create_dir_all(logs_directory)?;
    let path = logs_directory.join(export_file_name(summary.channel_id, summary.exported_at));

    let mut file = fs.create_new(&path)?;
    file.write_all(&buffer)?;
    file.flush()?;
    drop(file);

    Ok(path)
}
