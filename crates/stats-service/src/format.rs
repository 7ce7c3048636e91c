//! Discord-markdown rendering of aggregate views

use stats_core::entities::{EmojiStats, GuildStats};

/// Format guild stats as Discord markdown
pub fn format_guild_stats(stats: &GuildStats) -> String {
    let mut out = String::new();

    out.push_str("## Reaction Statistics\n\n");
    out.push_str(&format!(
        "**Total Reactions:** {}\n\n",
        stats.total_reactions
    ));

    if !stats.top_emojis.is_empty() {
        out.push_str("### Top 10 Reactions\n");
        for (i, e) in stats.top_emojis.iter().enumerate() {
            out.push_str(&format!("{}. {} - {}\n", i + 1, e.emoji_id, e.count));
        }
        out.push('\n');
    }

    if !stats.top_senders.is_empty() {
        out.push_str("### Top 3 Reaction Givers\n");
        for (i, u) in stats.top_senders.iter().enumerate() {
            out.push_str(&format!(
                "{} <@{}> - {}\n",
                format_rank(i + 1),
                u.user_id,
                u.count
            ));
        }
        out.push('\n');
    }

    if !stats.top_receivers.is_empty() {
        out.push_str("### Top 3 Reaction Receivers\n");
        for (i, u) in stats.top_receivers.iter().enumerate() {
            out.push_str(&format!(
                "{} <@{}> - {}\n",
                format_rank(i + 1),
                u.user_id,
                u.count
            ));
        }
    }

    out
}

/// Format emoji-specific stats as Discord markdown
pub fn format_emoji_stats(stats: &EmojiStats, guild_id: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("## {} Statistics\n\n", stats.emoji_id));
    out.push_str(&format!("**Total Uses:** {}\n\n", stats.total_uses));

    if !stats.top_messages.is_empty() {
        out.push_str("### Top 10 Messages\n");
        for (i, m) in stats.top_messages.iter().enumerate() {
            let link = message_link(guild_id, &m.channel_id, &m.message_id);
            out.push_str(&format!(
                "{} [Jump to message]({}) - {}\n",
                format_rank(i + 1),
                link,
                m.count
            ));
        }
        out.push('\n');
    }

    if !stats.top_receivers.is_empty() {
        out.push_str("### Top 10 Recipients\n");
        for (i, u) in stats.top_receivers.iter().enumerate() {
            out.push_str(&format!(
                "{} <@{}> - {}\n",
                format_rank(i + 1),
                u.user_id,
                u.count
            ));
        }
        out.push('\n');
    }

    if !stats.top_senders.is_empty() {
        out.push_str("### Top 10 Senders\n");
        for (i, u) in stats.top_senders.iter().enumerate() {
            out.push_str(&format!(
                "{} <@{}> - {}\n",
                format_rank(i + 1),
                u.user_id,
                u.count
            ));
        }
    }

    out
}

fn message_link(guild_id: &str, channel_id: &str, message_id: &str) -> String {
    format!("https://discord.com/channels/{guild_id}/{channel_id}/{message_id}")
}

fn format_rank(position: usize) -> String {
    match position {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        4 => "4️⃣".to_string(),
        5 => "5️⃣".to_string(),
        6 => "6️⃣".to_string(),
        7 => "7️⃣".to_string(),
        8 => "8️⃣".to_string(),
        9 => "9️⃣".to_string(),
        10 => "🔟".to_string(),
        _ => format!("{position}."),
    }
}
