//! Message deletion handler for announcement recovery.
//!
//! When the pinned announcement message is deleted platform-side, the board
//! synchronizer recreates it and restores its reaction set. Deletions of any
//! other message are ignored.

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, Context, GuildId, MessageId};
use tracing::{error, info};

use crate::bot::gateway::SerenityChat;
use crate::data::AnnouncementRepository;
use crate::service::board::ReactionBoard;

/// Handles a message deletion observed in a guild channel.
pub async fn handle_message_delete(
    db: &DatabaseConnection,
    ctx: Context,
    _channel_id: ChannelId,
    deleted_message_id: MessageId,
    guild_id: Option<GuildId>,
) {
    let Some(guild_id) = guild_id.map(|id| id.get()) else {
        return;
    };

    let stored = match AnnouncementRepository::new(db).find_message_id(guild_id).await {
        Ok(stored) => stored,
        Err(e) => {
            error!("Failed to look up announcement for guild {}: {:?}", guild_id, e);
            return;
        }
    };

    if stored != Some(deleted_message_id.get()) {
        return;
    }

    info!(
        "Announcement message {} deleted in guild {}, recreating",
        deleted_message_id, guild_id
    );

    let chat = SerenityChat::new(ctx);
    let board = ReactionBoard::new(db, &chat);
    if let Err(e) = board.sync_reactions(guild_id).await {
        error!("Failed to recreate announcement in guild {}: {}", guild_id, e);
    }
}
