//! Thread deletion handler for help thread recovery.
//!
//! When the announcement's companion thread is deleted, it is recreated on
//! the live announcement message. The event only carries full thread data
//! when the thread was cached; without it the name cannot be checked, so the
//! handler falls back to the idempotent ensure pass, which is a no-op when
//! the thread still exists.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildChannel, PartialGuildChannel};
use tracing::{error, info};

use crate::bot::gateway::SerenityChat;
use crate::service::board::{ReactionBoard, BOARD_THREAD_NAME};

/// Handles a thread deletion observed in a guild.
pub async fn handle_thread_delete(
    db: &DatabaseConnection,
    ctx: Context,
    thread: PartialGuildChannel,
    full_thread_data: Option<GuildChannel>,
) {
    if let Some(full) = &full_thread_data {
        if full.name != BOARD_THREAD_NAME {
            return;
        }
    }

    let guild_id = thread.guild_id.get();
    info!("Thread {} deleted in guild {}, ensuring help thread", thread.id, guild_id);

    let chat = SerenityChat::new(ctx);
    let board = ReactionBoard::new(db, &chat);
    if let Err(e) = board.ensure_thread(guild_id).await {
        error!("Failed to recreate help thread in guild {}: {}", guild_id, e);
    }
}
