//! Guild provisioning on availability.
//!
//! The `guild_create` event fires on startup for every guild the bot is in
//! and when the bot joins a new guild. The handler ensures the guild carries
//! the designated soundboard channel, posts the setup message when the
//! channel is first created, and reconciles the pinned announcement message
//! so its reaction set matches the binding table. All steps are idempotent;
//! a permission failure is logged and never fatal.

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelType, Context, CreateChannel, Guild};
use tracing::{error, info};

use crate::bot::gateway::SerenityChat;
use crate::service::board::{ReactionBoard, BOARD_CHANNEL_NAME, BOARD_SETUP_MESSAGE};
use crate::service::gateway::ChatGateway;

/// Handles the guild_create event when a guild becomes available or the bot
/// joins a new guild.
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let guild_id = guild.id.get();
    let chat = SerenityChat::new(ctx.clone());

    let existing = match chat.find_text_channel(guild_id, BOARD_CHANNEL_NAME).await {
        Ok(channel) => channel,
        Err(e) => {
            error!("Failed to list channels in guild {}: {}", guild_id, e);
            return;
        }
    };

    if existing.is_none() {
        info!("Creating #{} channel in guild {}", BOARD_CHANNEL_NAME, guild_id);
        match guild
            .id
            .create_channel(
                &ctx.http,
                CreateChannel::new(BOARD_CHANNEL_NAME).kind(ChannelType::Text),
            )
            .await
        {
            Ok(channel) => {
                if let Err(e) = chat.send_message(channel.id.get(), BOARD_SETUP_MESSAGE).await {
                    error!("Failed to post setup message in guild {}: {}", guild_id, e);
                }
            }
            Err(e) => {
                error!(
                    "Failed to create #{} channel in guild {}: {:?}",
                    BOARD_CHANNEL_NAME, guild_id, e
                );
                return;
            }
        }
    }

    let board = ReactionBoard::new(db, &chat);
    if let Err(e) = board.sync_reactions(guild_id).await {
        error!("Failed to reconcile soundboard in guild {}: {}", guild_id, e);
    }
}
