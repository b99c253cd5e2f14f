//! Reaction event handler feeding the playback coordinator.
//!
//! Converts the serenity reaction into the typed event record at the
//! boundary and hands it to the coordinator, which owns all validation and
//! error containment. Nothing here can fail the event loop.

use serenity::all::{Context, Reaction};

use crate::bot::gateway::SerenityChat;
use crate::service::gateway::ReactionEvent;
use crate::service::playback::PlaybackCoordinator;

/// Handles a reaction added to any visible message.
pub async fn handle_reaction_add(
    coordinator: &PlaybackCoordinator,
    ctx: Context,
    reaction: Reaction,
) {
    let event = ReactionEvent {
        guild_id: reaction.guild_id.map(|id| id.get()),
        channel_id: reaction.channel_id.get(),
        message_id: reaction.message_id.get(),
        user_id: reaction.user_id.map(|id| id.get()),
        emoji: reaction.emoji.to_string(),
    };

    let chat = SerenityChat::new(ctx);
    coordinator.dispatch(&chat, event).await;
}
