use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Context, EventHandler, Guild, GuildChannel, GuildId, Interaction, MessageId,
    PartialGuildChannel, Reaction, Ready,
};
use serenity::async_trait;

use crate::service::playback::PlaybackCoordinator;

pub mod command;
pub mod guild;
pub mod message;
pub mod reaction;
pub mod ready;
pub mod thread;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub coordinator: Arc<PlaybackCoordinator>,
    pub sound_dir: PathBuf,
}

impl Handler {
    pub fn new(db: DatabaseConnection, coordinator: Arc<PlaybackCoordinator>, sound_dir: PathBuf) -> Self {
        Self {
            db,
            coordinator,
            sound_dir,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, ctx, guild, is_new).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction_add(&self.coordinator, ctx, add_reaction).await;
    }

    /// Called when a message is deleted from a channel
    async fn message_delete(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        deleted_message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        message::handle_message_delete(&self.db, ctx, channel_id, deleted_message_id, guild_id)
            .await;
    }

    /// Called when a thread is deleted from a guild
    async fn thread_delete(
        &self,
        ctx: Context,
        thread: PartialGuildChannel,
        full_thread_data: Option<GuildChannel>,
    ) {
        thread::handle_thread_delete(&self.db, ctx, thread, full_thread_data).await;
    }

    /// Called when a slash command or other interaction is created
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(cmd) = interaction {
            command::handle_command(&self.db, &self.sound_dir, ctx, cmd).await;
        }
    }
}
