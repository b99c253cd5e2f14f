//! Reaction board synchronizer.
//!
//! Guarantees exactly one live, pinned announcement message per guild whose
//! reaction set mirrors the binding table, and recreates the message and its
//! companion discussion thread when a platform-side deletion is observed.
//! All operations here are idempotent get-or-create flows: they run without
//! the playback lock, and concurrent callers converge on the same message.

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::{
    data::{AnnouncementRepository, SoundBindingRepository},
    error::PlaybackError,
    service::gateway::{BoardMessage, ChatGateway},
};

/// Reserved name of the designated soundboard text channel in every guild.
pub const BOARD_CHANNEL_NAME: &str = "soundboard";

/// Fixed greeting content of the pinned announcement message.
pub const BOARD_GREETING: &str = "🎵 React with an emoji below to play your sound!";

/// Name of the companion discussion thread attached to the announcement.
pub const BOARD_THREAD_NAME: &str = "soundboard-help";

/// Fixed help text posted into the companion thread.
pub const BOARD_THREAD_HELP: &str = "Use `/addsound` to bind an emoji to a sound file and \
`/removesound` to unbind it. React on the pinned message to play your sound into your \
current voice channel.";

/// Setup message posted when the designated channel is first created.
pub const BOARD_SETUP_MESSAGE: &str = "👋 Welcome to **Soundboard**!\n\n\
🔧 Use `/addsound` to bind an emoji to a sound file.\n\
🔧 Use `/removesound` to remove a binding.\n\
📜 Use `/list` to see all bindings.\n\
▶️ React on the pinned message below to play the corresponding sound.";

pub struct ReactionBoard<'a> {
    db: &'a DatabaseConnection,
    chat: &'a dyn ChatGateway,
}

impl<'a> ReactionBoard<'a> {
    pub fn new(db: &'a DatabaseConnection, chat: &'a dyn ChatGateway) -> Self {
        Self { db, chat }
    }

    /// Returns the guild's live announcement message, creating it if needed.
    ///
    /// Idempotent: repeated calls return the same logical message once
    /// established. Resolution order:
    /// 1. the persisted message id, if it still fetches;
    /// 2. a pinned message in the designated channel authored by the bot
    ///    (its id is re-persisted);
    /// 3. a freshly sent, pinned greeting message, persisted and given a
    ///    companion discussion thread.
    pub async fn get_or_create_announcement(
        &self,
        guild_id: u64,
    ) -> Result<BoardMessage, PlaybackError> {
        let channel_id = self
            .chat
            .find_text_channel(guild_id, BOARD_CHANNEL_NAME)
            .await?
            .ok_or_else(|| {
                PlaybackError::NotFound(format!(
                    "no #{} channel in guild {}",
                    BOARD_CHANNEL_NAME, guild_id
                ))
            })?;

        let repo = AnnouncementRepository::new(self.db);

        if let Some(message_id) = repo.find_message_id(guild_id).await? {
            match self.chat.fetch_message(channel_id, message_id).await {
                Ok(message) => return Ok(message),
                Err(PlaybackError::NotFound(_)) => {
                    warn!(
                        "Announcement {} for guild {} no longer exists, recreating",
                        message_id, guild_id
                    );
                }
                Err(err) => return Err(err),
            }
        }

        for pin in self.chat.pinned_messages(channel_id).await? {
            if pin.authored_by_bot {
                repo.upsert(guild_id, pin.id).await?;
                return Ok(pin);
            }
        }

        let message = self.chat.send_message(channel_id, BOARD_GREETING).await?;
        self.chat.pin_message(channel_id, message.id).await?;
        repo.upsert(guild_id, message.id).await?;
        self.create_help_thread(&message).await;

        info!(
            "Created and pinned new soundboard message {} in guild {}",
            message.id, guild_id
        );

        Ok(message)
    }

    /// Mirrors the guild's bound emojis onto the announcement message's
    /// reaction set.
    ///
    /// Clearing the existing reactions is best-effort: a permission failure
    /// is logged and the pass continues. An individual emoji the platform
    /// rejects is skipped with a warning, never fatal for the batch.
    pub async fn sync_reactions(&self, guild_id: u64) -> Result<(), PlaybackError> {
        let message = self.get_or_create_announcement(guild_id).await?;

        match self.chat.clear_reactions(message.channel_id, message.id).await {
            Ok(()) => {}
            Err(PlaybackError::Forbidden(reason)) => {
                warn!(
                    "Cannot clear reactions on announcement {} in guild {}: {}",
                    message.id, guild_id, reason
                );
            }
            Err(err) => return Err(err),
        }

        let emojis = SoundBindingRepository::new(self.db)
            .list_emojis(guild_id)
            .await?;

        for emoji in emojis {
            if let Err(err) = self
                .chat
                .add_reaction(message.channel_id, message.id, &emoji)
                .await
            {
                warn!(
                    "Failed to add reaction '{}' in guild {} (possibly invalid?): {}",
                    emoji, guild_id, err
                );
            }
        }

        Ok(())
    }

    /// Recreates the companion discussion thread on the live announcement
    /// message. Called when a thread deletion is observed.
    pub async fn ensure_thread(&self, guild_id: u64) -> Result<(), PlaybackError> {
        let message = self.get_or_create_announcement(guild_id).await?;
        self.create_help_thread(&message).await;
        Ok(())
    }

    /// Best-effort creation of the help thread plus its fixed help text.
    /// Creation fails when the message already carries a thread; that case is
    /// logged and ignored.
    async fn create_help_thread(&self, message: &BoardMessage) {
        match self
            .chat
            .create_thread(message.channel_id, message.id, BOARD_THREAD_NAME)
            .await
        {
            Ok(thread_id) => {
                if let Err(err) = self.chat.send_message(thread_id, BOARD_THREAD_HELP).await {
                    warn!("Failed to post help text into thread {}: {}", thread_id, err);
                }
            }
            Err(err) => {
                warn!(
                    "Failed to create help thread on message {}: {}",
                    message.id, err
                );
            }
        }
    }
}
