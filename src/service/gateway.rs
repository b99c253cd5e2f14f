//! Typed boundary between the core pipeline and the Discord SDK.
//!
//! Gateway events arrive as SDK objects whose shapes are owned by serenity;
//! the bot layer converts them into the fixed records below before they reach
//! the coordinator or board synchronizer. Platform operations go out through
//! the `ChatGateway` and `VoiceGateway` traits, whose production
//! implementations live in `crate::bot::gateway` and whose failures are
//! classified into the `PlaybackError` taxonomy at the adapter. Tests drive
//! the core with in-memory fakes instead of a live gateway.

use std::path::Path;

use async_trait::async_trait;

use crate::error::PlaybackError;

/// One inbound reaction, constructed at the platform boundary and consumed
/// once by the playback coordinator.
#[derive(Debug, Clone)]
pub struct ReactionEvent {
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub message_id: u64,
    pub user_id: Option<u64>,
    /// Emoji in gateway string form: unicode, or `<:name:id>` for custom emoji.
    pub emoji: String,
}

/// A message as seen by the board synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardMessage {
    pub id: u64,
    pub channel_id: u64,
    pub authored_by_bot: bool,
}

/// Text-side platform operations used by the coordinator and board synchronizer.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Finds the text channel with the given name in a guild.
    async fn find_text_channel(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<u64>, PlaybackError>;

    async fn fetch_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<BoardMessage, PlaybackError>;

    async fn pinned_messages(&self, channel_id: u64) -> Result<Vec<BoardMessage>, PlaybackError>;

    async fn send_message(
        &self,
        channel_id: u64,
        content: &str,
    ) -> Result<BoardMessage, PlaybackError>;

    async fn pin_message(&self, channel_id: u64, message_id: u64) -> Result<(), PlaybackError>;

    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
    ) -> Result<(), PlaybackError>;

    async fn remove_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        user_id: u64,
        emoji: &str,
    ) -> Result<(), PlaybackError>;

    async fn clear_reactions(&self, channel_id: u64, message_id: u64)
        -> Result<(), PlaybackError>;

    /// Creates a public thread attached to a message, returning the thread's channel id.
    async fn create_thread(
        &self,
        channel_id: u64,
        message_id: u64,
        name: &str,
    ) -> Result<u64, PlaybackError>;

    /// Whether the member is an automated account. `Err(NotFound)` when the
    /// member cannot be resolved.
    async fn member_is_bot(&self, guild_id: u64, user_id: u64) -> Result<bool, PlaybackError>;

    /// The voice channel the member currently occupies, if any.
    async fn member_voice_channel(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<u64>, PlaybackError>;
}

/// Voice-side platform operations. One session per guild at most; the
/// implementation owns the actual transport handles.
#[async_trait]
pub trait VoiceGateway: Send + Sync {
    /// Single connection attempt to a voice channel. Retry policy lives in the
    /// connection manager, not here.
    async fn connect(&self, guild_id: u64, channel_id: u64) -> Result<(), PlaybackError>;

    /// Tears down the guild's session, if any.
    async fn disconnect(&self, guild_id: u64) -> Result<(), PlaybackError>;

    /// Whether any session handle exists for the guild, connected or not.
    async fn has_session(&self, guild_id: u64) -> bool;

    /// The voice channel the live session is connected to. `None` when there
    /// is no session or the platform reports it disconnected.
    async fn current_channel(&self, guild_id: u64) -> Option<u64>;

    /// Starts streaming the file into the guild's session.
    async fn play(&self, guild_id: u64, path: &Path) -> Result<(), PlaybackError>;

    /// Stops the current stream, if any. Best-effort.
    async fn stop(&self, guild_id: u64);

    async fn is_playing(&self, guild_id: u64) -> bool;
}
