//! Production gateway implementations over serenity and songbird.
//!
//! `SerenityChat` adapts the text-side trait onto a serenity `Context`, and
//! `SongbirdVoice` adapts the voice-side trait onto the shared songbird
//! manager. All SDK failures are classified into the `PlaybackError`
//! taxonomy here, at the boundary, so the core pipeline never inspects
//! serenity error types.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serenity::all::{
    ChannelId, ChannelType, Context, CreateThread, GuildId, MessageId, ReactionType, UserId,
};
use serenity::async_trait;
use serenity::http::HttpError;
use songbird::error::JoinError;
use songbird::input::File;
use songbird::tracks::{PlayMode, TrackHandle};
use songbird::Songbird;
use tokio::sync::Mutex;

use crate::error::PlaybackError;
use crate::service::gateway::{BoardMessage, ChatGateway, VoiceGateway};

/// Maps a serenity error onto the dispatch failure taxonomy.
///
/// Permission and existence failures are recognized by HTTP status; anything
/// else (transport, timeout, gateway) is treated as transient.
fn classify(err: serenity::Error) -> PlaybackError {
    if let serenity::Error::Http(HttpError::UnsuccessfulRequest(ref response)) = err {
        return match response.status_code.as_u16() {
            403 => PlaybackError::Forbidden(err.to_string()),
            404 => PlaybackError::NotFound(err.to_string()),
            _ => PlaybackError::Transient(err.to_string()),
        };
    }
    PlaybackError::Transient(err.to_string())
}

/// Text-side gateway over a serenity `Context`.
///
/// Constructed per event; the context is cheap to clone and carries the HTTP
/// client and cache handles.
pub struct SerenityChat {
    ctx: Context,
}

impl SerenityChat {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    fn board_message(&self, message: &serenity::all::Message) -> BoardMessage {
        let bot_id = self.ctx.cache.current_user().id;
        BoardMessage {
            id: message.id.get(),
            channel_id: message.channel_id.get(),
            authored_by_bot: message.author.id == bot_id,
        }
    }
}

#[async_trait]
impl ChatGateway for SerenityChat {
    async fn find_text_channel(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<u64>, PlaybackError> {
        let channels = GuildId::new(guild_id)
            .channels(&self.ctx.http)
            .await
            .map_err(classify)?;

        Ok(channels
            .values()
            .find(|channel| channel.kind == ChannelType::Text && channel.name == name)
            .map(|channel| channel.id.get()))
    }

    async fn fetch_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<BoardMessage, PlaybackError> {
        let message = ChannelId::new(channel_id)
            .message(&self.ctx.http, MessageId::new(message_id))
            .await
            .map_err(classify)?;
        Ok(self.board_message(&message))
    }

    async fn pinned_messages(&self, channel_id: u64) -> Result<Vec<BoardMessage>, PlaybackError> {
        let pins = ChannelId::new(channel_id)
            .pins(&self.ctx.http)
            .await
            .map_err(classify)?;
        Ok(pins.iter().map(|message| self.board_message(message)).collect())
    }

    async fn send_message(
        &self,
        channel_id: u64,
        content: &str,
    ) -> Result<BoardMessage, PlaybackError> {
        let message = ChannelId::new(channel_id)
            .say(&self.ctx.http, content)
            .await
            .map_err(classify)?;
        Ok(self.board_message(&message))
    }

    async fn pin_message(&self, channel_id: u64, message_id: u64) -> Result<(), PlaybackError> {
        ChannelId::new(channel_id)
            .pin(&self.ctx.http, MessageId::new(message_id))
            .await
            .map_err(classify)
    }

    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
    ) -> Result<(), PlaybackError> {
        let reaction = ReactionType::try_from(emoji)
            .map_err(|err| PlaybackError::NotFound(format!("invalid emoji '{}': {}", emoji, err)))?;
        ChannelId::new(channel_id)
            .create_reaction(&self.ctx.http, MessageId::new(message_id), reaction)
            .await
            .map_err(classify)
    }

    async fn remove_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        user_id: u64,
        emoji: &str,
    ) -> Result<(), PlaybackError> {
        let reaction = ReactionType::try_from(emoji)
            .map_err(|err| PlaybackError::NotFound(format!("invalid emoji '{}': {}", emoji, err)))?;
        ChannelId::new(channel_id)
            .delete_reaction(
                &self.ctx.http,
                MessageId::new(message_id),
                Some(UserId::new(user_id)),
                reaction,
            )
            .await
            .map_err(classify)
    }

    async fn clear_reactions(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<(), PlaybackError> {
        ChannelId::new(channel_id)
            .delete_reactions(&self.ctx.http, MessageId::new(message_id))
            .await
            .map_err(classify)
    }

    async fn create_thread(
        &self,
        channel_id: u64,
        message_id: u64,
        name: &str,
    ) -> Result<u64, PlaybackError> {
        let thread = ChannelId::new(channel_id)
            .create_thread_from_message(
                &self.ctx.http,
                MessageId::new(message_id),
                CreateThread::new(name),
            )
            .await
            .map_err(classify)?;
        Ok(thread.id.get())
    }

    async fn member_is_bot(&self, guild_id: u64, user_id: u64) -> Result<bool, PlaybackError> {
        let member = GuildId::new(guild_id)
            .member(&self.ctx, UserId::new(user_id))
            .await
            .map_err(classify)?;
        Ok(member.user.bot)
    }

    async fn member_voice_channel(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<u64>, PlaybackError> {
        // Voice states only exist in the cache; the guard must not be held
        // across an await, so the lookup happens inside this block.
        let channel = {
            match self.ctx.cache.guild(GuildId::new(guild_id)) {
                Some(guild) => guild
                    .voice_states
                    .get(&UserId::new(user_id))
                    .and_then(|state| state.channel_id)
                    .map(|id| id.get()),
                None => None,
            }
        };
        Ok(channel)
    }
}

/// Voice-side gateway over the shared songbird manager.
///
/// Tracks the active `TrackHandle` per guild so the coordinator's stop and
/// completion polls target the stream it started.
pub struct SongbirdVoice {
    manager: Arc<Songbird>,
    tracks: Mutex<HashMap<u64, TrackHandle>>,
}

impl SongbirdVoice {
    pub fn new(manager: Arc<Songbird>) -> Self {
        Self {
            manager,
            tracks: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl VoiceGateway for SongbirdVoice {
    async fn connect(&self, guild_id: u64, channel_id: u64) -> Result<(), PlaybackError> {
        match self
            .manager
            .join(GuildId::new(guild_id), ChannelId::new(channel_id))
            .await
        {
            Ok(_call) => Ok(()),
            Err(JoinError::Dropped) => Err(PlaybackError::SessionInvalidated(
                "voice session dropped by the gateway".to_string(),
            )),
            Err(err) => Err(PlaybackError::Transient(err.to_string())),
        }
    }

    async fn disconnect(&self, guild_id: u64) -> Result<(), PlaybackError> {
        self.tracks.lock().await.remove(&guild_id);
        self.manager
            .remove(GuildId::new(guild_id))
            .await
            .map_err(|err| PlaybackError::Transient(err.to_string()))
    }

    async fn has_session(&self, guild_id: u64) -> bool {
        self.manager.get(GuildId::new(guild_id)).is_some()
    }

    async fn current_channel(&self, guild_id: u64) -> Option<u64> {
        let call = self.manager.get(GuildId::new(guild_id))?;
        let channel = call.lock().await.current_channel();
        channel.map(|id| id.0.get())
    }

    async fn play(&self, guild_id: u64, path: &Path) -> Result<(), PlaybackError> {
        let call = self.manager.get(GuildId::new(guild_id)).ok_or_else(|| {
            PlaybackError::Playback(format!("no active voice session in guild {}", guild_id))
        })?;

        let input = File::new(path.to_path_buf());
        let handle = call.lock().await.play_input(input.into());
        self.tracks.lock().await.insert(guild_id, handle);
        Ok(())
    }

    async fn stop(&self, guild_id: u64) {
        if let Some(handle) = self.tracks.lock().await.remove(&guild_id) {
            // A handle whose track already ended returns an error here; both
            // outcomes leave the stream stopped.
            let _ = handle.stop();
        }
    }

    async fn is_playing(&self, guild_id: u64) -> bool {
        let handle = self.tracks.lock().await.get(&guild_id).cloned();
        let Some(handle) = handle else {
            return false;
        };
        match handle.get_info().await {
            Ok(state) => state.playing == PlayMode::Play,
            Err(_) => false,
        }
    }
}
