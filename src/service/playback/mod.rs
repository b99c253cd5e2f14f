//! Guild playback coordinator.
//!
//! Top-level state machine triggered by each inbound reaction event. A
//! dispatch validates the event against the board synchronizer's announcement
//! message, acquires the guild's serialization lock, drives the voice
//! connection manager, streams the bound sound file, and cleans up. At most
//! one playback is active per guild at any instant; requests are serialized,
//! never mixed or queued — the latest request wins.

pub mod connect;
pub mod registry;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, warn};

use crate::{
    data::SoundBindingRepository,
    error::PlaybackError,
    service::{
        board::ReactionBoard,
        gateway::{ChatGateway, ReactionEvent, VoiceGateway},
        playback::{connect::VoiceConnector, registry::GuildLockRegistry},
    },
};

/// Timing knobs for the dispatch pipeline.
///
/// Defaults carry the production values; tests construct millisecond-scale
/// variants so retry and ceiling behavior can be exercised quickly.
#[derive(Debug, Clone)]
pub struct PlaybackTiming {
    /// Maximum voice connection attempts per dispatch.
    pub connect_attempts: u32,
    /// Delay between ordinary failed connection attempts.
    pub connect_delay: Duration,
    /// Longer cooldown after a recognized session invalidation.
    pub invalidated_cooldown: Duration,
    /// Settle delay after tearing down a stale or wrong-channel session.
    pub teardown_settle: Duration,
    /// Settle delay after connecting, bridging the window where a connection
    /// reports ready before the audio transport is actually usable.
    pub ready_settle: Duration,
    /// Brief settle between stopping a current stream and starting the next.
    pub stop_settle: Duration,
    /// Settle delay after playback completes, before reaction cleanup and
    /// disconnect.
    pub cleanup_settle: Duration,
    /// Poll interval for the playback-completion predicate.
    pub poll_interval: Duration,
    /// Overall ceiling on waiting for playback to complete.
    pub playback_ceiling: Duration,
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            connect_attempts: 5,
            connect_delay: Duration::from_secs(10),
            invalidated_cooldown: Duration::from_secs(20),
            teardown_settle: Duration::from_secs(2),
            ready_settle: Duration::from_secs(1),
            stop_settle: Duration::from_millis(200),
            cleanup_settle: Duration::from_secs(1),
            poll_interval: Duration::from_millis(500),
            playback_ceiling: Duration::from_secs(30),
        }
    }
}

pub struct PlaybackCoordinator {
    db: DatabaseConnection,
    voice: Arc<dyn VoiceGateway>,
    locks: GuildLockRegistry,
    sound_dir: PathBuf,
    timing: PlaybackTiming,
}

impl PlaybackCoordinator {
    pub fn new(
        db: DatabaseConnection,
        voice: Arc<dyn VoiceGateway>,
        sound_dir: PathBuf,
        timing: PlaybackTiming,
    ) -> Self {
        Self {
            db,
            voice,
            locks: GuildLockRegistry::new(),
            sound_dir,
            timing,
        }
    }

    /// Handles one reaction event end to end.
    ///
    /// This is the dispatch boundary: no error escapes to the caller. Failed
    /// validation short-circuits silently (logged, or a one-line channel
    /// notice where the pipeline says so); anything unexpected is caught and
    /// logged here.
    pub async fn dispatch(&self, chat: &dyn ChatGateway, event: ReactionEvent) {
        let guild_id = event.guild_id;
        match self.try_dispatch(chat, &event).await {
            Ok(()) => {}
            Err(PlaybackError::MissingResource(reason)) => {
                warn!("Dispatch aborted for guild {:?}: {}", guild_id, reason);
            }
            Err(err) => error!("Dispatch failed for guild {:?}: {}", guild_id, err),
        }
    }

    async fn try_dispatch(
        &self,
        chat: &dyn ChatGateway,
        event: &ReactionEvent,
    ) -> Result<(), PlaybackError> {
        let Some(guild_id) = event.guild_id else {
            warn!("Reaction event without guild id, ignoring");
            return Ok(());
        };
        let Some(user_id) = event.user_id else {
            debug!("Reaction event without user id in guild {}", guild_id);
            return Ok(());
        };

        let board = ReactionBoard::new(&self.db, chat);
        let announcement = match board.get_or_create_announcement(guild_id).await {
            Ok(message) => message,
            Err(err) => {
                warn!(
                    "Could not resolve announcement message for guild {}: {}",
                    guild_id, err
                );
                return Ok(());
            }
        };

        if event.message_id != announcement.id {
            debug!(
                "Ignoring reaction on unrelated message {} in guild {}",
                event.message_id, guild_id
            );
            return Ok(());
        }

        if event.channel_id != announcement.channel_id {
            debug!(
                "Ignoring reaction outside the designated channel in guild {}",
                guild_id
            );
            return Ok(());
        }

        match chat.member_is_bot(guild_id, user_id).await {
            Ok(false) => {}
            Ok(true) => {
                debug!("Ignoring reaction from bot account in guild {}", guild_id);
                return Ok(());
            }
            Err(err) => {
                debug!(
                    "Ignoring reaction from unresolvable member {} in guild {}: {}",
                    user_id, guild_id, err
                );
                return Ok(());
            }
        }

        let Some(filename) = SoundBindingRepository::new(&self.db)
            .get_filename(guild_id, &event.emoji)
            .await?
        else {
            debug!(
                "No sound bound to '{}' in guild {}",
                event.emoji, guild_id
            );
            return Ok(());
        };

        let Some(voice_channel) = chat.member_voice_channel(guild_id, user_id).await? else {
            info!("User {} is not in a voice channel in guild {}", user_id, guild_id);
            self.notify(chat, event.channel_id, &format!("<@{}> you're not in voice!", user_id))
                .await;
            return Ok(());
        };

        let path = self.sound_dir.join(guild_id.to_string()).join(&filename);
        if !file_exists(&path).await {
            self.notify(chat, event.channel_id, &format!("⚠️ Missing file: {}", filename))
                .await;
            return Err(PlaybackError::MissingResource(format!(
                "sound file {} not on disk",
                path.display()
            )));
        }

        // Serialize the voice-session transition and playback per guild. The
        // guard drop releases the lock on every exit path below.
        let lock = self.locks.lock_for(guild_id).await;
        let _guard = lock.lock().await;

        self.play_locked(chat, event, guild_id, user_id, voice_channel, &path)
            .await
    }

    /// The serialized region: session reuse or teardown, connection, playback,
    /// bounded completion wait, and cleanup. Caller holds the guild lock.
    async fn play_locked(
        &self,
        chat: &dyn ChatGateway,
        event: &ReactionEvent,
        guild_id: u64,
        user_id: u64,
        voice_channel: u64,
        path: &Path,
    ) -> Result<(), PlaybackError> {
        let mut owned_by_this_request = false;

        let mut live = false;
        if self.voice.has_session(guild_id).await {
            match self.voice.current_channel(guild_id).await {
                Some(channel) if channel == voice_channel => {
                    live = true;
                }
                Some(_) => {
                    info!("Tearing down session bound to another channel in guild {}", guild_id);
                    if let Err(err) = self.voice.disconnect(guild_id).await {
                        error!("Error disconnecting wrong-channel session in guild {}: {}", guild_id, err);
                    }
                    sleep(self.timing.teardown_settle).await;
                }
                None => {
                    info!("Tearing down stale disconnected session in guild {}", guild_id);
                    if let Err(err) = self.voice.disconnect(guild_id).await {
                        error!("Error disconnecting stale session in guild {}: {}", guild_id, err);
                    }
                    sleep(self.timing.teardown_settle).await;
                }
            }
        }

        if !live {
            let connector = VoiceConnector::new(self.voice.as_ref(), &self.timing);
            if connector
                .connect_with_retries(guild_id, voice_channel)
                .await
                .is_err()
            {
                self.notify(chat, event.channel_id, "❌ Could not connect to voice.")
                    .await;
                return Ok(());
            }
            owned_by_this_request = true;
        }

        // Bridge the window where the connection reports ready before the
        // audio transport is usable.
        sleep(self.timing.ready_settle).await;

        if self.voice.is_playing(guild_id).await {
            info!("Stopping current stream in guild {} (latest request wins)", guild_id);
            self.voice.stop(guild_id).await;
            sleep(self.timing.stop_settle).await;
        }

        info!("Playing {} in guild {}", path.display(), guild_id);
        if let Err(err) = self.voice.play(guild_id, path).await {
            error!("Playback start failed in guild {}: {}", guild_id, err);
            self.notify(chat, event.channel_id, "❌ Playback failed.").await;
            if owned_by_this_request {
                if let Err(err) = self.voice.disconnect(guild_id).await {
                    warn!("Error disconnecting after failed playback in guild {}: {}", guild_id, err);
                }
            }
            return Ok(());
        }

        self.wait_until_done(guild_id).await;

        sleep(self.timing.cleanup_settle).await;

        if let Err(err) = chat
            .remove_reaction(event.channel_id, event.message_id, user_id, &event.emoji)
            .await
        {
            warn!("Failed to remove reaction in guild {}: {}", guild_id, err);
        }

        // A session this dispatch did not create is left untouched even if
        // idle; other logic may depend on it.
        if owned_by_this_request
            && !self.voice.is_playing(guild_id).await
            && self.voice.current_channel(guild_id).await.is_some()
        {
            info!("Disconnecting from voice channel {} in guild {}", voice_channel, guild_id);
            if let Err(err) = self.voice.disconnect(guild_id).await {
                warn!("Error during disconnect in guild {}: {}", guild_id, err);
            }
        }

        Ok(())
    }

    /// Blocks this dispatch (not other guilds) until playback completes,
    /// polling the still-playing predicate under an overall ceiling. On
    /// ceiling breach the stream is force-stopped; fail-safe, not fatal.
    async fn wait_until_done(&self, guild_id: u64) {
        let poll = async {
            while self.voice.is_playing(guild_id).await {
                sleep(self.timing.poll_interval).await;
            }
        };

        if timeout(self.timing.playback_ceiling, poll).await.is_err() {
            warn!("Playback ceiling reached in guild {}, stopping stream", guild_id);
            self.voice.stop(guild_id).await;
        }
    }

    /// One-line channel notice; failure to deliver is logged, never surfaced.
    async fn notify(&self, chat: &dyn ChatGateway, channel_id: u64, content: &str) {
        if let Err(err) = chat.send_message(channel_id, content).await {
            warn!("Failed to send notice to channel {}: {}", channel_id, err);
        }
    }
}

async fn file_exists(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
mod test;
