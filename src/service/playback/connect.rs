use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::{
    error::PlaybackError,
    service::{gateway::VoiceGateway, playback::PlaybackTiming},
};

/// Voice connection manager.
///
/// Owns the retry/backoff logic for establishing a voice session. Each attempt
/// ends connected, retryable after the base delay, or — on a recognized
/// session invalidation — retryable after tearing down the stale handle and a
/// longer cooldown. The caller must not retry further within the same dispatch
/// once this returns an error.
pub struct VoiceConnector<'a> {
    voice: &'a dyn VoiceGateway,
    timing: &'a PlaybackTiming,
}

impl<'a> VoiceConnector<'a> {
    pub fn new(voice: &'a dyn VoiceGateway, timing: &'a PlaybackTiming) -> Self {
        Self { voice, timing }
    }

    pub async fn connect_with_retries(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<(), PlaybackError> {
        for attempt in 1..=self.timing.connect_attempts {
            info!(
                "Connect attempt {} to voice channel {} in guild {}",
                attempt, channel_id, guild_id
            );

            match self.voice.connect(guild_id, channel_id).await {
                Ok(()) => {
                    info!("Voice handshake complete for guild {}", guild_id);
                    return Ok(());
                }
                Err(PlaybackError::SessionInvalidated(reason)) => {
                    warn!(
                        "Voice session invalidated for guild {}, forcing fresh reconnect: {}",
                        guild_id, reason
                    );
                    if let Err(err) = self.voice.disconnect(guild_id).await {
                        error!("Error during forced disconnect in guild {}: {}", guild_id, err);
                    }
                    sleep(self.timing.invalidated_cooldown).await;
                }
                Err(err) => {
                    error!("Connect attempt {} failed in guild {}: {}", attempt, guild_id, err);
                    sleep(self.timing.connect_delay).await;
                }
            }
        }

        error!("Failed to connect to voice in guild {} after retries", guild_id);
        Err(PlaybackError::Transient(format!(
            "could not connect to voice channel {} after {} attempts",
            channel_id, self.timing.connect_attempts
        )))
    }
}
