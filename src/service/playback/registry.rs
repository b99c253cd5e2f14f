use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

/// Process-wide registry of per-guild serialization locks.
///
/// Entries are created lazily on first dispatch for a guild and never removed;
/// guild count per process is bounded and small. Holding a guild's lock
/// serializes the voice-session transition and playback for that guild while
/// imposing no ordering across guilds.
#[derive(Default)]
pub struct GuildLockRegistry {
    locks: Mutex<HashMap<u64, Arc<Mutex<()>>>>,
}

impl GuildLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock for a guild, creating it on first use.
    pub async fn lock_for(&self, guild_id: u64) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(guild_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
