use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use test_utils::{
    builder::TestBuilder,
    factory::{guild_announcement::GuildAnnouncementFactory, sound_binding::SoundBindingFactory},
};

use crate::service::gateway::ReactionEvent;
use crate::service::playback::PlaybackCoordinator;
use crate::service::test_support::{
    fast_timing, temp_sound_dir, FakeChat, FakeVoice, NEVER_FINISHES,
};


const GUILD: u64 = 1;
const BOARD_CHANNEL: u64 = 100;
const ANNOUNCEMENT: u64 = 500;
const USER: u64 = 7;
const VOICE_CHANNEL: u64 = 200;

/// Database with the announcement id and one `🔊 -> horn.mp3` binding seeded.
async fn seeded_db() -> DatabaseConnection {
    let test = TestBuilder::new()
        .with_soundboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();

    GuildAnnouncementFactory::new(&db)
        .guild_id(GUILD.to_string())
        .message_id(ANNOUNCEMENT.to_string())
        .build()
        .await
        .unwrap();
    SoundBindingFactory::new(&db)
        .guild_id(GUILD.to_string())
        .emoji("🔊")
        .sound_filename("horn.mp3")
        .build()
        .await
        .unwrap();

    db
}

/// Chat fake with the designated channel, the live announcement message, and
/// a non-bot member sitting in a voice channel.
fn seeded_chat() -> FakeChat {
    let chat = FakeChat::new();
    chat.add_channel(BOARD_CHANNEL, GUILD, "soundboard");
    chat.add_message(ANNOUNCEMENT, BOARD_CHANNEL, true, true);
    chat.add_member(GUILD, USER, false);
    chat.put_in_voice(GUILD, USER, VOICE_CHANNEL);
    chat
}

fn coordinator(
    db: DatabaseConnection,
    voice: Arc<FakeVoice>,
    sound_dir: PathBuf,
) -> PlaybackCoordinator {
    PlaybackCoordinator::new(db, voice, sound_dir, fast_timing())
}

fn reaction(message_id: u64, emoji: &str) -> ReactionEvent {
    ReactionEvent {
        guild_id: Some(GUILD),
        channel_id: BOARD_CHANNEL,
        message_id,
        user_id: Some(USER),
        emoji: emoji.to_string(),
    }
}
