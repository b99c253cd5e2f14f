//! Bot client construction and startup.

use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use songbird::Songbird;
use tracing::info;

use crate::bot::gateway::SongbirdVoice;
use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::service::playback::{PlaybackCoordinator, PlaybackTiming};

/// Builds the Discord client with the playback coordinator wired in.
///
/// The songbird manager is registered both as the client's voice manager and,
/// behind the `SongbirdVoice` gateway, as the coordinator's voice transport,
/// so events and playback share the same sessions.
pub async fn init_bot(config: &Config, db: DatabaseConnection) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::GUILD_VOICE_STATES;

    let manager = Songbird::serenity();
    let voice = Arc::new(SongbirdVoice::new(manager.clone()));

    let sound_dir = PathBuf::from(&config.sound_dir);
    let coordinator = Arc::new(PlaybackCoordinator::new(
        db.clone(),
        voice,
        sound_dir.clone(),
        PlaybackTiming::default(),
    ));

    let handler = Handler::new(db, coordinator, sound_dir);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .voice_manager_arc(manager)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Blocks until the bot shuts down or the gateway connection fails
/// permanently.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
