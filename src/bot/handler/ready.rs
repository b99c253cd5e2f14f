//! Ready event handler for bot initialization.
//!
//! Fires once per connection after the gateway handshake. Used to log the
//! connected account, set the activity line, and register the global slash
//! commands.

use serenity::all::{ActivityData, Command, Context, Ready};
use tracing::{error, info};

use crate::bot::handler::command;

/// Handles the ready event when the bot connects to Discord.
pub async fn handle_ready(ctx: Context, ready: Ready) {
    info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::listening("your reactions")));

    if let Err(e) = Command::set_global_commands(&ctx.http, command::registrations()).await {
        error!("Failed to register global commands: {:?}", e);
    }
}
