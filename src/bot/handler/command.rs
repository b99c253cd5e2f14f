//! Slash command handlers for binding management.
//!
//! `/addsound` stores an attached audio file under the guild's storage
//! directory and binds it to an emoji, `/removesound` deletes a binding and
//! its file, and `/list` shows the guild's bindings. Every command responds
//! ephemerally; mutations finish with a board reconciliation pass so the
//! announcement message's reaction set stays in step with the binding table.

use std::path::Path;

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponseFollowup, ResolvedValue,
};
use tokio::fs;
use tracing::{error, info, warn};

use crate::bot::gateway::SerenityChat;
use crate::data::SoundBindingRepository;
use crate::error::AppError;
use crate::service::board::ReactionBoard;

/// The global slash commands this bot registers on ready.
pub fn registrations() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("addsound")
            .description("Bind an emoji to a sound file")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "emoji", "Emoji to bind")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Attachment,
                    "sound",
                    "Audio file to play when the emoji is used",
                )
                .required(true),
            ),
        CreateCommand::new("removesound")
            .description("Remove an emoji binding and its sound file")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "emoji", "Bound emoji to remove")
                    .required(true),
            ),
        CreateCommand::new("list").description("List the emoji bindings in this server"),
    ]
}

/// Handles a slash command interaction.
///
/// Defers ephemerally up front since `/addsound` downloads the attachment
/// before it can answer. Command failures become an ephemeral failure
/// message; they never escape into the event loop.
pub async fn handle_command(
    db: &DatabaseConnection,
    sound_dir: &Path,
    ctx: Context,
    cmd: CommandInteraction,
) {
    if let Err(e) = cmd.defer_ephemeral(&ctx.http).await {
        error!("Failed to defer command '{}': {:?}", cmd.data.name, e);
        return;
    }

    let result = match cmd.data.name.as_str() {
        "addsound" => run_addsound(db, sound_dir, &ctx, &cmd).await,
        "removesound" => run_removesound(db, sound_dir, &ctx, &cmd).await,
        "list" => run_list(db, &cmd).await,
        other => {
            warn!("Received unknown command '{}'", other);
            return;
        }
    };

    let content = result.unwrap_or_else(|e| {
        error!("Command '{}' failed: {:?}", cmd.data.name, e);
        "❌ Something went wrong, try again later.".to_string()
    });

    if let Err(e) = cmd
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .content(content)
                .ephemeral(true),
        )
        .await
    {
        error!("Failed to respond to command '{}': {:?}", cmd.data.name, e);
    }
}

async fn run_addsound(
    db: &DatabaseConnection,
    sound_dir: &Path,
    ctx: &Context,
    cmd: &CommandInteraction,
) -> Result<String, AppError> {
    let Some(guild_id) = cmd.guild_id.map(|id| id.get()) else {
        return Ok("This command only works in a server.".to_string());
    };

    let mut emoji = None;
    let mut attachment = None;
    for option in cmd.data.options() {
        match (option.name, option.value) {
            ("emoji", ResolvedValue::String(value)) => emoji = Some(value.trim().to_string()),
            ("sound", ResolvedValue::Attachment(value)) => attachment = Some(value),
            _ => {}
        }
    }

    let Some(emoji) = emoji.filter(|emoji| !emoji.is_empty()) else {
        return Ok("Please provide the emoji to bind.".to_string());
    };
    let Some(attachment) = attachment else {
        return Ok("Please attach a sound file.".to_string());
    };

    // The filename becomes a path component under the guild's storage
    // directory; anything that could escape it is rejected outright.
    let filename = attachment.filename.clone();
    if filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..")
    {
        return Ok(format!("Invalid filename `{}`.", filename));
    }

    let bytes = attachment.download().await?;

    let guild_dir = sound_dir.join(guild_id.to_string());
    fs::create_dir_all(&guild_dir).await?;
    fs::write(guild_dir.join(&filename), &bytes).await?;

    SoundBindingRepository::new(db)
        .upsert(guild_id, &emoji, &filename, cmd.user.id.get())
        .await?;

    info!(
        "Bound {} to {} in guild {} (uploaded by {})",
        emoji, filename, guild_id, cmd.user.id
    );

    resync(db, ctx, guild_id).await;

    Ok(format!("✅ Bound {} to `{}`.", emoji, filename))
}

async fn run_removesound(
    db: &DatabaseConnection,
    sound_dir: &Path,
    ctx: &Context,
    cmd: &CommandInteraction,
) -> Result<String, AppError> {
    let Some(guild_id) = cmd.guild_id.map(|id| id.get()) else {
        return Ok("This command only works in a server.".to_string());
    };

    let mut emoji = None;
    for option in cmd.data.options() {
        if let ("emoji", ResolvedValue::String(value)) = (option.name, option.value) {
            emoji = Some(value.trim().to_string());
        }
    }
    let Some(emoji) = emoji.filter(|emoji| !emoji.is_empty()) else {
        return Ok("Please provide the emoji to unbind.".to_string());
    };

    let repo = SoundBindingRepository::new(db);
    let Some(binding) = repo.find(guild_id, &emoji).await? else {
        return Ok(format!("No sound is bound to {} in this server.", emoji));
    };

    repo.delete(guild_id, &emoji).await?;

    let path = sound_dir
        .join(guild_id.to_string())
        .join(&binding.sound_filename);
    if let Err(e) = fs::remove_file(&path).await {
        warn!("Could not remove sound file {}: {}", path.display(), e);
    }

    info!("Removed binding {} in guild {}", emoji, guild_id);

    resync(db, ctx, guild_id).await;

    Ok(format!(
        "🗑️ Removed the {} binding (`{}`).",
        emoji, binding.sound_filename
    ))
}

async fn run_list(db: &DatabaseConnection, cmd: &CommandInteraction) -> Result<String, AppError> {
    let Some(guild_id) = cmd.guild_id.map(|id| id.get()) else {
        return Ok("This command only works in a server.".to_string());
    };

    let bindings = SoundBindingRepository::new(db).list(guild_id).await?;
    if bindings.is_empty() {
        return Ok("No sounds bound yet. Use `/addsound` to create one.".to_string());
    }

    let lines: Vec<String> = bindings
        .iter()
        .map(|binding| format!("{} plays `{}`", binding.emoji, binding.sound_filename))
        .collect();
    Ok(lines.join("\n"))
}

/// Best-effort board reconciliation after a binding change.
async fn resync(db: &DatabaseConnection, ctx: &Context, guild_id: u64) {
    let chat = SerenityChat::new(ctx.clone());
    if let Err(e) = ReactionBoard::new(db, &chat).sync_reactions(guild_id).await {
        warn!("Failed to resync soundboard in guild {}: {}", guild_id, e);
    }
}
