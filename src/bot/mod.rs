//! Discord bot integration: event handling, slash commands, and gateways.
//!
//! This module owns everything that touches the Discord SDK. Events arrive
//! through the serenity `EventHandler` in `handler`, get converted into the
//! typed records from `crate::service::gateway`, and are processed by the
//! core pipeline. The production gateway implementations in `gateway` adapt
//! serenity (text side) and songbird (voice side) onto the gateway traits.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability and channel/thread lifecycle events
//! - `GUILD_MESSAGES` - Message deletion events for announcement recovery
//! - `GUILD_MESSAGE_REACTIONS` - The reaction events that trigger playback
//! - `GUILD_VOICE_STATES` - Voice state tracking for member channel lookup
//!   and the songbird driver handshake

pub mod gateway;
pub mod handler;
pub mod start;
