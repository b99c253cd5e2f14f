//! Business logic for the soundboard.
//!
//! The core of this module is the reaction-to-playback dispatch pipeline:
//! - `playback`: the per-guild playback coordinator, the voice connection
//!   retry state machine, and the lock registry serializing playback per guild
//! - `board`: the reaction board synchronizer keeping the single pinned
//!   announcement message consistent with the binding table
//! - `gateway`: the typed boundary (`ReactionEvent`, `ChatGateway`,
//!   `VoiceGateway`) decoupling the core from the Discord SDK object shapes

pub mod board;
pub mod gateway;
pub mod playback;
