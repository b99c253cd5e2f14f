pub mod prelude;

pub mod guild_announcement;
pub mod sound_binding;
