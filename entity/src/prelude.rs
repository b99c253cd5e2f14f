pub use super::guild_announcement::Entity as GuildAnnouncement;
pub use super::sound_binding::Entity as SoundBinding;
