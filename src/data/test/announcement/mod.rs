use crate::data::announcement::AnnouncementRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::guild_announcement::GuildAnnouncementFactory};

mod upsert;
