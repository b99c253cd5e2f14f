use crate::data::binding::SoundBindingRepository;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory::sound_binding::SoundBindingFactory};

mod delete;
mod get_filename;
mod list_emojis;
mod upsert;
