//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally. All database
//! queries, inserts, updates, and deletes are performed through these repositories.

pub mod announcement;
pub mod binding;

pub use announcement::AnnouncementRepository;
pub use binding::SoundBindingRepository;

#[cfg(test)]
mod test;
