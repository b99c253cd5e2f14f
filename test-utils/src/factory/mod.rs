//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let binding = factory::sound_binding::create_binding(&db).await?;
//!
//!     // Use the builder pattern for custom values
//!     let binding = factory::sound_binding::SoundBindingFactory::new(&db)
//!         .guild_id("987654321")
//!         .emoji("🔊")
//!         .sound_filename("horn.mp3")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod guild_announcement;
pub mod helpers;
pub mod sound_binding;
