//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Direction
//! - The persisted preference set
//! - Message types for the event system

pub mod direction;
pub mod messages;
pub mod settings;

pub use direction::Direction;
pub use messages::{Message, SettingChange};
pub use settings::PreferenceSet;
