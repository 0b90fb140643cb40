//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Direction, PreferenceSet, Messages)
//! - `controllers/` - Orchestration (DirectionController)
//! - `services/` - Business operations (store, resolver, front matter, presentation)
//! - `infrastructure/` - External integrations (backends, editor host, host events, error)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::direction::DirectionController;
pub use domain::{Direction, Message, PreferenceSet, SettingChange};
pub use infrastructure::backend::{FsBackend, MemoryBackend, PersistenceBackend, SETTINGS_PATH};
pub use infrastructure::editor::{ConsoleEditor, EditorHost};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::host_events::HostEvent;
pub use services::presentation::{DirectionStyles, LineKey, LineMotion, StyleSlot};
pub use services::resolver::resolve;
pub use services::store::PreferenceStore;
