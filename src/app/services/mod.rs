//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Preference persistence and lifecycle bookkeeping
//! - Direction resolution
//! - Front matter lookup
//! - Presentation details (page styles, Home/End motion)

pub mod front_matter;
pub mod presentation;
pub mod resolver;
pub mod store;
