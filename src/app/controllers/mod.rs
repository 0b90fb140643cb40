//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the host editor:
//! - Direction management for the open document

pub mod direction;
