//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Persistence backends for the settings file
//! - The host editor interface
//! - Host event decoding
//! - Error types

pub mod backend;
pub mod editor;
pub mod error;
pub mod host_events;
