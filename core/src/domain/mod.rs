//! Domain layer
//!
//! Contains the screen's pure data model with no external dependencies.
//! - `entities`: view-state models the screen holds and hands to the UI
//! - `ports`: trait definitions for the external data collaborators

pub mod entities;
pub mod ports;
