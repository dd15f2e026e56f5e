//! Domain entities
//!
//! Transient per-screen view-state models. Nothing here is persisted; every
//! sequence lives exactly as long as the screen that loaded it.

pub mod friend;
pub mod photo;
pub mod post;
pub mod user;
pub mod viewer;

pub use friend::Friend;
pub use photo::{ImageRef, PhotoId};
pub use post::{Post, PostId};
pub use user::{UserId, UserProfile};
pub use viewer::Viewer;
