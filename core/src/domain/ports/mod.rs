//! Domain ports (traits)
//!
//! Port traits define the interfaces the screen controller requires.
//! Adapters provide concrete implementations (HTTP client, device
//! key-value store); tests provide in-memory ones.

pub mod providers;
pub mod session;

pub use providers::{FeedProvider, FriendProvider, PhotoProvider, ProfileProvider};
pub use session::SessionStore;
