//! Headless view-state controller for a social app's home screen.
//!
//! Owns no rendering: the controller loads the signed-in user's profile and
//! avatar, their friend strip, and a cursor-paginated feed of posts through
//! provider ports, and exposes the result as a serializable snapshot for
//! whatever presentation layer embeds it. Uses hexagonal (ports & adapters)
//! architecture so host apps and tests supply their own providers.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;

pub use app::{HomeFeedController, HomeFeedSnapshot, ScrollMetrics, FRIEND_STRIP_SCROLL_THRESHOLD};
pub use config::ScreenConfig;
pub use error::ProviderError;
