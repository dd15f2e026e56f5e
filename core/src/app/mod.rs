//! Application layer
//!
//! Contains the screen controller. The controller coordinates the
//! data-provider ports and owns all view state for the home feed.

pub mod home_feed;

pub use home_feed::{
    HomeFeedController, HomeFeedSnapshot, ScrollMetrics, FRIEND_STRIP_SCROLL_THRESHOLD,
};
