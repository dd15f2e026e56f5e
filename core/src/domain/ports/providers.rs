//! Data-provider port traits
//!
//! These traits define the interface to the backing feed service.
//! Implementations are provided by adapters (e.g., an HTTP client).

use async_trait::async_trait;

use crate::domain::entities::{Friend, ImageRef, PhotoId, Post, PostId, UserId, UserProfile};
use crate::error::ProviderError;

/// Provider for user profiles
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Get the profile for a user. `Ok(None)` means no such profile.
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, ProviderError>;
}

/// Provider for resolving photo identifiers to renderable images
#[async_trait]
pub trait PhotoProvider: Send + Sync {
    /// Get a photo record by its identifier. `Ok(None)` means no such photo.
    async fn get_photo_by_id(&self, photo_id: &PhotoId)
        -> Result<Option<ImageRef>, ProviderError>;
}

/// Provider for a user's friend list
#[async_trait]
pub trait FriendProvider: Send + Sync {
    /// Get all friends of a user
    async fn get_all_friends(&self, user_id: &UserId) -> Result<Vec<Friend>, ProviderError>;
}

/// Provider for pages of feed posts
#[async_trait]
pub trait FeedProvider: Send + Sync {
    /// Get one page of posts.
    ///
    /// `after` is the identifier of the last post already shown; `None`
    /// requests the first page. An empty page means the feed has no
    /// more posts past that point.
    async fn get_newsfeed_posts(&self, after: Option<&PostId>) -> Result<Vec<Post>, ProviderError>;
}
