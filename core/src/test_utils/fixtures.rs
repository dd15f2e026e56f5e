//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{Friend, ImageRef, PhotoId, Post, PostId, UserId, UserProfile};

/// Profile for the default signed-in test user "u1"
pub fn test_profile() -> UserProfile {
    UserProfile {
        id: UserId::new("u1"),
        first_name: "Jo".to_string(),
        photo_id: Some(PhotoId::new("p1")),
    }
}

/// The avatar photo the default test profile points at
pub fn test_image() -> ImageRef {
    ImageRef {
        id: PhotoId::new("p1"),
        url: "https://cdn.test/photos/p1.jpg".to_string(),
    }
}

/// Create a test friend with a given id
pub fn test_friend(id: &str) -> Friend {
    Friend {
        id: UserId::new(id),
        first_name: format!("Friend {}", id),
        avatar_url: Some(format!("https://cdn.test/avatars/{}.jpg", id)),
    }
}

/// Create `count` friends with ids "f1".."fN"
pub fn test_friends(count: usize) -> Vec<Friend> {
    (1..=count).map(|i| test_friend(&format!("f{}", i))).collect()
}

/// Create a test post with a given id
pub fn test_post(id: &str) -> Post {
    Post {
        id: PostId::new(id),
        author_name: "Sam Field".to_string(),
        caption: format!("Caption for {}", id),
        image_url: Some(format!("https://cdn.test/posts/{}.jpg", id)),
        created_at: Utc::now(),
        like_count: 3,
        comment_count: 1,
    }
}

/// Create `count` posts with ids "p1".."pN"
pub fn test_posts(count: usize) -> Vec<Post> {
    (1..=count).map(|i| test_post(&format!("p{}", i))).collect()
}
