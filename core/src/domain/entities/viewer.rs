//! The signed-in user as shown in the screen header.

use serde::{Deserialize, Serialize};

use super::photo::ImageRef;
use super::user::{UserId, UserProfile};

/// Header identity for the signed-in user.
///
/// Built from the fetched profile; the avatar image is attached
/// separately once the photo lookup resolves, so a failed or missing
/// photo still leaves the name renderable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    pub id: UserId,
    pub display_name: String,
    pub avatar_image: Option<ImageRef>,
}

impl Viewer {
    /// Builds the header identity from a profile, with no avatar yet.
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.clone(),
            display_name: profile.first_name.clone(),
            avatar_image: None,
        }
    }
}
