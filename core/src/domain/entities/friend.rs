//! Friend entries shown in the horizontal strip above the feed.

use serde::{Deserialize, Serialize};

use super::user::UserId;

/// One friend in the strip
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: UserId,
    pub first_name: String,
    pub avatar_url: Option<String>,
}
