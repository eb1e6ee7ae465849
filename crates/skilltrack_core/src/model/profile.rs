//! Signed-in user profile as returned by `GET /api/user/me`.

use serde::{Deserialize, Serialize};

const FALLBACK_GREETING_NAME: &str = "User";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
}

impl UserProfile {
    /// First space-separated token of `user_name`, or `"User"` when empty.
    pub fn greeting_name(&self) -> &str {
        greeting_name(Some(self))
    }
}

/// Greeting name for an optional profile.
pub fn greeting_name(profile: Option<&UserProfile>) -> &str {
    profile
        .and_then(|profile| profile.user_name.split(' ').next())
        .filter(|first| !first.is_empty())
        .unwrap_or(FALLBACK_GREETING_NAME)
}
