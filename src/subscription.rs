use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::preferences::Preference;

/// Prefix applied to every generated user name and org id.
pub const USERNAME_PREFIX: &str = "emt-";

/// A single email subscription fixture record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(rename = "user_name")]
    pub username: String,
    pub org_id: String,
    #[serde(rename = "preferences")]
    pub user_preferences: Vec<Preference>,
}

impl Subscription {
    /// Build a record whose user name and org id are both derived from `id`.
    pub fn from_id(id: Uuid, user_preferences: Vec<Preference>) -> Self {
        let name = format!("{USERNAME_PREFIX}{}", id.hyphenated());
        Self {
            username: name.clone(),
            org_id: name,
            user_preferences,
        }
    }
}
