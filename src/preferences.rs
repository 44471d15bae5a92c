use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Notification category a subscriber can opt into.
///
/// The wire form is the lowercase name (`"bugfix"`, `"enhancement"`,
/// `"security"`), which is what downstream consumers agreed upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Bugfix,
    Enhancement,
    Security,
}

impl Preference {
    /// The full preference domain, in declaration order.
    pub const ALL: [Preference; 3] = [
        Preference::Bugfix,
        Preference::Enhancement,
        Preference::Security,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Preference::Bugfix => "bugfix",
            Preference::Enhancement => "enhancement",
            Preference::Security => "security",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown subscription preference: {0:?}")]
pub struct UnknownPreference(pub String);

impl FromStr for Preference {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preference::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPreference(s.to_string()))
    }
}
