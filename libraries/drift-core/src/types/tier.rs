//! Subscription tier

use serde::{Deserialize, Serialize};

/// Subscription tier gating feature limits (e.g. favorites count)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Free tier with capped features
    #[default]
    Free,

    /// Premium tier with unlimited features
    Premium,
}

impl Tier {
    /// Whether this tier is premium
    pub fn is_premium(self) -> bool {
        self == Tier::Premium
    }
}
