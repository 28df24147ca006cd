//! Persisted subscription session state

use crate::error::Result;
use drift_core::{JsonStore, SessionStore, Tier};
use tracing::info;

const STORE_KEY: &str = "session_tier";

/// Current subscription session, persisted across launches
pub struct SessionState {
    store: JsonStore,
    tier: Tier,
}

impl SessionState {
    /// Open session state, loading the saved tier (Free by default)
    pub fn open(store: JsonStore) -> Result<Self> {
        let tier = store.load::<Tier>(STORE_KEY)?.unwrap_or_default();
        Ok(Self { store, tier })
    }

    /// Switch to the premium tier and persist
    pub fn upgrade_to_premium(&mut self) -> Result<()> {
        self.set_tier(Tier::Premium)
    }

    /// Switch back to the free tier and persist
    pub fn downgrade_to_free(&mut self) -> Result<()> {
        self.set_tier(Tier::Free)
    }

    fn set_tier(&mut self, tier: Tier) -> Result<()> {
        if self.tier != tier {
            info!(?tier, "subscription tier changed");
        }
        self.tier = tier;
        self.store.save(STORE_KEY, &self.tier)?;
        Ok(())
    }
}

impl SessionStore for SessionState {
    fn tier(&self) -> Tier {
        self.tier
    }
}
