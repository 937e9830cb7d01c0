//! Application state.
//!
//! [`AppState`] is the explicit replacement for ambient browser storage: it
//! is loaded once from a [`StateStore`] and every change is written straight
//! back through the same store.

use crate::account::UserAccount;
use crate::diet::BudgetDietPlan;
use crate::profile::ProfileUpdate;
use crate::store::{StateKey, StateStore};
use crate::{Result, UserProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The last generated diet plan, with the profile it was built from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedDietPlan {
    pub plan: BudgetDietPlan,
    pub profile: UserProfile,
    pub generated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub profile: UserProfile,
    pub account: Option<UserAccount>,
    pub last_diet: Option<SavedDietPlan>,
}

impl AppState {
    /// Load state from a store, falling back to defaults for anything missing
    pub fn load<S: StateStore>(store: &S) -> Result<Self> {
        let profile = store.load(StateKey::Profile)?.unwrap_or_default();
        let account = store.load(StateKey::Account)?;
        let last_diet = store.load(StateKey::BudgetDiet)?;

        tracing::debug!(
            "Loaded state (signed in: {}, saved diet: {})",
            account.is_some(),
            last_diet.is_some()
        );

        Ok(Self {
            profile,
            account,
            last_diet,
        })
    }

    /// Merge a profile update and persist the result
    pub fn update_profile<S: StateStore>(
        &mut self,
        store: &mut S,
        update: &ProfileUpdate,
    ) -> Result<&UserProfile> {
        self.profile.apply(update);
        store.save(StateKey::Profile, &self.profile)?;
        tracing::info!("Profile updated");
        Ok(&self.profile)
    }

    /// Record a local sign-in
    pub fn login<S: StateStore>(&mut self, store: &mut S, name: &str, username: &str) -> Result<&UserAccount> {
        let account = UserAccount::new(name, username)?;
        store.save(StateKey::Account, &account)?;
        tracing::info!("Signed in as @{}", account.username);
        Ok(&*self.account.insert(account))
    }

    pub fn logout<S: StateStore>(&mut self, store: &mut S) -> Result<()> {
        store.remove(StateKey::Account)?;
        self.account = None;
        Ok(())
    }

    /// Remember a generated diet plan alongside the current profile
    pub fn save_diet_plan<S: StateStore>(
        &mut self,
        store: &mut S,
        plan: BudgetDietPlan,
    ) -> Result<&SavedDietPlan> {
        let saved = SavedDietPlan {
            plan,
            profile: self.profile.clone(),
            generated_at: Utc::now(),
        };
        store.save(StateKey::BudgetDiet, &saved)?;
        Ok(&*self.last_diet.insert(saved))
    }
}
