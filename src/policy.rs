// src/policy.rs
//! Role-based inclusion rules.

use crate::error::Result;
use crate::types::{Item, Role, User};

/// Highest value a standard user may see (inclusive).
pub const STANDARD_VALUE_LIMIT: f64 = 500.0;

/// Values strictly above this are flagged as priority for elevated users.
pub const PRIORITY_THRESHOLD: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InclusionPolicy {
    /// Sees every item; high-value items are flagged.
    Elevated,
    /// Sees items up to [`STANDARD_VALUE_LIMIT`]; nothing is flagged.
    Standard,
}

impl InclusionPolicy {
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::Elevated,
            Role::User => Self::Standard,
        }
    }

    /// Selects the policy for the user's role.
    ///
    /// # Errors
    /// Returns [`crate::error::ReportError::InvalidUserRole`] for an unknown role.
    pub fn for_user(user: &User) -> Result<Self> {
        user.role().map(Self::for_role)
    }

    #[must_use]
    pub fn should_include(self, item: &Item) -> bool {
        match self {
            Self::Elevated => true,
            Self::Standard => item.value <= STANDARD_VALUE_LIMIT,
        }
    }

    /// Annotates an included item in place. Never clears an existing flag.
    pub fn post_process_item(self, item: &mut Item) {
        if self == Self::Elevated && item.value > PRIORITY_THRESHOLD {
            item.priority = true;
        }
    }

    /// Owned form of [`InclusionPolicy::post_process_item`].
    #[must_use]
    pub fn annotate(self, mut item: Item) -> Item {
        self.post_process_item(&mut item);
        item
    }
}
