// src/types.rs
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ReportError;

/// A single line item supplied by the caller.
///
/// Identifiers are unsigned integers; item input with text ids such as
/// `"A-1"` does not deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    /// Rendered with `f64`'s `Display`: whole numbers print without a
    /// fraction (`300`), negative zero prints as `-0` and large magnitudes
    /// print in full (`1e21` as `1000000000000000000000`), never in
    /// exponent form.
    pub value: f64,
    /// Set by the elevated policy on high-value items. Absent in input means `false`.
    #[serde(default)]
    pub priority: bool,
}

impl Item {
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            priority: false,
        }
    }
}

/// The user a report is generated for.
///
/// `role` keeps the raw text supplied by the caller. It is resolved to a
/// [`Role`] only when a policy is selected, which is where an unknown role
/// is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: String,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }

    /// Resolves the raw role text.
    ///
    /// # Errors
    /// Returns [`ReportError::InvalidUserRole`] if the role is not `ADMIN` or `USER`.
    pub fn role(&self) -> Result<Role, ReportError> {
        self.role.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Wire identifier, as accepted by [`Role::from_str`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }
}

impl FromStr for Role {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            other => Err(ReportError::InvalidUserRole(other.to_string())),
        }
    }
}
