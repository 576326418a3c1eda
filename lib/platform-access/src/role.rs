//! Role and capability types for marketplace access control.
//!
//! The backend tags every user with a single role. The shell never checks
//! roles directly; it derives a [`CapabilitySet`] and gates UI sections on
//! the capabilities in it.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Marketplace role assigned by the backend.
///
/// Tags the shell does not know about deserialize to `Other` and carry no
/// capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Learner and provider access to the marketplace.
    #[default]
    Standard,
    /// Administrator with access to the admin panel.
    Admin,
    /// Any role tag this version of the shell does not recognise.
    #[serde(other)]
    Other,
}

impl Role {
    /// Returns true if this role has admin privileges.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// A named permission gating visibility of a UI element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Access to platform administration.
    Admin,
}

/// Set of capabilities held by the current session user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    capabilities: Vec<Capability>,
}

impl CapabilitySet {
    /// Creates an empty capability set (guest or standard user).
    #[must_use]
    pub fn none() -> Self {
        Self {
            capabilities: Vec::new(),
        }
    }

    /// Creates a capability set holding the admin capability.
    #[must_use]
    pub fn admin() -> Self {
        Self {
            capabilities: vec![Capability::Admin],
        }
    }

    /// Derives the capability set for a role.
    #[must_use]
    pub fn from_role(role: Role) -> Self {
        if role.is_admin() {
            Self::admin()
        } else {
            Self::none()
        }
    }

    /// Derives the capability set for the session user, if any.
    ///
    /// An absent user holds no capabilities.
    #[must_use]
    pub fn for_user(user: Option<&User>) -> Self {
        user.map_or_else(Self::none, |user| Self::from_role(user.role()))
    }

    /// Returns true if the set grants the capability.
    #[must_use]
    pub fn contains(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Returns true if the set grants `required`, or nothing is required.
    #[must_use]
    pub fn permits(&self, required: Option<Capability>) -> bool {
        required.is_none_or(|capability| self.contains(capability))
    }

    /// Returns true if the set holds the admin capability.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.contains(Capability::Admin)
    }
}
