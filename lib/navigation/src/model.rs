//! The navigation model: a pure projection of the session user.

use serde::{Deserialize, Serialize};
use skill_time_platform_access::{CapabilitySet, User};

use crate::catalog::{Icon, NavigationCatalog};
use crate::route::{RouteTarget, UrlBuilder};

/// A resolved sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Display label, unique within a model.
    pub title: String,
    pub target: RouteTarget,
    pub icon: Icon,
}

/// Sidebar contents and role flags for one user snapshot.
///
/// Recomputed whenever the snapshot changes; never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationModel {
    pub items: Vec<NavigationItem>,
    pub is_admin: bool,
    pub is_verified_provider: bool,
}

impl NavigationModel {
    /// Returns the item whose target is `current_path`, if any.
    #[must_use]
    pub fn active_item(&self, current_path: &str) -> Option<&NavigationItem> {
        self.items
            .iter()
            .find(|item| item.target.as_str() == current_path)
    }

    /// Returns the item titles in display order.
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.title.as_str()).collect()
    }
}

/// Computes the navigation model for `user`.
///
/// Total and side-effect free: an absent user gets every ungated entry and
/// both flags false. Entries are filtered by the user's capabilities and
/// emitted in catalog order. Provider entries are not gated on verification.
pub fn compute_navigation<U: UrlBuilder + ?Sized>(
    catalog: &NavigationCatalog,
    urls: &U,
    user: Option<&User>,
) -> NavigationModel {
    let capabilities = CapabilitySet::for_user(user);

    let items = catalog
        .visible_to(&capabilities)
        .map(|entry| NavigationItem {
            title: entry.title.clone(),
            target: urls.resolve(entry.page),
            icon: entry.icon,
        })
        .collect();

    NavigationModel {
        items,
        is_admin: capabilities.is_admin(),
        is_verified_provider: user.is_some_and(User::is_verified_provider),
    }
}
