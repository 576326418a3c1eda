//! Page names, route targets, and the URL builder that maps one to the other.
//!
//! The shell treats both sides as opaque: a [`PageName`] is a key, a
//! [`RouteTarget`] is whatever the [`UrlBuilder`] produced for it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::NavigationError;

/// A page the shell can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageName {
    Marketplace,
    MyLearning,
    TeachDashboard,
    Profile,
    AdminPanel,
}

impl PageName {
    /// All pages, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Marketplace,
        Self::MyLearning,
        Self::TeachDashboard,
        Self::Profile,
        Self::AdminPanel,
    ];

    /// Returns the page key.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Marketplace => "Marketplace",
            Self::MyLearning => "MyLearning",
            Self::TeachDashboard => "TeachDashboard",
            Self::Profile => "Profile",
            Self::AdminPanel => "AdminPanel",
        }
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageName {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NavigationError::UnknownPage {
                name: s.to_string(),
            })
    }
}

/// A resolved route, as produced by a [`UrlBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTarget(String);

impl RouteTarget {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    /// Returns the target as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RouteTarget {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolves page names to route targets.
pub trait UrlBuilder {
    fn resolve(&self, page: PageName) -> RouteTarget;
}

impl<U: UrlBuilder + ?Sized> UrlBuilder for Arc<U> {
    fn resolve(&self, page: PageName) -> RouteTarget {
        (**self).resolve(page)
    }
}

/// Default URL builder: `/` followed by the lowercased page name.
///
/// Spaces become `-`, and every path is prefixed with the optional base path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageUrlBuilder {
    base_path: String,
}

impl PageUrlBuilder {
    /// Creates a builder with no base path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder that mounts every page under `base_path`.
    ///
    /// Leading and trailing slashes in `base_path` are normalised away.
    #[must_use]
    pub fn with_base_path(base_path: &str) -> Self {
        let trimmed = base_path.trim_matches('/');
        let base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        Self { base_path }
    }
}

impl UrlBuilder for PageUrlBuilder {
    fn resolve(&self, page: PageName) -> RouteTarget {
        let slug = page.as_str().to_lowercase().replace(' ', "-");
        RouteTarget(format!("{}/{slug}", self.base_path))
    }
}
