//! Declarative navigation catalog.
//!
//! Every sidebar entry is a row in a table: where it links, which group it
//! belongs to, and the capability it requires, if any. Gating is decided by
//! filtering the table against the user's [`CapabilitySet`], never by
//! conditionals at the call site.

use serde::{Deserialize, Serialize};
use skill_time_core::Result;
use skill_time_platform_access::{Capability, CapabilitySet};
use std::collections::HashSet;

use crate::error::NavigationError;
use crate::route::PageName;

/// Glyph shown beside a navigation entry.
///
/// The shell never interprets icons; the presentation layer maps them to
/// artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    BookOpen,
    Video,
    Settings,
    ShieldCheck,
}

impl Icon {
    /// Returns the glyph name used by the icon set.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::BookOpen => "book-open",
            Self::Video => "video",
            Self::Settings => "settings",
            Self::ShieldCheck => "shield-check",
        }
    }
}

/// Section of the sidebar an entry belongs to.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavGroup {
    /// Browsing and taking courses.
    Learner,
    /// Teaching and managing courses.
    Provider,
    /// Account pages every user has.
    Common,
    /// Platform administration.
    Admin,
}

/// One row of the navigation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub title: String,
    pub page: PageName,
    pub icon: Icon,
    pub group: NavGroup,
    /// Capability required to see the entry; `None` means everyone.
    pub required: Option<Capability>,
}

impl NavigationEntry {
    /// Creates an entry visible to everyone.
    #[must_use]
    pub fn new(title: impl Into<String>, page: PageName, icon: Icon, group: NavGroup) -> Self {
        Self {
            title: title.into(),
            page,
            icon,
            group,
            required: None,
        }
    }

    /// Restricts the entry to users holding `capability`.
    #[must_use]
    pub fn requires(mut self, capability: Capability) -> Self {
        self.required = Some(capability);
        self
    }

    /// Returns true if the capability set may see this entry.
    #[must_use]
    pub fn is_visible_to(&self, capabilities: &CapabilitySet) -> bool {
        capabilities.permits(self.required)
    }
}

/// Ordered, title-unique table of navigation entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCatalog {
    entries: Vec<NavigationEntry>,
}

impl NavigationCatalog {
    /// Builds a catalog from entries.
    ///
    /// Entries are ordered by group; within a group the given order is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if any title is empty or appears twice.
    pub fn new(mut entries: Vec<NavigationEntry>) -> Result<Self, NavigationError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.title.trim().is_empty() {
                return Err(NavigationError::EmptyTitle.into());
            }
            if !seen.insert(entry.title.as_str()) {
                return Err(NavigationError::DuplicateTitle {
                    title: entry.title.clone(),
                }
                .into());
            }
        }

        entries.sort_by_key(|entry| entry.group);
        Ok(Self { entries })
    }

    /// The marketplace's sidebar.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: vec![
                NavigationEntry::new(
                    "Marketplace",
                    PageName::Marketplace,
                    Icon::Home,
                    NavGroup::Learner,
                ),
                NavigationEntry::new(
                    "My Learning",
                    PageName::MyLearning,
                    Icon::BookOpen,
                    NavGroup::Learner,
                ),
                NavigationEntry::new(
                    "My Courses",
                    PageName::TeachDashboard,
                    Icon::Video,
                    NavGroup::Provider,
                ),
                NavigationEntry::new(
                    "Profile",
                    PageName::Profile,
                    Icon::Settings,
                    NavGroup::Common,
                ),
                NavigationEntry::new(
                    "Admin Panel",
                    PageName::AdminPanel,
                    Icon::ShieldCheck,
                    NavGroup::Admin,
                )
                .requires(Capability::Admin),
            ],
        }
    }

    /// Returns all entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Returns the first entry linking to `page`.
    #[must_use]
    pub fn entry_for(&self, page: PageName) -> Option<&NavigationEntry> {
        self.entries.iter().find(|entry| entry.page == page)
    }

    /// Returns the entries visible to `capabilities`, in display order.
    pub fn visible_to<'a>(
        &'a self,
        capabilities: &'a CapabilitySet,
    ) -> impl Iterator<Item = &'a NavigationEntry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.is_visible_to(capabilities))
    }
}

impl Default for NavigationCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(catalog: &NavigationCatalog) -> Vec<&str> {
        catalog.entries().iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn standard_catalog_titles_are_unique() {
        let catalog = NavigationCatalog::standard();
        let rebuilt = NavigationCatalog::new(catalog.entries().to_vec()).expect("unique titles");
        assert_eq!(rebuilt, catalog);
    }

    #[test]
    fn standard_catalog_is_in_group_order() {
        let catalog = NavigationCatalog::standard();
        assert_eq!(
            titles(&catalog),
            vec![
                "Marketplace",
                "My Learning",
                "My Courses",
                "Profile",
                "Admin Panel"
            ]
        );
        assert!(
            catalog
                .entries()
                .windows(2)
                .all(|pair| pair[0].group <= pair[1].group)
        );
    }

    #[test]
    fn only_the_admin_entry_is_gated() {
        let gated: Vec<_> = NavigationCatalog::standard()
            .entries()
            .iter()
            .filter(|e| e.required.is_some())
            .map(|e| e.title.clone())
            .collect();
        assert_eq!(gated, vec!["Admin Panel"]);
    }

    #[test]
    fn new_rejects_duplicate_titles() {
        let entries = vec![
            NavigationEntry::new("Profile", PageName::Profile, Icon::Settings, NavGroup::Common),
            NavigationEntry::new("Profile", PageName::MyLearning, Icon::BookOpen, NavGroup::Learner),
        ];
        assert!(NavigationCatalog::new(entries).is_err());
    }

    #[test]
    fn new_rejects_empty_titles() {
        let entries = vec![NavigationEntry::new(
            "  ",
            PageName::Profile,
            Icon::Settings,
            NavGroup::Common,
        )];
        assert!(NavigationCatalog::new(entries).is_err());
    }

    #[test]
    fn new_orders_by_group_keeping_relative_order() {
        let entries = vec![
            NavigationEntry::new("Admin", PageName::AdminPanel, Icon::ShieldCheck, NavGroup::Admin),
            NavigationEntry::new("B", PageName::MyLearning, Icon::BookOpen, NavGroup::Learner),
            NavigationEntry::new("A", PageName::Marketplace, Icon::Home, NavGroup::Learner),
        ];
        let catalog = NavigationCatalog::new(entries).expect("valid");
        assert_eq!(titles(&catalog), vec!["B", "A", "Admin"]);
    }

    #[test]
    fn visible_to_filters_by_capability() {
        let catalog = NavigationCatalog::standard();
        let none = CapabilitySet::none();
        let admin = CapabilitySet::admin();

        assert_eq!(catalog.visible_to(&none).count(), 4);
        assert_eq!(catalog.visible_to(&admin).count(), 5);
    }

    #[test]
    fn entry_for_finds_page_titles() {
        let catalog = NavigationCatalog::standard();
        let entry = catalog.entry_for(PageName::TeachDashboard).expect("entry");
        assert_eq!(entry.title, "My Courses");

        let empty = NavigationCatalog::new(Vec::new()).expect("valid");
        assert!(empty.entry_for(PageName::Profile).is_none());
    }

    #[test]
    fn icon_names_match_glyph_set() {
        assert_eq!(Icon::BookOpen.name(), "book-open");
        let json = serde_json::to_string(&Icon::ShieldCheck).expect("serialize");
        assert_eq!(json, "\"shield-check\"");
    }
}
