//! Error types for the navigation crate.

use std::fmt;

/// Errors from building a navigation catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Two entries share a title. Titles key list rendering and
    /// active-route matching, so they must be unique.
    DuplicateTitle { title: String },
    /// An entry has an empty title.
    EmptyTitle,
    /// A page name did not match any known page.
    UnknownPage { name: String },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTitle { title } => {
                write!(f, "duplicate navigation title: {title}")
            }
            Self::EmptyTitle => write!(f, "navigation title is empty"),
            Self::UnknownPage { name } => write!(f, "unknown page: {name}"),
        }
    }
}

impl std::error::Error for NavigationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_title_display() {
        let err = NavigationError::DuplicateTitle {
            title: "Profile".to_string(),
        };
        assert!(err.to_string().contains("duplicate"));
        assert!(err.to_string().contains("Profile"));
    }

    #[test]
    fn unknown_page_display() {
        let err = NavigationError::UnknownPage {
            name: "Checkout".to_string(),
        };
        assert_eq!(err.to_string(), "unknown page: Checkout");
    }
}
