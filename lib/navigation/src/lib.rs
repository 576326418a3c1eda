//! Session-derived navigation for the skill-time shell.
//!
//! This crate provides:
//! - Page names, route targets, and URL building (`PageName`, `RouteTarget`, `UrlBuilder`)
//! - The declarative, capability-gated sidebar table (`NavigationCatalog`)
//! - The pure projection from a session user to sidebar contents (`compute_navigation`)
//!
//! # Example
//!
//! ```
//! use skill_time_navigation::{NavigationCatalog, PageUrlBuilder, compute_navigation};
//!
//! let model = compute_navigation(&NavigationCatalog::standard(), &PageUrlBuilder::new(), None);
//! assert_eq!(model.titles(), ["Marketplace", "My Learning", "My Courses", "Profile"]);
//! assert!(!model.is_admin);
//! ```

pub mod catalog;
pub mod error;
pub mod model;
pub mod route;

pub use catalog::{Icon, NavGroup, NavigationCatalog, NavigationEntry};
pub use error::NavigationError;
pub use model::{NavigationItem, NavigationModel, compute_navigation};
pub use route::{PageName, PageUrlBuilder, RouteTarget, UrlBuilder};
