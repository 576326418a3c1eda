//! Application shell for the skill-time marketplace.
//!
//! The shell wraps every page. It reads the session user from an injected
//! [`SessionProvider`](skill_time_platform_access::SessionProvider), derives
//! the sidebar and account sections from it, ends sessions on request, and
//! mounts the shell's background task once.
//!
//! # Example
//!
//! ```
//! use skill_time_navigation::{NavigationCatalog, PageUrlBuilder};
//! use skill_time_shell::derive_view_state;
//!
//! let view = derive_view_state(&NavigationCatalog::standard(), &PageUrlBuilder::new(), None);
//! assert!(!view.signed_in);
//! assert_eq!(view.display_name, "User");
//! assert_eq!(view.wallet_credits, 0);
//! ```

pub mod controller;
pub mod task;
pub mod view;

pub use controller::ShellController;
pub use task::BackgroundTask;
pub use view::{DEFAULT_AVATAR_INITIAL, DEFAULT_DISPLAY_NAME, ViewState, derive_view_state};
