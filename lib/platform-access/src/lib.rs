//! Session access for the skill-time shell.
//!
//! This crate provides:
//! - The session user snapshot (`User`)
//! - Roles and the capabilities derived from them (`Role`, `Capability`, `CapabilitySet`)
//! - The session provider contract (`SessionProvider`, `UserSource`)
//! - A stale-time cache in front of any user source (`CachedSessionProvider`)
//!
//! # Access Model
//!
//! The backend assigns each user one role. UI sections are gated on
//! capabilities, never on roles directly:
//! - Every user and every guest sees the learner, provider and common sections
//! - The admin role grants the `admin` capability, which unlocks the admin panel
//!
//! # Example
//!
//! ```
//! use skill_time_core::UserId;
//! use skill_time_platform_access::{Capability, CapabilitySet, Role, User};
//!
//! let mut user = User::new(UserId::from("65f1c0ffee"));
//! user.set_full_name(Some("Dana Lee".to_string()));
//! user.set_role(Role::Admin);
//!
//! let capabilities = CapabilitySet::for_user(Some(&user));
//! assert!(capabilities.permits(Some(Capability::Admin)));
//! assert!(!CapabilitySet::for_user(None).is_admin());
//! ```

pub mod error;
pub mod role;
pub mod session;
pub mod user;

// Re-export main types at crate root
pub use error::SessionError;
pub use role::{Capability, CapabilitySet, Role};
pub use session::{CachedSessionProvider, DEFAULT_STALE_SECONDS, SessionProvider, UserSource};
pub use user::User;
