//! Core domain types and utilities for the skill-time marketplace.
//!
//! This crate provides the foundational types and error handling shared by
//! the session, navigation, and shell crates.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ParseIdError, UserId};
