//! Shared result alias.
//!
//! Crates keep their own error enums and return them wrapped in a
//! rootcause [`Report`], so a failure carries its context chain up to the
//! caller that decides whether to log it or collapse it.

use rootcause::Report;

/// `Result` whose error side is a `Report` over the crate's context type.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;
