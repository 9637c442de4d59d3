//! Shared foundations for the histkit crates
//!
//! Every histkit crate reports failures through the single [`Error`] type
//! defined here, so a caller composing histogram selection, rebinning and
//! shell projection only has one error to match on.

pub mod error;

pub use error::{Error, Result};
