//! Hearts pack common types and errors.
//!
//! This crate provides the foundational types shared across the pack
//! generator:
//! - Canonical emoji naming and the normalization rules
//! - Unified error type with stable codes

pub mod error;
pub mod name;

pub use error::{Error, ErrorCategory, Result};
pub use name::{EmojiName, CATEGORY, NAME_PREFIX, SHORT_PREFIX};
