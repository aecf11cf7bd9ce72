//! Core types for Witherstex.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod slug;

pub use category::{Category, CategoryError};
pub use email::{Email, EmailError};
pub use id::*;
pub use slug::Slug;
