//! Session-backed visitor state.
//!
//! # Services
//!
//! - `cart` - The visitor's cart, persisted as one store record per session
//! - `language` - The visitor's display language
//! - `toast` - One-shot notifications carried to the next rendered page

pub mod cart;
pub mod language;
pub mod toast;

pub use cart::SessionCart;
