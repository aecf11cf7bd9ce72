//! Values the storefront keeps in the visitor's session.

pub mod session;
pub mod toast;

pub use session::{CurrentAdmin, PersistedStore, keys as session_keys};
pub use toast::{Toast, ToastKind};
