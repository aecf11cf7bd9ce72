//! Witherstex storefront library.
//!
//! The public glove catalogue, the session cart with its WhatsApp checkout,
//! the contact form and the `/admin` product panel. The binary in `main.rs`
//! only wires these modules into a server.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod supabase;

#[cfg(test)]
mod test_support;
