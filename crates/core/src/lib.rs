//! Witherstex Core - Domain library for the Witherstex site.
//!
//! This crate provides the domain shared by every Witherstex component:
//! - `storefront` - Public site and `/admin` panel
//! - `cli` - Session migrations and catalogue seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP clients. State that the site mutates (the visitor's cart,
//! the selected language) is modelled as plain owned values here; the
//! storefront decides where they are persisted.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, emails, slugs and categories
//! - [`product`] - Catalogue product model and admin drafts
//! - [`cart`] - Cart lines and the cart store operations
//! - [`i18n`] - Translation dictionary and language cycling
//! - [`forms`] - Contact, checkout and auth form validation
//! - [`checkout`] - WhatsApp order message composition
//! - [`upload`] - Product image upload rules

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod forms;
pub mod i18n;
pub mod product;
pub mod types;
pub mod upload;

pub use cart::{Cart, CartLine, STORE_NAMESPACE};
pub use forms::{AuthForm, ContactForm, ContactSubject, CustomerDetails, FieldErrors};
pub use i18n::{Language, Translator};
pub use product::{
    DraftError, MIN_ORDER_PACKAGES, NewProduct, Product, ProductDraft, ProductUpdate,
    TechnicalSpecs,
};
pub use types::*;
pub use upload::{ImageUpload, UploadError};
