//! URL-safe product slugs.
//!
//! A slug is the public lookup key of a product (`/products/{slug}`), distinct
//! from the store-assigned database identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product slug.
///
/// Slugs typed by an administrator are kept verbatim; only slugs derived from a
/// product name are normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Keep an explicit slug exactly as given.
    #[must_use]
    pub fn verbatim(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Derive a slug from a product name.
    ///
    /// The name is lowercased, each whitespace run becomes a single `-`, and
    /// every character outside `[a-z0-9-]` is dropped.
    ///
    /// ```
    /// use witherstex_core::Slug;
    ///
    /// assert_eq!(Slug::from_name("ProGrip  Industriel").as_str(), "progrip-industriel");
    /// assert_eq!(Slug::from_name("Gant Kevlar® 5").as_str(), "gant-kevlar-5");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let mut slug = String::with_capacity(name.len());
        let mut in_whitespace = false;

        for c in name.to_lowercase().chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    slug.push('-');
                }
                in_whitespace = true;
                continue;
            }
            in_whitespace = false;
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                slug.push(c);
            }
        }

        Self(slug)
    }

    /// Use the explicit slug when one was typed, otherwise derive it from `name`.
    #[must_use]
    pub fn resolve(explicit: &str, name: &str) -> Self {
        if explicit.is_empty() {
            Self::from_name(name)
        } else {
            Self::verbatim(explicit)
        }
    }

    /// Borrow the slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the slug and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
