//! Form input validation.
//!
//! Invalid input never leaves the server: each form validates into a
//! [`FieldErrors`] map of field name to the dictionary key of the message
//! shown next to that field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Email;

/// Per-field validation messages, as dictionary keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message_key: &'static str) {
        self.0.insert(field, message_key);
    }

    /// Record `message_key` against `field` unless `ok` holds.
    fn check(&mut self, ok: bool, field: &'static str, message_key: &'static str) {
        if !ok {
            self.insert(field, message_key);
        }
    }

    /// Message key for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(field, key)| (*field, *key))
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn has_min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

fn is_email(value: &str) -> bool {
    Email::parse(value.trim()).is_ok()
}

/// Topics offered by the contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactSubject {
    #[default]
    General,
    Quote,
    Order,
    Technical,
    Partnership,
}

impl ContactSubject {
    pub const ALL: [Self; 5] = [
        Self::General,
        Self::Quote,
        Self::Order,
        Self::Technical,
        Self::Partnership,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Quote => "quote",
            Self::Order => "order",
            Self::Technical => "technical",
            Self::Partnership => "partnership",
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::General => "contact.form.subjectGeneral",
            Self::Quote => "contact.form.subjectQuote",
            Self::Order => "contact.form.subjectOrder",
            Self::Technical => "contact.form.subjectTechnical",
            Self::Partnership => "contact.form.subjectPartnership",
        }
    }

    /// Parse a submitted subject code. Blank or unknown yields `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subject| subject.as_str() == code)
    }
}

/// Contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

fn default_subject() -> String {
    ContactSubject::default().as_str().to_owned()
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            phone: String::new(),
            subject: default_subject(),
            message: String::new(),
        }
    }
}

impl ContactForm {
    /// Minimum message length, in characters.
    pub const MIN_MESSAGE_CHARS: usize = 10;

    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns the failing fields with their message keys.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(has_min_chars(&self.name, 2), "name", "contact.form.errorName");
        errors.check(is_email(&self.email), "email", "contact.form.errorEmail");
        errors.check(
            ContactSubject::from_code(self.subject.trim()).is_some(),
            "subject",
            "contact.form.errorSubject",
        );
        errors.check(
            has_min_chars(&self.message, Self::MIN_MESSAGE_CHARS),
            "message",
            "contact.form.errorMessage",
        );
        errors.into_result()
    }
}

/// Customer contact and shipping fields collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default = "default_country")]
    pub country: String,
}

pub const DEFAULT_COUNTRY: &str = "France";

fn default_country() -> String {
    DEFAULT_COUNTRY.to_owned()
}

impl Default for CustomerDetails {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            address: String::new(),
            city: String::new(),
            postal_code: String::new(),
            country: default_country(),
        }
    }
}

impl CustomerDetails {
    /// The company, when one was given.
    #[must_use]
    pub fn company(&self) -> Option<&str> {
        Some(self.company.trim()).filter(|company| !company.is_empty())
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns the failing fields with their message keys.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(has_min_chars(&self.first_name, 2), "firstName", "checkout.errorFirstName");
        errors.check(has_min_chars(&self.last_name, 2), "lastName", "checkout.errorLastName");
        errors.check(is_email(&self.email), "email", "checkout.errorEmail");
        errors.check(has_min_chars(&self.phone, 10), "phone", "checkout.errorPhone");
        errors.check(has_min_chars(&self.address, 5), "address", "checkout.errorAddress");
        errors.check(has_min_chars(&self.city, 2), "city", "checkout.errorCity");
        errors.check(has_min_chars(&self.postal_code, 5), "postalCode", "checkout.errorPostalCode");
        errors.check(has_min_chars(&self.country, 2), "country", "checkout.errorCountry");
        errors.into_result()
    }
}

/// Admin sign-in / sign-up credentials.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for AuthForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AuthForm {
    pub const MIN_PASSWORD_CHARS: usize = 6;

    /// Check the credentials before contacting the auth service.
    ///
    /// # Errors
    ///
    /// Returns the failing fields with their message keys.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(is_email(&self.email), "email", "contact.form.errorEmail");
        errors.check(
            self.password.chars().count() >= Self::MIN_PASSWORD_CHARS,
            "password",
            "admin.auth.passwordTooShort",
        );
        errors.into_result()
    }
}
