//! Translation resolution.
//!
//! A static dictionary maps message keys to one string per [`Language`].
//! Lookups never fail: an unknown key resolves to the key itself so a missing
//! entry shows up on the page instead of breaking it.
//!
//! Rendering code carries a [`Translator`] bound to the visitor's language:
//!
//! ```
//! use witherstex_core::{Language, Translator};
//!
//! let t = Translator::new(Language::En);
//! assert_eq!(t.t("nav.home"), "Home");
//! assert_eq!(t.t("no.such.key"), "no.such.key");
//! assert_eq!(t.plural(2, "catalogue.results", "catalogue.results.plural"), "products");
//! ```

mod dictionary;

use core::fmt;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// A supported display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
    Zh,
}

/// Error returned when parsing an unsupported language code.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language: {0}")]
pub struct LanguageError(pub String);

impl Language {
    /// Languages in cycling order.
    pub const ALL: [Self; 3] = [Self::Fr, Self::En, Self::Zh];

    /// The next language in the cycle, wrapping after the last.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Zh,
            Self::Zh => Self::Fr,
        }
    }

    /// ISO 639-1 code, also used for the `lang` attribute.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Short label shown on the language switcher.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fr => "FR",
            Self::En => "EN",
            Self::Zh => "中文",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LanguageError(s.to_owned()))
    }
}

/// One message in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub fr: &'static str,
    pub en: &'static str,
    pub zh: &'static str,
}

impl Translation {
    /// The string for `language`.
    #[must_use]
    pub const fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Fr => self.fr,
            Language::En => self.en,
            Language::Zh => self.zh,
        }
    }
}

static DICTIONARY: LazyLock<HashMap<&'static str, Translation>> =
    LazyLock::new(|| dictionary::ENTRIES.iter().copied().collect());

/// Resolve `key` in `language`, falling back to the key itself.
#[must_use]
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    DICTIONARY
        .get(key)
        .map_or(key, |translation| translation.get(language))
}

/// Look up the full entry for `key`.
#[must_use]
pub fn lookup(key: &str) -> Option<Translation> {
    DICTIONARY.get(key).copied()
}

/// Every key in the dictionary, in declaration order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    dictionary::ENTRIES.iter().map(|(key, _)| *key)
}

/// Language-bound lookup handle passed to templates and message composers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Translate `key`.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }

    /// Pick between two pre-written keys: singular when `count == 1`.
    #[must_use]
    pub fn plural<'a>(&self, count: usize, singular_key: &'a str, plural_key: &'a str) -> &'a str {
        if count == 1 {
            self.t(singular_key)
        } else {
            self.t(plural_key)
        }
    }

    /// Translate `key` and substitute its `{name}` placeholder with `value`.
    #[must_use]
    pub fn fill(&self, key: &str, name: &str, value: impl fmt::Display) -> String {
        self.t(key)
            .replace(&format!("{{{name}}}"), &value.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_cycle_order_and_wrap() {
        assert_eq!(Language::Fr.cycle(), Language::En);
        assert_eq!(Language::En.cycle(), Language::Zh);
        assert_eq!(Language::Zh.cycle(), Language::Fr);
    }

    #[test]
    fn test_three_cycles_return_to_start() {
        for language in Language::ALL {
            assert_eq!(language.cycle().cycle().cycle(), language);
        }
    }

    #[test]
    fn test_default_is_french() {
        assert_eq!(Language::default(), Language::Fr);
        assert_eq!(Translator::default().language(), Language::Fr);
    }

    #[test]
    fn test_parse_codes_case_insensitively() {
        assert_eq!("fr".parse::<Language>().unwrap(), Language::Fr);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" zh ".parse::<Language>().unwrap(), Language::Zh);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Language::Zh.label(), "中文");
        assert_eq!(Language::Fr.label(), "FR");
    }

    #[test]
    fn test_every_key_resolves_to_its_stored_non_empty_value() {
        for key in keys() {
            let entry = lookup(key).unwrap();
            for language in Language::ALL {
                let resolved = translate(language, key);
                assert!(!resolved.is_empty(), "{key} is empty in {language}");
                assert_eq!(resolved, entry.get(language));
            }
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut seen = HashSet::new();
        for key in keys() {
            assert!(seen.insert(key), "duplicate key {key}");
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(translate(Language::Zh, "missing.key"), "missing.key");
    }

    #[test]
    fn test_translator_uses_its_language() {
        assert_eq!(Translator::new(Language::Fr).t("nav.about"), "À Propos");
        assert_eq!(Translator::new(Language::Zh).t("nav.about"), "关于我们");
    }

    #[test]
    fn test_plural_selection() {
        let t = Translator::new(Language::Fr);
        assert_eq!(t.plural(1, "catalogue.found", "catalogue.found.plural"), "trouvé");
        assert_eq!(t.plural(0, "catalogue.found", "catalogue.found.plural"), "trouvés");
        assert_eq!(t.plural(13, "catalogue.found", "catalogue.found.plural"), "trouvés");
    }

    #[test]
    fn test_fill_placeholder() {
        let t = Translator::new(Language::En);
        assert_eq!(
            t.fill("product.piecesPerPackage", "count", 30),
            "Each package contains 30 pieces"
        );
    }

    #[test]
    fn test_category_labels_are_in_dictionary() {
        for category in crate::Category::ALL {
            assert!(lookup(category.label_key()).is_some());
        }
    }
}
