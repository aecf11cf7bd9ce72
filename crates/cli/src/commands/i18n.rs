//! Dictionary coverage report.
//!
//! French is the source language. For every other language the report lists
//! keys whose string is empty and keys whose string is the French one, which
//! is usually a translation that was never done (brand names and "Contact"
//! are legitimate exceptions, so those are only reported, not failed).

use tracing::{info, warn};
use witherstex_core::Language;
use witherstex_core::i18n::{keys, lookup};

/// Coverage of one language.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Coverage {
    pub total: usize,
    pub empty: Vec<&'static str>,
    pub same_as_french: Vec<&'static str>,
}

impl Coverage {
    /// Share of keys with a non-empty string, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.total - self.empty.len()) as f64 * 100.0 / self.total as f64
    }
}

/// Compute the coverage of `language` over the whole dictionary.
#[must_use]
pub fn language_coverage(language: Language) -> Coverage {
    let mut coverage = Coverage::default();

    for key in keys() {
        let Some(entry) = lookup(key) else {
            continue;
        };
        coverage.total += 1;

        let text = entry.get(language);
        if text.trim().is_empty() {
            coverage.empty.push(key);
        } else if language != Language::Fr && text == entry.fr {
            coverage.same_as_french.push(key);
        }
    }

    coverage
}

/// Log the coverage report for `language`, or for every language.
///
/// # Errors
///
/// Returns an error for an unsupported language code, or when a language
/// has empty entries.
pub fn coverage(language: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let languages = match language {
        Some(code) => vec![code.parse::<Language>()?],
        None => Language::ALL.to_vec(),
    };

    let mut empty_total = 0;
    for language in languages {
        let report = language_coverage(language);
        info!(
            "{} ({}): {} keys, {:.1}% translated",
            language.label(),
            language.code(),
            report.total,
            report.percent()
        );
        for key in &report.empty {
            warn!("  empty: {key}");
        }
        for key in &report.same_as_french {
            info!("  same as French: {key}");
        }
        empty_total += report.empty.len();
    }

    if empty_total > 0 {
        return Err(format!("{empty_total} empty dictionary entries").into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_is_complete() {
        for language in Language::ALL {
            let report = language_coverage(language);
            assert!(report.total > 0);
            assert!(report.empty.is_empty(), "{language}: {:?}", report.empty);
            assert!((report.percent() - 100.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_french_is_never_compared_to_itself() {
        assert!(language_coverage(Language::Fr).same_as_french.is_empty());
    }

    #[test]
    fn test_identical_strings_are_reported() {
        // "Contact" is the same word in French and English
        let report = language_coverage(Language::En);
        assert!(report.same_as_french.contains(&"nav.contact"));
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        assert!(coverage(Some("de")).is_err());
    }
}
