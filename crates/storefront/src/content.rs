//! Static page content.
//!
//! Company details and the fixed sections of the home and about pages. Text
//! is referenced by dictionary key and translated at render time.

/// Company contact details shown on the contact page and in the footer.
#[derive(Debug, Clone, Copy)]
pub struct Company {
    /// Postal address, one line per entry.
    pub address: &'static [&'static str],
    pub phone_display: &'static str,
    /// International form for `tel:` links.
    pub phone_international: &'static str,
    pub email: &'static str,
    pub footer_city: &'static str,
    pub footer_email: &'static str,
}

pub const COMPANY: Company = Company {
    address: &["LOT 28, ZONE INDUSTRIELLE", "SETTAT, Maroc"],
    phone_display: "0695 32 30 14",
    phone_international: "+212695323014",
    email: "Witherstex.sarl@gmail.com",
    footer_city: "Casablanca, Maroc",
    footer_email: "contact@witherstex.com",
};

/// A titled paragraph, both given as dictionary keys.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title_key: &'static str,
    pub description_key: &'static str,
}

const fn feature(title_key: &'static str, description_key: &'static str) -> Feature {
    Feature {
        title_key,
        description_key,
    }
}

/// "Why choose us" cards on the home page.
pub const WHY_FEATURES: [Feature; 3] = [
    feature("why.quality.title", "why.quality.desc"),
    feature("why.expertise.title", "why.expertise.desc"),
    feature("why.custom.title", "why.custom.desc"),
];

/// Value cards on the about page.
pub const ABOUT_VALUES: [Feature; 4] = [
    feature("about.value.quality.title", "about.value.quality.desc"),
    feature("about.value.innovation.title", "about.value.innovation.desc"),
    feature("about.value.service.title", "about.value.service.desc"),
    feature("about.value.reliability.title", "about.value.reliability.desc"),
];

/// Key figures on the about page as `(figure, label key)`.
pub const ABOUT_STATS: [(&str, &str); 4] = [
    ("5", "about.stats.products"),
    ("3", "about.stats.sizes"),
    ("7", "about.stats.colors"),
    ("100%", "about.stats.industry"),
];

/// Product families listed on the about page.
pub const ABOUT_PRODUCT_LINES: [&str; 5] = [
    "about.products.cotton",
    "about.products.u3",
    "about.products.nitrile",
    "about.products.pureCotton",
    "about.products.cutResistant",
];

/// Product families linked from the footer.
pub const FOOTER_PRODUCT_LINES: [&str; 5] = [
    "footer.products.cotton",
    "footer.products.nitrile",
    "footer.products.cut",
    "footer.products.u3",
    "footer.products.cotton2",
];

#[cfg(test)]
mod tests {
    use witherstex_core::i18n;

    use super::*;

    #[test]
    fn test_every_content_key_is_translated() {
        let keys = WHY_FEATURES
            .iter()
            .chain(ABOUT_VALUES.iter())
            .flat_map(|f| [f.title_key, f.description_key])
            .chain(ABOUT_STATS.iter().map(|(_, key)| *key))
            .chain(ABOUT_PRODUCT_LINES)
            .chain(FOOTER_PRODUCT_LINES);

        for key in keys {
            assert!(i18n::lookup(key).is_some(), "missing translation for {key}");
        }
    }
}
