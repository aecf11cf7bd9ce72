//! Product categories.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a category code is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown product category: {0}")]
pub struct CategoryError(pub String);

/// The five glove families the catalogue is organized around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Industrial,
    Chemical,
    Handling,
    Thermal,
    Precision,
}

impl Category {
    /// Every category, in catalogue order.
    pub const ALL: [Self; 5] = [
        Self::Industrial,
        Self::Chemical,
        Self::Handling,
        Self::Thermal,
        Self::Precision,
    ];

    /// Storage code, as found in the `category` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Industrial => "industrial",
            Self::Chemical => "chemical",
            Self::Handling => "handling",
            Self::Thermal => "thermal",
            Self::Precision => "precision",
        }
    }

    /// Translation key of the category's display label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Industrial => "admin.categoryIndustrial",
            Self::Chemical => "admin.categoryChemical",
            Self::Handling => "admin.categoryHandling",
            Self::Thermal => "admin.categoryThermal",
            Self::Precision => "admin.categoryPrecision",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(
            "medical".parse::<Category>(),
            Err(CategoryError("medical".to_owned()))
        );
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        assert_eq!(
            serde_json::to_string(&Category::Thermal).unwrap(),
            "\"thermal\""
        );
    }

    #[test]
    fn test_label_keys() {
        assert_eq!(Category::Chemical.label_key(), "admin.categoryChemical");
    }
}
