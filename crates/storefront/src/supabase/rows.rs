//! Row shapes of the `products` table and their conversion to domain types.
//!
//! The table is edited by hand as well as through the admin panel, so rows
//! are read leniently: missing optional columns and missing specification
//! fields fall back to the same defaults the admin form writes.

use serde::Deserialize;
use witherstex_core::product::{DEFAULT_CERTIFICATION, DEFAULT_PCS_PER_COLIS, UNSPECIFIED};
use witherstex_core::{Category, Product, ProductId, Slug, TechnicalSpecs};

use super::SupabaseError;

/// One row of `products` as returned by the REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub technical_specs: Option<SpecsRow>,
    #[serde(default)]
    pub pcs_per_colis: Option<i64>,
    #[serde(default)]
    pub is_b2b: Option<bool>,
    #[serde(default)]
    pub badge: Option<String>,
}

/// The `technical_specs` JSON column.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecsRow {
    pub material: Option<String>,
    pub coating: Option<String>,
    pub sizes: Option<String>,
    pub certification: Option<String>,
    pub resistance: Option<String>,
    pub thickness: Option<String>,
    pub length: Option<String>,
}

impl From<SpecsRow> for TechnicalSpecs {
    fn from(row: SpecsRow) -> Self {
        let unspecified = || UNSPECIFIED.to_owned();
        Self {
            material: row.material.unwrap_or_else(unspecified),
            coating: row.coating.unwrap_or_else(unspecified),
            sizes: row.sizes.unwrap_or_else(unspecified),
            certification: row
                .certification
                .unwrap_or_else(|| DEFAULT_CERTIFICATION.to_owned()),
            resistance: row.resistance.unwrap_or_else(unspecified),
            thickness: row.thickness.filter(|v| !v.is_empty()),
            length: row.length.filter(|v| !v.is_empty()),
        }
    }
}

impl TryFrom<ProductRow> for Product {
    type Error = SupabaseError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category = row.category.parse::<Category>().map_err(|e| {
            SupabaseError::DataCorruption(format!("product {}: {e}", row.id))
        })?;

        let pcs_per_colis = match row.pcs_per_colis {
            None => DEFAULT_PCS_PER_COLIS,
            Some(pcs) => u32::try_from(pcs)
                .ok()
                .filter(|pcs| *pcs > 0)
                .ok_or_else(|| {
                    SupabaseError::DataCorruption(format!(
                        "product {}: invalid pcs_per_colis {pcs}",
                        row.id
                    ))
                })?,
        };

        Ok(Self {
            id: ProductId::new(row.id),
            name: row.name,
            slug: Slug::verbatim(row.slug),
            description: row.description.unwrap_or_default(),
            category,
            images: row.images.unwrap_or_default(),
            image_url: row.image_url.filter(|url| !url.is_empty()),
            technical_specs: row.technical_specs.unwrap_or_default().into(),
            pcs_per_colis,
            is_b2b: row.is_b2b.unwrap_or(true),
            badge: row.badge.filter(|badge| !badge.is_empty()),
        })
    }
}

/// Convert a batch of rows, failing on the first corrupt one.
pub fn into_products(rows: Vec<ProductRow>) -> Result<Vec<Product>, SupabaseError> {
    rows.into_iter().map(Product::try_from).collect()
}
