//! Catalogue data model.
//!
//! Products live in the hosted `products` table; the site never assigns
//! identifiers. Field names match the table's snake_case columns so the
//! same types serve as insert and patch bodies.

use serde::{Deserialize, Serialize};

use crate::types::{Category, ProductId, Slug};

/// Smallest order a customer can place, in packages.
pub const MIN_ORDER_PACKAGES: u32 = 10;

/// Pieces per package when the admin form leaves the field blank or invalid.
pub const DEFAULT_PCS_PER_COLIS: u32 = 30;

/// Image shown when a product has neither an uploaded image nor a gallery.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Stored for technical fields the admin form leaves blank.
pub const UNSPECIFIED: &str = "À définir";

pub const DEFAULT_CERTIFICATION: &str = "EN388";

pub const DEFAULT_SIZES: &str = "8, 9, 10";

/// Technical specification sheet of a glove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalSpecs {
    pub material: String,
    pub coating: String,
    pub sizes: String,
    pub certification: String,
    pub resistance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
}

impl TechnicalSpecs {
    /// Rows shown in the detail page's specification table, as
    /// `(label key, value)`. Certification and resistance are not listed.
    #[must_use]
    pub fn display_rows(&self) -> Vec<(&'static str, &str)> {
        let mut rows = vec![
            ("spec.material", self.material.as_str()),
            ("spec.coating", self.coating.as_str()),
            ("spec.sizes", self.sizes.as_str()),
        ];
        if let Some(thickness) = &self.thickness {
            rows.push(("spec.thickness", thickness.as_str()));
        }
        if let Some(length) = &self.length {
            rows.push(("spec.length", length.as_str()));
        }
        rows
    }
}

/// A catalogue product as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: Slug,
    pub description: String,
    pub category: Category,
    pub images: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub technical_specs: TechnicalSpecs,
    pub pcs_per_colis: u32,
    pub is_b2b: bool,
    #[serde(default)]
    pub badge: Option<String>,
}

impl Product {
    /// Uploaded image when present, else the first gallery image, else the
    /// placeholder.
    #[must_use]
    pub fn display_image(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| self.images.first().map(String::as_str))
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Pieces in a minimum-size order.
    #[must_use]
    pub fn min_order_pieces(&self) -> u64 {
        u64::from(self.pcs_per_colis) * u64::from(MIN_ORDER_PACKAGES)
    }
}

/// A product about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub slug: Slug,
    pub description: String,
    pub category: Category,
    pub images: Vec<String>,
    pub image_url: Option<String>,
    pub technical_specs: TechnicalSpecs,
    pub pcs_per_colis: u32,
    pub is_b2b: bool,
    pub badge: Option<String>,
}

/// A partial update. Only `Some` fields are sent.
///
/// `image_url` and `badge` are nullable columns: `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_specs: Option<TechnicalSpecs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcs_per_colis: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_b2b: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Option<String>>,
}

impl ProductUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the provided fields to `product`.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name.clone_from(name);
        }
        if let Some(slug) = &self.slug {
            product.slug = slug.clone();
        }
        if let Some(description) = &self.description {
            product.description.clone_from(description);
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(images) = &self.images {
            product.images.clone_from(images);
        }
        if let Some(image_url) = &self.image_url {
            product.image_url.clone_from(image_url);
        }
        if let Some(specs) = &self.technical_specs {
            product.technical_specs = specs.clone();
        }
        if let Some(pcs) = self.pcs_per_colis {
            product.pcs_per_colis = pcs;
        }
        if let Some(is_b2b) = self.is_b2b {
            product.is_b2b = is_b2b;
        }
        if let Some(badge) = &self.badge {
            product.badge.clone_from(badge);
        }
    }
}

/// Why an admin product form was rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    #[error("product name is required")]
    MissingName,
}

impl DraftError {
    /// Notification shown to the admin.
    #[must_use]
    pub const fn toast_key(self) -> &'static str {
        match self {
            Self::MissingName => "toast.fillRequired",
        }
    }
}

/// Raw input of the admin product form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub pcs_per_colis: String,
    #[serde(default)]
    pub sizes: String,
    #[serde(default)]
    pub material: String,
    /// URL of an image uploaded with this submission.
    #[serde(skip)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub remove_image: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            description: String::new(),
            category: Category::Industrial,
            pcs_per_colis: DEFAULT_PCS_PER_COLIS.to_string(),
            sizes: DEFAULT_SIZES.to_owned(),
            material: String::new(),
            image_url: None,
            remove_image: false,
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_owned()
    } else {
        value.to_owned()
    }
}

impl ProductDraft {
    /// Prefill the form from an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            slug: product.slug.to_string(),
            description: product.description.clone(),
            category: product.category,
            pcs_per_colis: product.pcs_per_colis.to_string(),
            sizes: product.technical_specs.sizes.clone(),
            material: product.technical_specs.material.clone(),
            image_url: product.image_url.clone(),
            remove_image: false,
        }
    }

    fn checked_name(&self) -> Result<String, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }
        Ok(name.to_owned())
    }

    fn slug(&self, name: &str) -> Slug {
        Slug::resolve(self.slug.trim(), name)
    }

    fn pcs_per_colis(&self) -> u32 {
        self.pcs_per_colis
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|pcs| *pcs > 0)
            .unwrap_or(DEFAULT_PCS_PER_COLIS)
    }

    /// Specs for a new product: blank fields get the catalogue defaults.
    fn new_specs(&self) -> TechnicalSpecs {
        TechnicalSpecs {
            material: or_default(&self.material, UNSPECIFIED),
            coating: UNSPECIFIED.to_owned(),
            sizes: or_default(&self.sizes, DEFAULT_SIZES),
            certification: DEFAULT_CERTIFICATION.to_owned(),
            resistance: UNSPECIFIED.to_owned(),
            thickness: None,
            length: None,
        }
    }

    /// Build the insert body.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::MissingName`] when the name is blank.
    pub fn into_new_product(self) -> Result<NewProduct, DraftError> {
        let name = self.checked_name()?;
        Ok(NewProduct {
            slug: self.slug(&name),
            description: self.description.trim().to_owned(),
            category: self.category,
            images: vec![PLACEHOLDER_IMAGE.to_owned()],
            image_url: self.image_url.clone().filter(|url| !url.is_empty()),
            technical_specs: self.new_specs(),
            pcs_per_colis: self.pcs_per_colis(),
            is_b2b: true,
            badge: None,
            name,
        })
    }

    /// Build the patch body for `existing`.
    ///
    /// Fields the form does not edit (coating, certification, resistance,
    /// thickness, length) keep their stored values.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::MissingName`] when the name is blank.
    pub fn into_update(self, existing: &Product) -> Result<ProductUpdate, DraftError> {
        let name = self.checked_name()?;
        let image_url = match self.image_url.clone().filter(|url| !url.is_empty()) {
            Some(url) => Some(Some(url)),
            None if self.remove_image => Some(None),
            None => None,
        };

        Ok(ProductUpdate {
            slug: Some(self.slug(&name)),
            description: Some(self.description.trim().to_owned()),
            category: Some(self.category),
            image_url,
            technical_specs: Some(TechnicalSpecs {
                material: or_default(&self.material, UNSPECIFIED),
                sizes: or_default(&self.sizes, DEFAULT_SIZES),
                ..existing.technical_specs.clone()
            }),
            pcs_per_colis: Some(self.pcs_per_colis()),
            name: Some(name),
            ..ProductUpdate::default()
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_product(id: &str, name: &str, pcs: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            slug: Slug::from_name(name),
            description: "Gant enduit nitrile".to_owned(),
            category: Category::Industrial,
            images: vec!["/images/progrip.jpg".to_owned()],
            image_url: None,
            technical_specs: TechnicalSpecs {
                material: "Polyester".to_owned(),
                coating: "Nitrile".to_owned(),
                sizes: "8, 9, 10".to_owned(),
                certification: "EN388".to_owned(),
                resistance: "4121".to_owned(),
                thickness: None,
                length: Some("24 cm".to_owned()),
            },
            pcs_per_colis: pcs,
            is_b2b: true,
            badge: Some("Best-seller".to_owned()),
        }
    }

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_owned(),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn test_display_rows_skip_certification_and_resistance() {
        let product = sample_product("1", "ProGrip Industriel", 30);
        let keys: Vec<_> = product
            .technical_specs
            .display_rows()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, ["spec.material", "spec.coating", "spec.sizes", "spec.length"]);
    }

    #[test]
    fn test_display_image_preference() {
        let mut product = sample_product("1", "ProGrip", 30);
        assert_eq!(product.display_image(), "/images/progrip.jpg");

        product.image_url = Some("https://cdn.example/p.png".to_owned());
        assert_eq!(product.display_image(), "https://cdn.example/p.png");

        product.image_url = None;
        product.images.clear();
        assert_eq!(product.display_image(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_min_order_pieces() {
        assert_eq!(sample_product("1", "ProGrip", 30).min_order_pieces(), 300);
    }

    #[test]
    fn test_new_product_derives_slug_and_defaults() {
        let product = draft("Gant Nitrile Pro").into_new_product().unwrap();
        assert_eq!(product.slug.as_str(), "gant-nitrile-pro");
        assert_eq!(product.technical_specs.material, UNSPECIFIED);
        assert_eq!(product.technical_specs.coating, UNSPECIFIED);
        assert_eq!(product.technical_specs.resistance, UNSPECIFIED);
        assert_eq!(product.technical_specs.certification, "EN388");
        assert_eq!(product.technical_specs.sizes, "8, 9, 10");
        assert_eq!(product.images, vec![PLACEHOLDER_IMAGE.to_owned()]);
        assert!(product.is_b2b);
    }

    #[test]
    fn test_new_product_keeps_explicit_slug_verbatim() {
        let product = ProductDraft {
            slug: "Custom_Slug".to_owned(),
            ..draft("Gant")
        }
        .into_new_product()
        .unwrap();
        assert_eq!(product.slug.as_str(), "Custom_Slug");
    }

    #[test]
    fn test_pcs_per_colis_falls_back_to_default() {
        for raw in ["", "abc", "0", "-4"] {
            let product = ProductDraft {
                pcs_per_colis: raw.to_owned(),
                ..draft("Gant")
            }
            .into_new_product()
            .unwrap();
            assert_eq!(product.pcs_per_colis, DEFAULT_PCS_PER_COLIS, "input {raw:?}");
        }
        let product = ProductDraft {
            pcs_per_colis: "50".to_owned(),
            ..draft("Gant")
        }
        .into_new_product()
        .unwrap();
        assert_eq!(product.pcs_per_colis, 50);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert_eq!(
            draft("   ").into_new_product(),
            Err(DraftError::MissingName)
        );
        assert_eq!(DraftError::MissingName.toast_key(), "toast.fillRequired");
    }

    #[test]
    fn test_update_keeps_fields_the_form_does_not_edit() {
        let existing = sample_product("1", "ProGrip", 30);
        let update = ProductDraft {
            material: "Coton".to_owned(),
            ..draft("ProGrip V2")
        }
        .into_update(&existing)
        .unwrap();

        let specs = update.technical_specs.clone().unwrap();
        assert_eq!(specs.material, "Coton");
        assert_eq!(specs.coating, "Nitrile");
        assert_eq!(specs.length.as_deref(), Some("24 cm"));
        assert_eq!(update.image_url, None);
        assert_eq!(update.badge, None);
    }

    #[test]
    fn test_update_image_tri_state() {
        let existing = sample_product("1", "ProGrip", 30);

        let cleared = ProductDraft {
            remove_image: true,
            ..draft("ProGrip")
        }
        .into_update(&existing)
        .unwrap();
        assert_eq!(cleared.image_url, Some(None));

        let replaced = ProductDraft {
            image_url: Some("https://cdn.example/new.png".to_owned()),
            remove_image: true,
            ..draft("ProGrip")
        }
        .into_update(&existing)
        .unwrap();
        assert_eq!(
            replaced.image_url,
            Some(Some("https://cdn.example/new.png".to_owned()))
        );
    }

    #[test]
    fn test_update_serializes_only_provided_fields() {
        let update = ProductUpdate {
            name: Some("ProGrip".to_owned()),
            badge: Some(None),
            ..ProductUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "ProGrip", "badge": null }));
        assert!(ProductUpdate::default().is_empty());
    }

    #[test]
    fn test_apply_update() {
        let mut product = sample_product("1", "ProGrip", 30);
        ProductUpdate {
            pcs_per_colis: Some(12),
            badge: Some(None),
            ..ProductUpdate::default()
        }
        .apply_to(&mut product);
        assert_eq!(product.pcs_per_colis, 12);
        assert_eq!(product.badge, None);
        assert_eq!(product.name, "ProGrip");
    }

    #[test]
    fn test_from_product_round_trips_form_fields() {
        let product = sample_product("1", "ProGrip", 24);
        let draft = ProductDraft::from_product(&product);
        assert_eq!(draft.pcs_per_colis, "24");
        assert_eq!(draft.material, "Polyester");
        assert_eq!(draft.slug, product.slug.as_str());
    }
}
