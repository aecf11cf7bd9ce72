//! Seed the hosted catalogue from a YAML file.
//!
//! Each entry is a full product record (snake_case fields, as stored). The
//! file is validated before anything is sent, and products whose slug is
//! already in the catalogue are skipped, so re-running the seed only adds
//! what is new.
//!
//! # Environment Variables
//!
//! - `SUPABASE_URL`, `SUPABASE_ANON_KEY` - backend project
//! - `SUPABASE_SERVICE_ROLE_KEY` - bypasses row-level security for the inserts

use std::collections::HashSet;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{error, info, warn};
use witherstex_core::NewProduct;
use witherstex_storefront::config::{ConfigError, SupabaseConfig};
use witherstex_storefront::supabase::{CatalogueClient, SupabaseError};

/// Seed file used when `--file` is not given.
pub const DEFAULT_SEED_FILE: &str = "seed/products.yaml";

const SERVICE_ROLE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0} validation errors found")]
    Invalid(usize),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Backend(#[from] SupabaseError),
}

/// Outcome of a seeding run.
#[derive(Debug, Default)]
pub struct SeedResult {
    pub inserted: usize,
    pub skipped: usize,
    pub errors: Vec<(String, String)>,
}

/// Check a parsed seed file: every product needs a name, a slug and a
/// non-zero package size, and slugs must be unique within the file.
#[must_use]
pub fn validate_seed(products: &[NewProduct]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, product) in products.iter().enumerate() {
        let entry = index + 1;
        if product.name.trim().is_empty() {
            errors.push(format!("entry {entry}: name is empty"));
        }
        if product.slug.as_str().is_empty() {
            errors.push(format!("entry {entry}: slug is empty"));
        } else if !seen.insert(product.slug.as_str()) {
            errors.push(format!("entry {entry}: duplicate slug {}", product.slug));
        }
        if product.pcs_per_colis == 0 {
            errors.push(format!("entry {entry}: pcs_per_colis must be at least 1"));
        }
    }

    errors
}

/// Products of `products` whose slug is not in `existing`.
fn missing<'a>(products: &'a [NewProduct], existing: &HashSet<String>) -> Vec<&'a NewProduct> {
    products
        .iter()
        .filter(|product| !existing.contains(product.slug.as_str()))
        .collect()
}

/// Seed the catalogue from `file_path`.
///
/// # Errors
///
/// Returns an error if the file is missing or invalid, the backend settings
/// are incomplete, or the current catalogue cannot be listed. Failures on
/// individual inserts are reported and do not stop the run.
pub async fn products(file_path: &str, dry_run: bool) -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let path = Path::new(file_path);
    if !path.exists() {
        return Err(SeedError::FileNotFound(file_path.to_owned()));
    }

    info!(path = %file_path, "Loading products from file");

    // Validate before touching the backend
    let content = tokio::fs::read_to_string(path).await?;
    let products: Vec<NewProduct> = serde_yaml::from_str(&content)?;
    info!(products = products.len(), "Parsed seed file");

    let errors = validate_seed(&products);
    if !errors.is_empty() {
        error!("Seed file validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(SeedError::Invalid(errors.len()));
    }

    let config = SupabaseConfig::from_env()?;
    let catalogue = CatalogueClient::new(&config);

    let existing: HashSet<String> = catalogue
        .list_products()
        .await?
        .into_iter()
        .map(|product| product.slug.as_str().to_owned())
        .collect();

    let pending = missing(&products, &existing);
    let mut result = SeedResult {
        skipped: products.len() - pending.len(),
        ..SeedResult::default()
    };

    if dry_run {
        info!("Dry run: nothing will be written");
        for product in &pending {
            info!("  would insert {} ({})", product.name, product.slug);
        }
        info!("  Already present: {}", result.skipped);
        return Ok(());
    }

    let service_key = std::env::var(SERVICE_ROLE_KEY_VAR)
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar(SERVICE_ROLE_KEY_VAR))?;

    for product in pending {
        match catalogue
            .create_product(product, service_key.expose_secret())
            .await
        {
            Ok(created) => {
                info!(id = %created.id, slug = %created.slug, "Inserted product");
                result.inserted += 1;
            }
            Err(e) => {
                warn!(slug = %product.slug, error = %e, "Insert failed");
                result.errors.push((product.slug.to_string(), e.to_string()));
            }
        }
    }

    info!("Seeding complete!");
    info!("  Products inserted: {}", result.inserted);
    info!("  Products skipped (already exist): {}", result.skipped);

    if !result.errors.is_empty() {
        error!("  Errors: {}", result.errors.len());
        for (slug, err) in &result.errors {
            error!("    - {slug}: {err}");
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const SEED: &str = include_str!("../../../../seed/products.yaml");

    #[test]
    fn test_bundled_seed_file_is_valid() {
        let products: Vec<NewProduct> = serde_yaml::from_str(SEED).unwrap();
        assert_eq!(products.len(), 13);
        assert!(validate_seed(&products).is_empty());
        assert!(products.iter().all(|p| p.is_b2b && p.pcs_per_colis == 30));
    }

    #[test]
    fn test_validate_seed_reports_each_problem() {
        let mut products: Vec<NewProduct> = serde_yaml::from_str(SEED).unwrap();
        products.truncate(2);
        products[1].slug = products[0].slug.clone();
        products[1].pcs_per_colis = 0;
        products[0].name = "  ".to_string();

        let errors = validate_seed(&products);
        assert_eq!(errors.len(), 3);
        assert!(errors[0].starts_with("entry 1: name"));
        assert!(errors.iter().any(|e| e.contains("duplicate slug")));
    }

    #[test]
    fn test_missing_skips_existing_slugs() {
        let products: Vec<NewProduct> = serde_yaml::from_str(SEED).unwrap();
        let existing: HashSet<String> = ["progrip-industriel", "impactmax"]
            .into_iter()
            .map(str::to_owned)
            .collect();

        let pending = missing(&products, &existing);
        assert_eq!(pending.len(), 11);
        assert!(pending.iter().all(|p| !existing.contains(p.slug.as_str())));
    }
}
