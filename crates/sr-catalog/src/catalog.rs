//! In-memory inventory snapshot with case-insensitive lookups.

use std::path::Path;

use indexmap::IndexMap;
use sr_protocol::inventory::{CarModel, CategoryListing};

use crate::error::{CatalogError, CatalogResult};

/// Immutable snapshot of the dealership inventory.
///
/// Categories keep the order in which the dataset declares them; every
/// lookup that scans categories walks them in that order.
#[derive(Debug, Clone, Default)]
pub struct InventoryCatalog {
    categories: IndexMap<String, Vec<CarModel>>,
}

impl InventoryCatalog {
    pub fn new(categories: IndexMap<String, Vec<CarModel>>) -> Self {
        Self { categories }
    }

    /// A catalog with no inventory at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON document of the form
    /// `{"SUV": [{"model": "RAV4", ...}, ...], ...}`.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let categories: IndexMap<String, Vec<CarModel>> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self::new(categories))
    }

    /// Read and parse the dataset at `path`.
    pub fn try_load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogError::NotFound(path.display().to_string())
            } else {
                CatalogError::Io(format!("{}: {e}", path.display()))
            }
        })?;
        Self::from_json_str(&contents)
    }

    /// Load the dataset at `path`, falling back to an empty catalog.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    categories = catalog.len(),
                    "inventory loaded"
                );
                catalog
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "inventory unavailable, continuing with empty catalog"
                );
                Self::empty()
            }
        }
    }

    /// Category names in dataset order.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Models listed under `category` (case-insensitive); empty if unknown.
    pub fn models_in(&self, category: &str) -> &[CarModel] {
        let wanted = category.to_lowercase();
        self.categories
            .iter()
            .find(|(name, _)| name.to_lowercase() == wanted)
            .map(|(_, models)| models.as_slice())
            .unwrap_or(&[])
    }

    /// Find a model by exact name (case-insensitive) across all categories.
    pub fn find_model(&self, name: &str) -> Option<&CarModel> {
        let wanted = name.to_lowercase();
        self.all_models().find(|m| m.model.to_lowercase() == wanted)
    }

    /// Every model, category by category, in dataset order.
    pub fn all_models(&self) -> impl Iterator<Item = &CarModel> {
        self.categories.values().flatten()
    }

    /// Full inventory as category listings.
    pub fn listings(&self) -> Vec<CategoryListing> {
        self.categories
            .iter()
            .map(|(category, models)| CategoryListing {
                category: category.clone(),
                models: models.clone(),
            })
            .collect()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
