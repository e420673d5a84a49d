//! Product catalog: the configuration collaborator
//!
//! The catalog is a nested JSON mapping category -> sub-category ->
//! reference -> record attributes. It is loaded explicitly (at startup, or
//! again on request) into an immutable [`Catalog`] value that is passed by
//! reference into request handling; there is no implicit global.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A resolved product, the unit the label renderer works on
///
/// The reference is the unique identifier of the product and is what both
/// symbols on the label encode. The description may be empty and the image
/// path absent; both degrade gracefully at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub reference: String,
    pub description: String,
    pub image_path: Option<PathBuf>,
}

impl ProductRecord {
    pub fn new(reference: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            description: description.into(),
            image_path: None,
        }
    }

    /// Attach an image asset path
    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_path = Some(path.into());
        self
    }
}

/// Attributes of one reference as stored in the catalog file
#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: Option<PathBuf>,
}

/// An immutable category -> sub-category -> reference tree
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<String, HashMap<String, HashMap<String, CatalogEntry>>>,
}

impl Catalog {
    /// Load a catalog from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a JSON string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let entries = serde_json::from_str(content)?;
        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level category names, sorted
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Sub-category names under a category, sorted
    pub fn sub_categories(&self, category: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .get(category)
            .map(|subs| subs.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    /// Reference names under a category/sub-category, sorted
    pub fn references(&self, category: &str, sub_category: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .get(category)
            .and_then(|subs| subs.get(sub_category))
            .map(|refs| refs.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    /// Resolve a fully qualified reference to an owned record
    pub fn resolve(
        &self,
        category: &str,
        sub_category: &str,
        reference: &str,
    ) -> Option<ProductRecord> {
        let entry = self
            .entries
            .get(category)?
            .get(sub_category)?
            .get(reference)?;
        Some(to_record(reference, entry))
    }

    /// Search every category for a reference
    ///
    /// Returns the first match in sorted category/sub-category order so the
    /// result is stable when a reference appears more than once.
    pub fn find_reference(&self, reference: &str) -> Option<ProductRecord> {
        for category in self.categories() {
            for sub in self.sub_categories(category) {
                if let Some(record) = self.resolve(category, sub, reference) {
                    return Some(record);
                }
            }
        }
        None
    }
}

fn to_record(reference: &str, entry: &CatalogEntry) -> ProductRecord {
    ProductRecord {
        reference: reference.to_string(),
        description: entry.description.clone(),
        image_path: entry.image.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Furniture": {
            "Tables": {
                "TBL-001": { "description": "Oak table", "image": "assets/tbl-001.png" },
                "TBL-002": { "description": "Pine table" }
            },
            "Chairs": {
                "CHR-010": { "description": "Stool" }
            }
        },
        "Hardware": {
            "Fasteners": {
                "SCR-100": {}
            }
        }
    }"#;

    #[test]
    fn test_parse_and_list() {
        let catalog = Catalog::from_str(SAMPLE).unwrap();
        assert_eq!(catalog.categories(), vec!["Furniture", "Hardware"]);
        assert_eq!(catalog.sub_categories("Furniture"), vec!["Chairs", "Tables"]);
        assert_eq!(
            catalog.references("Furniture", "Tables"),
            vec!["TBL-001", "TBL-002"]
        );
    }

    #[test]
    fn test_resolve_injects_reference_key() {
        let catalog = Catalog::from_str(SAMPLE).unwrap();
        let record = catalog.resolve("Furniture", "Tables", "TBL-001").unwrap();
        assert_eq!(record.reference, "TBL-001");
        assert_eq!(record.description, "Oak table");
        assert_eq!(record.image_path.as_deref().unwrap().to_str(), Some("assets/tbl-001.png"));
    }

    #[test]
    fn test_resolve_defaults_for_sparse_entry() {
        let catalog = Catalog::from_str(SAMPLE).unwrap();
        let record = catalog.resolve("Hardware", "Fasteners", "SCR-100").unwrap();
        assert_eq!(record.description, "");
        assert!(record.image_path.is_none());
    }

    #[test]
    fn test_resolve_unknown_paths() {
        let catalog = Catalog::from_str(SAMPLE).unwrap();
        assert!(catalog.resolve("Furniture", "Tables", "NOPE").is_none());
        assert!(catalog.resolve("Furniture", "Nope", "TBL-001").is_none());
        assert!(catalog.resolve("Nope", "Tables", "TBL-001").is_none());
    }

    #[test]
    fn test_find_reference_across_categories() {
        let catalog = Catalog::from_str(SAMPLE).unwrap();
        let record = catalog.find_reference("SCR-100").unwrap();
        assert_eq!(record.reference, "SCR-100");
        assert!(catalog.find_reference("MISSING").is_none());
    }

    #[test]
    fn test_is_empty() {
        assert!(Catalog::from_str("{}").unwrap().is_empty());
        assert!(!Catalog::from_str(SAMPLE).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Catalog::from_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_listing_unknown_category_is_empty() {
        let catalog = Catalog::from_str(SAMPLE).unwrap();
        assert!(catalog.sub_categories("Nope").is_empty());
        assert!(catalog.references("Nope", "Nope").is_empty());
    }

    #[test]
    fn test_record_builder() {
        let record = ProductRecord::new("R1", "desc").with_image("img.png");
        assert_eq!(record.reference, "R1");
        assert_eq!(record.image_path.as_deref().unwrap().to_str(), Some("img.png"));
    }
}
