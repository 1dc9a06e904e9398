use crate::models::Wine;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur when loading the wine catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Duplicate wine id: {0}")]
    DuplicateId(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<Wine>),
    Wrapped { wines: Vec<Wine> },
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    wines: Vec<Wine>,
}

/// Read-only wine catalog shared across workers
#[derive(Debug, Clone)]
pub struct WineCatalog {
    wines: Arc<[Wine]>,
}

impl WineCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(wines: Vec<Wine>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(wines.len());
        for wine in &wines {
            if !seen.insert(wine.id.as_str()) {
                return Err(CatalogError::DuplicateId(wine.id.clone()));
            }
        }

        Ok(Self {
            wines: wines.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            wines: Arc::from(Vec::new()),
        }
    }

    /// Load the catalog from a `.json` or `.toml` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let catalog = match extension.as_deref() {
            Some("json") => Self::from_json_str(&contents)?,
            Some("toml") => Self::from_toml_str(&contents)?,
            other => {
                return Err(CatalogError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        tracing::info!("Loaded {} wines from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse a JSON array of wines or a `{ "wines": [...] }` document
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let wines = match serde_json::from_str::<JsonCatalog>(json)? {
            JsonCatalog::List(wines) => wines,
            JsonCatalog::Wrapped { wines } => wines,
        };
        Self::new(wines)
    }

    /// Parse a TOML document of `[[wines]]` tables
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let catalog: TomlCatalog = toml::from_str(text)?;
        Self::new(catalog.wines)
    }

    pub fn wines(&self) -> &[Wine] {
        &self.wines
    }

    pub fn get(&self, id: &str) -> Option<&Wine> {
        self.wines.iter().find(|wine| wine.id == id)
    }

    pub fn len(&self) -> usize {
        self.wines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wines.is_empty()
    }
}

impl Default for WineCatalog {
    fn default() -> Self {
        Self::empty()
    }
}
