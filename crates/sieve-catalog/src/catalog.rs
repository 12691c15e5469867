//! Product collections: the built-in sample and catalog files.
//!
//! Catalog files hold a `products` list and are read as JSON (`.json`) or
//! YAML (`.yaml`, `.yml`):
//!
//! ```yaml
//! products:
//!   - name: Apple
//!     color: white
//!     size: small
//!     price: 999
//! ```

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sieve_spec::{filter, Filtered, Specification};

use crate::error::{CatalogError, Result};
use crate::product::{Color, Product, Size};

/// The sample catalog, built once on first use.
static SAMPLE: Lazy<Catalog> = Lazy::new(|| {
    tracing::debug!("building sample catalog");
    Catalog::new(vec![
        Product {
            name: "Apple".into(),
            color: Color::White,
            size: Size::Small,
            price: Some(999.0),
        },
        Product {
            name: "Google Pixel".into(),
            color: Color::Black,
            size: Size::Small,
            price: Some(599.0),
        },
        Product {
            name: "Samsung".into(),
            color: Color::Black,
            size: Size::Large,
            price: None,
        },
    ])
});

/// An ordered list of products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// The built-in sample catalog.
    pub fn sample() -> &'static Catalog {
        &SAMPLE
    }

    /// Loads a catalog file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = match format {
            Format::Json => Catalog::from_json(&text).map_err(|source| CatalogError::Json {
                path: path.to_path_buf(),
                source,
            })?,
            Format::Yaml => Catalog::from_yaml(&text).map_err(|source| CatalogError::Yaml {
                path: path.to_path_buf(),
                source,
            })?,
        };
        tracing::debug!(path = %path.display(), products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn from_json(text: &str) -> std::result::Result<Catalog, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn from_yaml(text: &str) -> std::result::Result<Catalog, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Lazily yields the products satisfying `spec`, in catalog order.
    pub fn filter<S>(&self, spec: S) -> Filtered<std::slice::Iter<'_, Product>, S>
    where
        S: Specification<Product>,
    {
        filter(&self.products, spec)
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Catalog::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("yaml" | "yml") => Ok(Format::Yaml),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}
