//! The product domain: [`Product`], [`Color`] and [`Size`].

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sieve_macros::{AttributeEnum, Attributes};

use crate::error::{CatalogError, Result};

/// Product colors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, AttributeEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Gray,
    Blue,
}

impl Color {
    /// Lowercase name, as used on the command line and in catalog files.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Gray => "gray",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Product sizes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, AttributeEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
    Huge,
}

impl Size {
    /// Lowercase name, as used on the command line and in catalog files.
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
            Size::Huge => "huge",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A catalog entry.
///
/// The name is never empty; [`Product::new`] and deserialization both
/// reject blank names. Attributes `name`, `color`, `size` and `price` are
/// available to [`AttributeSpec`](sieve_spec::AttributeSpec) and
/// [`Query`](sieve_spec::Query).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Attributes)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    #[attr(String)]
    pub(crate) name: String,

    #[attr(Enum)]
    pub(crate) color: Color,

    #[attr(Enum)]
    pub(crate) size: Size,

    #[attr(Number, optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) price: Option<f64>,
}

impl Product {
    /// Creates a product without a price.
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        Ok(Product {
            name,
            color,
            size,
            price: None,
        })
    }

    /// Sets the price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }
}

/// Unvalidated wire form of a [`Product`].
#[derive(Deserialize)]
struct ProductRecord {
    name: String,
    color: Color,
    size: Size,
    #[serde(default)]
    price: Option<f64>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self> {
        let product = Product::new(record.name, record.color, record.size)?;
        Ok(match record.price {
            Some(price) => product.with_price(price),
            None => product,
        })
    }
}
