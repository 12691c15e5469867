//! sieve-catalog - A product catalog filtered with composable specifications.
//!
//! The library side of the `sieve` binary: a small product domain, three
//! hand-written specifications, catalog loading and output rendering.
//!
//! ```rust
//! use sieve_catalog::{Catalog, Color, ColorSpecification, Size, SizeSpecification};
//! use sieve_spec::And;
//!
//! let spec = And::new(
//!     ColorSpecification::new(Color::Black),
//!     SizeSpecification::new(Size::Small),
//! );
//! let names: Vec<_> = Catalog::sample().filter(spec).map(|p| p.name()).collect();
//! assert_eq!(names, ["Google Pixel"]);
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod logging;
pub mod product;
pub mod render;
pub mod specs;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use product::{Color, Product, Size};
pub use render::OutputFormat;
pub use specs::{ColorSpecification, PriceBelow, SizeSpecification};
