//! Output rendering: styled text, JSON and YAML.

use clap::ValueEnum;
use console::style;

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::product::{Color, Product, Size};
use crate::specs::{ColorSpecification, SizeSpecification};

/// How matching products are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One aligned line per product
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
    /// YAML sequence
    Yaml,
}

/// Renders `products` in the requested format.
pub fn products(products: &[&Product], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text(products)),
        OutputFormat::Json => serde_json::to_string_pretty(products)
            .map(|json| json + "\n")
            .map_err(CatalogError::EncodeJson),
        OutputFormat::Yaml => serde_yaml::to_string(products).map_err(CatalogError::EncodeYaml),
    }
}

fn text(products: &[&Product]) -> String {
    if products.is_empty() {
        return format!("{}\n", style("no matching products").dim());
    }

    let width = products
        .iter()
        .map(|p| p.name().chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for product in products {
        let price = match product.price() {
            Some(price) => style(format!("{price:.2}")).green(),
            None => style("-".to_string()).dim(),
        };
        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            style(format!("{:<width$}", product.name())).bold(),
            style(format!("{:<5}", product.color())).cyan(),
            style(format!("{:<6}", product.size())).magenta(),
            price,
        ));
    }
    out
}

/// The filtering walkthrough printed by `sieve demo`.
///
/// Filters `catalog` by color, then by size, then by both.
pub fn demo(catalog: &Catalog) -> String {
    let black = ColorSpecification::new(Color::Black);
    let large = SizeSpecification::new(Size::Large);
    let small = SizeSpecification::new(Size::Small);

    let mut out = String::new();

    section(&mut out, "Filter by color");
    for product in catalog.filter(black) {
        out.push_str(&format!(" - {} is {}\n", product.name(), product.color()));
    }

    section(&mut out, "Filter by size");
    for product in catalog.filter(large) {
        out.push_str(&format!(" - {} is {}\n", product.name(), product.size()));
    }

    section(&mut out, "Filter by color and size");
    for product in catalog.filter(sieve_spec::And::new(black, small)) {
        out.push_str(&format!(
            " - {} is {} and {}\n",
            product.name(),
            product.color(),
            product.size()
        ));
    }

    out
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("{}\n", style(format!("--- {title} ---")).bold()));
}
