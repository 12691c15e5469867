//! The `sieve` command line.
//!
//! Filter flags map onto specifications:
//!
//! - repeated values of one flag are OR-ed (`--color black --color white`)
//! - different flags form groups that are AND-ed, or OR-ed with `--any`
//! - `--exclude-*` values are always removed from the result
//! - no criteria at all keeps every product

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use sieve_spec::{AllOf, Always, And, AnyOf, AttributeSpec, BoxedSpec, Not};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::product::{Color, Product, Size};
use crate::render::{self, OutputFormat};
use crate::specs::{ColorSpecification, PriceBelow, SizeSpecification};

#[derive(Debug, Parser)]
#[command(
    name = "sieve",
    version,
    about = "Filter a product catalog with composable specifications"
)]
pub struct Cli {
    /// Log more (-v debug, -vv trace); SIEVE_LOG applies otherwise
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Walk through filtering the sample catalog
    Demo,
    /// Filter a catalog by color, size, name and price
    Filter(FilterArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Catalog file (.json, .yaml or .yml); the sample catalog when omitted
    #[arg(long, env = "SIEVE_CATALOG", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Keep products of this color
    #[arg(long, value_enum, value_name = "COLOR")]
    pub color: Vec<Color>,

    /// Keep products of this size
    #[arg(long, value_enum, value_name = "SIZE")]
    pub size: Vec<Size>,

    /// Drop products of this color
    #[arg(long, value_enum, value_name = "COLOR")]
    pub exclude_color: Vec<Color>,

    /// Drop products of this size
    #[arg(long, value_enum, value_name = "SIZE")]
    pub exclude_size: Vec<Size>,

    /// Keep products whose name contains TEXT (case-sensitive)
    #[arg(long, value_name = "TEXT")]
    pub name_contains: Option<String>,

    /// Keep products priced below PRICE
    #[arg(long, value_name = "PRICE")]
    pub below: Option<f64>,

    /// Keep products matching any group instead of all of them
    #[arg(long)]
    pub any: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl FilterArgs {
    /// Builds the specification the flags describe.
    pub fn to_spec(&self) -> BoxedSpec<'static, Product> {
        let mut groups: Vec<BoxedSpec<'static, Product>> = Vec::new();

        if !self.color.is_empty() {
            let colors: AnyOf<_> = self
                .color
                .iter()
                .copied()
                .map(ColorSpecification::new)
                .collect();
            groups.push(Box::new(colors));
        }
        if !self.size.is_empty() {
            let sizes: AnyOf<_> = self
                .size
                .iter()
                .copied()
                .map(SizeSpecification::new)
                .collect();
            groups.push(Box::new(sizes));
        }
        if let Some(text) = &self.name_contains {
            groups.push(Box::new(AttributeSpec::contains(Product::NAME, text)));
        }
        if let Some(limit) = self.below {
            groups.push(Box::new(PriceBelow::new(limit)));
        }

        let include: BoxedSpec<'static, Product> = match (groups.is_empty(), self.any) {
            (true, _) => Box::new(Always),
            (false, true) => Box::new(AnyOf::new(groups)),
            (false, false) => Box::new(AllOf::new(groups)),
        };

        let mut excluded: Vec<BoxedSpec<'static, Product>> = Vec::new();
        for color in &self.exclude_color {
            excluded.push(Box::new(ColorSpecification::new(*color)));
        }
        for size in &self.exclude_size {
            excluded.push(Box::new(SizeSpecification::new(*size)));
        }

        if excluded.is_empty() {
            include
        } else {
            Box::new(And::new(include, Not::new(AnyOf::new(excluded))))
        }
    }
}

impl Command {
    /// Runs the command and returns what it prints.
    pub fn execute(&self) -> Result<String> {
        match self {
            Command::Demo => Ok(render::demo(Catalog::sample())),
            Command::Filter(args) => {
                let loaded;
                let catalog = match &args.catalog {
                    Some(path) => {
                        loaded = Catalog::load(path)?;
                        &loaded
                    }
                    None => Catalog::sample(),
                };
                let spec = args.to_spec();
                let found: Vec<&Product> = catalog.filter(&spec).collect();
                tracing::debug!(
                    matched = found.len(),
                    total = catalog.len(),
                    "filtered catalog"
                );
                render::products(&found, args.format)
            }
        }
    }
}
