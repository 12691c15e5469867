//! Proc macros for sieve.
//!
//! # Derive Macros
//!
//! - [`Attributes`] - Expose struct fields to attribute specifications
//! - [`AttributeEnum`] - Give a fieldless enum stable discriminants and names
//!
//! The generated code refers to `::sieve_spec`, so the deriving crate must
//! depend on `sieve-spec`.

mod attributes;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `sieve_spec::Attributes` for a struct with named fields.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String` | String field (Eq, Ne, Contains, StartsWith, EndsWith, Regex) |
/// | `Number` | Numeric field (Eq, Ne, Gt, Gte, Lt, Lte) |
/// | `Enum` | Enum field (Eq, Ne, Is, In), requires `AttributeEnum` |
/// | `Bool` | Boolean field (Eq, Ne, Is) |
/// | `optional` | The field is an `Option<_>`; `None` reads as an absent attribute |
/// | `skip` | Exclude this field |
/// | `rename = "..."` | Expose the field under another name |
/// | `ty = "..."` | Spell the type as a string (`ty = "enum"`) |
///
/// Fields without `#[attr(...)]` are not exposed.
///
/// # Generated Code
///
/// 1. One `SCREAMING_SNAKE_CASE` constant per exposed attribute name
/// 2. `impl sieve_spec::Attributes`
///
/// # Example
///
/// ```ignore
/// use sieve_macros::{AttributeEnum, Attributes};
/// use sieve_spec::{filter, And, AttributeSpec};
///
/// #[derive(Clone, Copy, AttributeEnum)]
/// enum Size { Small, Large }
///
/// #[derive(Attributes)]
/// struct Product {
///     #[attr(String)]
///     name: String,
///     #[attr(Enum)]
///     size: Size,
///     #[attr(Number, optional)]
///     price: Option<f64>,
///     #[attr(skip)]
///     sku: u64,
/// }
///
/// let large = AttributeSpec::is(Product::SIZE, &Size::Large);
/// let cheap = AttributeSpec::lt(Product::PRICE, 100);
/// let products: Vec<Product> = Vec::new();
/// let found = filter(&products, And::new(large, cheap)).count();
/// ```
#[proc_macro_derive(Attributes, attributes(attr))]
pub fn attributes_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    attributes::attributes_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derives `sieve_spec::AttributeEnum` for an enum without fields.
///
/// Discriminants follow declaration order starting at zero, so reordering
/// variants changes them. `#[attr(rename = "...")]` on a variant overrides
/// its name.
///
/// ```ignore
/// use sieve_macros::AttributeEnum;
///
/// #[derive(AttributeEnum)]
/// enum Color {
///     Black,
///     #[attr(rename = "white")]
///     White,
/// }
/// ```
#[proc_macro_derive(AttributeEnum, attributes(attr))]
pub fn attribute_enum_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    attributes::attribute_enum_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
