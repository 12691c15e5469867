//! sieve-spec - Composable specifications and a lazy filter engine.
//!
//! A [`Specification<T>`] answers one question about a `T`: does it match?
//! Specifications compose into trees with [`And`], [`Or`] and [`Not`] (and
//! their n-ary forms [`AllOf`] / [`AnyOf`]), and [`filter`] applies any of
//! them to a collection, lazily and in order.
//!
//! Adding a criterion never touches existing code: write a new type that
//! implements [`Specification`], or declare one by attribute name with
//! [`AttributeSpec`], and combine it with what is already there.
//!
//! # Quick Start
//!
//! ```rust
//! use sieve_spec::{filter, And, Or, Specification};
//!
//! #[derive(Debug, PartialEq)]
//! enum Color { Black, White }
//!
//! #[derive(Debug, PartialEq)]
//! enum Size { Small, Large }
//!
//! #[derive(Debug)]
//! struct Product { name: &'static str, color: Color, size: Size }
//!
//! struct ColorIs(Color);
//!
//! impl Specification<Product> for ColorIs {
//!     fn is_satisfied(&self, p: &Product) -> bool {
//!         p.color == self.0
//!     }
//! }
//!
//! struct SizeIs(Size);
//!
//! impl Specification<Product> for SizeIs {
//!     fn is_satisfied(&self, p: &Product) -> bool {
//!         p.size == self.0
//!     }
//! }
//!
//! let products = [
//!     Product { name: "Google Pixel", color: Color::Black, size: Size::Small },
//!     Product { name: "Apple", color: Color::White, size: Size::Small },
//!     Product { name: "Samsung", color: Color::Black, size: Size::Large },
//! ];
//!
//! let black_and_small = And::new(ColorIs(Color::Black), SizeIs(Size::Small));
//! let names: Vec<_> = filter(&products, &black_and_small).map(|p| p.name).collect();
//! assert_eq!(names, ["Google Pixel"]);
//!
//! let black_or_large = Or::new(ColorIs(Color::Black), SizeIs(Size::Large));
//! let names: Vec<_> = filter(&products, &black_or_large).map(|p| p.name).collect();
//! assert_eq!(names, ["Google Pixel", "Samsung"]);
//! ```
//!
//! # Semantics
//!
//! - Specifications are pure: the same input always gives the same answer.
//! - Combinators evaluate every child, left to right, and apply strict
//!   boolean logic.
//! - [`filter`] yields references into the source, in source order, one at a
//!   time as the consumer pulls. It never copies or mutates the source.
//! - Absent attributes never match an [`AttributeSpec`].
//! - The only runtime failure is [`SpecError::InvalidArgument`] from the
//!   `try_*` constructors, raised before anything is evaluated.
//!
//! # Attribute Operators
//!
//! | Operand | Operators |
//! |---------|-----------|
//! | String | `Eq`, `Ne`, `StartsWith`, `EndsWith`, `Contains`, `Regex` |
//! | Number | `Eq`, `Ne`, `Gt`, `Gte`, `Lt`, `Lte` |
//! | Enum | `Eq`, `Ne`, `Is`, `In` |
//! | Bool | `Eq`, `Ne`, `Is` |

mod attribute_spec;
mod attributes;
mod combinator;
mod error;
mod filter;
mod op;
mod query;
mod specification;
mod value;

pub use attribute_spec::{AttributeSpec, Operand};
pub use attributes::{AttributeEnum, Attributes};
pub use combinator::{AllOf, And, AnyOf, Not, Or};
pub use error::{Result, SpecError};
pub use filter::{filter, try_filter, Filter, Filtered, SpecFilter};
pub use op::Op;
pub use query::{Query, QueryBuilder};
pub use specification::{
    from_fn, Always, BoxedSpec, Never, Predicate, Specification, SpecificationExt,
};
pub use value::{Number, Value};
