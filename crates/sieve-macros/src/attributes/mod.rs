//! Derive support for exposing entities to attribute specifications.

mod attrs;
mod derive;

pub use derive::{attribute_enum_derive_impl, attributes_derive_impl};
