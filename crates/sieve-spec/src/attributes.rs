//! Traits that expose an entity's attributes to attribute specifications.
//!
//! Both traits are usually derived with `sieve-macros`, but they are small
//! enough to implement by hand.

use crate::value::Value;

/// Types whose attributes can be read by name.
///
/// The filter engine never looks inside an entity; only
/// [`AttributeSpec`](crate::AttributeSpec) and [`Query`](crate::Query) call
/// this, and they treat [`Value::None`] as "does not match".
///
/// # Derive Usage
///
/// ```ignore
/// use sieve_macros::{AttributeEnum, Attributes};
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
/// }
///
/// assert_eq!(Product::SIZE, "size");
/// ```
///
/// # Manual Implementation
///
/// ```
/// use sieve_spec::{Attributes, Number, Value};
///
/// struct Product {
///     name: String,
///     price: Option<f64>,
/// }
///
/// impl Attributes for Product {
///     fn attribute(&self, name: &str) -> Value<'_> {
///         match name {
///             "name" => Value::String(&self.name),
///             "price" => self.price.map(Number::from).into(),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Attributes {
    /// Returns the named attribute, or [`Value::None`] if there is no such
    /// attribute or it is unset.
    fn attribute(&self, name: &str) -> Value<'_>;
}

impl<A: Attributes + ?Sized> Attributes for &A {
    fn attribute(&self, name: &str) -> Value<'_> {
        (**self).attribute(name)
    }
}

/// Enums usable as attribute values.
///
/// The discriminant must be stable; prefer explicit values over declaration
/// order when the enum is persisted anywhere.
///
/// ```
/// use sieve_spec::AttributeEnum;
///
/// #[derive(Clone, Copy)]
/// enum Color {
///     Black,
///     White,
/// }
///
/// impl AttributeEnum for Color {
///     fn discriminant(&self) -> u32 {
///         *self as u32
///     }
///
///     fn variant_name(&self) -> &'static str {
///         match self {
///             Color::Black => "Black",
///             Color::White => "White",
///         }
///     }
/// }
/// ```
pub trait AttributeEnum {
    /// Stable discriminant for this variant.
    fn discriminant(&self) -> u32;

    /// Human-readable variant name.
    fn variant_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    struct Item {
        label: String,
        count: i32,
        note: Option<String>,
    }

    impl Attributes for Item {
        fn attribute(&self, name: &str) -> Value<'_> {
            match name {
                "label" => Value::String(&self.label),
                "count" => Value::Number(Number::from(self.count)),
                "note" => self.note.as_ref().into(),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn manual_impl() {
        let item = Item {
            label: "x".to_string(),
            count: 4,
            note: None,
        };

        assert_eq!(item.attribute("label"), Value::String("x"));
        assert_eq!(item.attribute("count"), Value::Number(Number::I64(4)));
        assert_eq!(item.attribute("note"), Value::None);
        assert_eq!(item.attribute("missing"), Value::None);
    }

    #[test]
    fn references_delegate() {
        let item = Item {
            label: "y".to_string(),
            count: 0,
            note: Some("n".to_string()),
        };
        let by_ref = &item;
        assert_eq!(Attributes::attribute(&by_ref, "note"), Value::String("n"));
    }

    #[derive(Clone, Copy)]
    enum Level {
        Low,
        High,
    }

    impl AttributeEnum for Level {
        fn discriminant(&self) -> u32 {
            *self as u32
        }

        fn variant_name(&self) -> &'static str {
            match self {
                Level::Low => "Low",
                Level::High => "High",
            }
        }
    }

    #[test]
    fn enum_discriminants() {
        assert_eq!(Level::Low.discriminant(), 0);
        assert_eq!(Level::High.discriminant(), 1);
        assert_eq!(Level::High.variant_name(), "High");
    }
}
