//! Runtime attribute values.
//!
//! [`Value`] is what an entity hands to an attribute specification when asked
//! for one of its attributes. It borrows from the entity, so reading an
//! attribute never allocates.

use std::cmp::Ordering;

/// An attribute value borrowed from an entity.
///
/// # Example
///
/// ```
/// use sieve_spec::{Attributes, Number, Value};
///
/// struct Product {
///     name: String,
///     stock: u32,
/// }
///
/// impl Attributes for Product {
///     fn attribute(&self, name: &str) -> Value<'_> {
///         match name {
///             "name" => Value::String(&self.name),
///             "stock" => Value::Number(Number::U64(self.stock as u64)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Enum discriminant, see [`AttributeEnum`](crate::AttributeEnum).
    Enum(u32),
    /// Boolean value.
    Bool(bool),
    /// Attribute absent, unset or unknown.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if the attribute is absent.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Name of the value's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Enum(_) => "enum",
            Value::Bool(_) => "bool",
            Value::None => "none",
        }
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the enum discriminant, if present.
    pub fn as_enum(&self) -> Option<u32> {
        match self {
            Value::Enum(d) => Some(*d),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value<'_> {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

/// Numeric value that keeps integer precision where it can.
///
/// Comparisons across variants are exact: integers are never rounded to
/// `f64` when compared with a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to `f64`.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers exactly, handling mixed types. `None` when NaN is
    /// involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            // Negative signed values sort below every unsigned value.
            (Number::I64(a), Number::U64(b)) => Some(if a < 0 {
                Ordering::Less
            } else {
                (a as u64).cmp(&b)
            }),
            (Number::U64(a), Number::I64(b)) => Some(if b < 0 {
                Ordering::Greater
            } else {
                a.cmp(&(b as u64))
            }),
            (Number::I64(a), Number::F64(b)) => compare_int_float(i128::from(a), b),
            (Number::U64(a), Number::F64(b)) => compare_int_float(i128::from(a), b),
            (Number::F64(a), Number::I64(b)) => {
                compare_int_float(i128::from(b), a).map(Ordering::reverse)
            }
            (Number::F64(a), Number::U64(b)) => {
                compare_int_float(i128::from(b), a).map(Ordering::reverse)
            }
        }
    }
}

/// Compares an integer with a float without rounding the integer.
fn compare_int_float(int: i128, float: f64) -> Option<Ordering> {
    // 2^64: every i64 and u64 lies strictly inside (-2^64, 2^64).
    const LIMIT: f64 = 18_446_744_073_709_551_616.0;

    if float.is_nan() {
        return None;
    }
    if float >= LIMIT {
        return Some(Ordering::Less);
    }
    if float <= -LIMIT {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc();
    match int.cmp(&(whole as i128)) {
        Ordering::Equal => whole.partial_cmp(&float),
        ordering => Some(ordering),
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )*
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);
