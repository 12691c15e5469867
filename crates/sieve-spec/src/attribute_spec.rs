//! Attribute specifications: atomic specifications declared by attribute name.
//!
//! An [`AttributeSpec`] is an attribute name, an operator and an operand. It
//! is a [`Specification`] for every type implementing [`Attributes`], so a new
//! criterion over an existing entity needs no new type at all.

use std::fmt;

use regex::Regex;

use crate::attributes::{AttributeEnum, Attributes};
use crate::error::{Result, SpecError};
use crate::op::Op;
use crate::specification::Specification;
use crate::value::{Number, Value};

/// Owned operand stored in an attribute specification.
///
/// Unlike [`Value`], which borrows from the entity, `Operand` owns its data so
/// specifications can outlive the items they are applied to.
#[derive(Debug, Clone)]
pub enum Operand {
    /// String operand.
    String(String),
    /// Numeric operand.
    Number(Number),
    /// Single enum discriminant.
    Enum(u32),
    /// Set of enum discriminants (for [`Op::In`]).
    EnumSet(Vec<u32>),
    /// Boolean operand.
    Bool(bool),
    /// Compiled regular expression (for [`Op::Regex`]).
    Regex(Regex),
}

impl Operand {
    /// Operand for a single enum variant.
    pub fn variant<E: AttributeEnum + ?Sized>(variant: &E) -> Self {
        Operand::Enum(variant.discriminant())
    }

    /// Operand for a set of enum variants.
    pub fn variants<'a, E, I>(variants: I) -> Self
    where
        E: AttributeEnum + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        Operand::EnumSet(variants.into_iter().map(E::discriminant).collect())
    }

    /// Name of the operand's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::String(_) => "string",
            Operand::Number(_) => "number",
            Operand::Enum(_) => "enum",
            Operand::EnumSet(_) => "enum set",
            Operand::Bool(_) => "bool",
            Operand::Regex(_) => "regex",
        }
    }

    /// Returns `true` if `op` can be applied to this operand.
    pub fn accepts(&self, op: Op) -> bool {
        match self {
            Operand::String(_) => op.is_string_op() && op != Op::Regex,
            Operand::Regex(_) => op == Op::Regex,
            Operand::Number(_) => op.is_number_op(),
            Operand::Enum(_) => op.is_enum_op() && op != Op::In,
            Operand::EnumSet(_) => op == Op::In,
            Operand::Bool(_) => op.is_bool_op(),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::String(s) => write!(f, "{s:?}"),
            Operand::Number(Number::I64(n)) => write!(f, "{n}"),
            Operand::Number(Number::U64(n)) => write!(f, "{n}"),
            Operand::Number(Number::F64(n)) => write!(f, "{n}"),
            Operand::Enum(d) => write!(f, "#{d}"),
            Operand::EnumSet(set) => {
                let parts: Vec<String> = set.iter().map(|d| format!("#{d}")).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            Operand::Bool(b) => write!(f, "{b}"),
            Operand::Regex(r) => write!(f, "/{}/", r.as_str()),
        }
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::String(s)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::String(s.to_string())
    }
}

impl From<Number> for Operand {
    fn from(n: Number) -> Self {
        Operand::Number(n)
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Bool(b)
    }
}

impl From<Regex> for Operand {
    fn from(r: Regex) -> Self {
        Operand::Regex(r)
    }
}

impl From<Vec<u32>> for Operand {
    fn from(set: Vec<u32>) -> Self {
        Operand::EnumSet(set)
    }
}

macro_rules! operand_from_number {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Operand {
                fn from(n: $source) -> Self {
                    Operand::Number(Number::from(n))
                }
            }
        )*
    };
}

operand_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Atomic specification comparing one named attribute against an operand.
///
/// An absent attribute ([`Value::None`]) or an attribute of a different type
/// than the operand never matches, whatever the operator (including `Ne`).
///
/// # Example
///
/// ```
/// use sieve_spec::{AttributeSpec, Attributes, Number, Specification, SpecificationExt, Value};
///
/// struct Phone {
///     name: &'static str,
///     price: f64,
/// }
///
/// impl Attributes for Phone {
///     fn attribute(&self, name: &str) -> Value<'_> {
///         match name {
///             "name" => Value::String(self.name),
///             "price" => Value::Number(Number::from(self.price)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let phones = [
///     Phone { name: "Pixel", price: 599.0 },
///     Phone { name: "Galaxy", price: 899.0 },
/// ];
///
/// let cheap = AttributeSpec::lt("price", 700);
/// let names: Vec<_> = cheap.filter(&phones).map(|p| p.name).collect();
/// assert_eq!(names, ["Pixel"]);
/// ```
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    attribute: String,
    op: Op,
    operand: Operand,
}

impl AttributeSpec {
    /// Creates a specification without checking that `op` suits the operand.
    ///
    /// A mismatched pair is not an error; it simply never matches. Use
    /// [`AttributeSpec::checked`] to reject it up front.
    pub fn new(attribute: impl Into<String>, op: Op, operand: impl Into<Operand>) -> Self {
        AttributeSpec {
            attribute: attribute.into(),
            op,
            operand: operand.into(),
        }
    }

    /// Creates a specification, rejecting operators the operand does not support.
    pub fn checked(
        attribute: impl Into<String>,
        op: Op,
        operand: impl Into<Operand>,
    ) -> Result<Self> {
        let spec = AttributeSpec::new(attribute, op, operand);
        spec.validate()?;
        Ok(spec)
    }

    /// Checks that the operator is valid for the operand type.
    pub fn validate(&self) -> Result<()> {
        if self.operand.accepts(self.op) {
            Ok(())
        } else {
            Err(SpecError::InvalidOperator {
                op: self.op.as_str(),
                operand: self.operand.type_name(),
            })
        }
    }

    /// `attribute == operand`.
    pub fn eq(attribute: impl Into<String>, operand: impl Into<Operand>) -> Self {
        AttributeSpec::new(attribute, Op::Eq, operand)
    }

    /// `attribute != operand` (absent attributes still never match).
    pub fn ne(attribute: impl Into<String>, operand: impl Into<Operand>) -> Self {
        AttributeSpec::new(attribute, Op::Ne, operand)
    }

    /// `attribute > operand`.
    pub fn gt(attribute: impl Into<String>, operand: impl Into<Operand>) -> Self {
        AttributeSpec::new(attribute, Op::Gt, operand)
    }

    /// `attribute >= operand`.
    pub fn gte(attribute: impl Into<String>, operand: impl Into<Operand>) -> Self {
        AttributeSpec::new(attribute, Op::Gte, operand)
    }

    /// `attribute < operand`.
    pub fn lt(attribute: impl Into<String>, operand: impl Into<Operand>) -> Self {
        AttributeSpec::new(attribute, Op::Lt, operand)
    }

    /// `attribute <= operand`.
    pub fn lte(attribute: impl Into<String>, operand: impl Into<Operand>) -> Self {
        AttributeSpec::new(attribute, Op::Lte, operand)
    }

    /// String attribute contains `needle`.
    pub fn contains(attribute: impl Into<String>, needle: &str) -> Self {
        AttributeSpec::new(attribute, Op::Contains, needle)
    }

    /// String attribute starts with `prefix`.
    pub fn starts_with(attribute: impl Into<String>, prefix: &str) -> Self {
        AttributeSpec::new(attribute, Op::StartsWith, prefix)
    }

    /// String attribute ends with `suffix`.
    pub fn ends_with(attribute: impl Into<String>, suffix: &str) -> Self {
        AttributeSpec::new(attribute, Op::EndsWith, suffix)
    }

    /// String attribute matches `pattern`.
    pub fn regex(attribute: impl Into<String>, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(AttributeSpec::new(attribute, Op::Regex, regex))
    }

    /// Enum attribute equals `variant`.
    pub fn is<E: AttributeEnum + ?Sized>(attribute: impl Into<String>, variant: &E) -> Self {
        AttributeSpec::new(attribute, Op::Eq, Operand::variant(variant))
    }

    /// Enum attribute is one of `variants`.
    pub fn one_of<'a, E, I>(attribute: impl Into<String>, variants: I) -> Self
    where
        E: AttributeEnum + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        AttributeSpec::new(attribute, Op::In, Operand::variants(variants))
    }

    /// The attribute this specification reads.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// The comparison operator.
    pub fn op(&self) -> Op {
        self.op
    }

    /// The operand compared against.
    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// Evaluates this specification against an already-extracted value.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        match (&self.operand, value) {
            (Operand::String(pattern), Value::String(s)) => self.match_string(s, pattern),
            (Operand::Regex(regex), Value::String(s)) => self.op == Op::Regex && regex.is_match(s),
            (Operand::Number(operand), Value::Number(n)) => match n.compare(*operand) {
                Some(ordering) => self.op.eval_ordering(ordering),
                None => false,
            },
            (Operand::Enum(operand), Value::Enum(d)) => match self.op.normalize() {
                Op::Eq => d == operand,
                Op::Ne => d != operand,
                _ => false,
            },
            (Operand::EnumSet(set), Value::Enum(d)) => self.op == Op::In && set.contains(d),
            (Operand::Bool(operand), Value::Bool(b)) => match self.op.normalize() {
                Op::Eq => b == operand,
                Op::Ne => b != operand,
                _ => false,
            },
            // Absent attribute or type mismatch.
            _ => false,
        }
    }

    fn match_string(&self, s: &str, pattern: &str) -> bool {
        match self.op {
            Op::Eq => s == pattern,
            Op::Ne => s != pattern,
            Op::StartsWith => s.starts_with(pattern),
            Op::EndsWith => s.ends_with(pattern),
            Op::Contains => s.contains(pattern),
            _ => false,
        }
    }
}

impl<T: Attributes + ?Sized> Specification<T> for AttributeSpec {
    fn is_satisfied(&self, item: &T) -> bool {
        self.matches(&item.attribute(&self.attribute))
    }
}

impl fmt::Display for AttributeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.attribute, self.op, self.operand)
    }
}
