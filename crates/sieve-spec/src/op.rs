//! Comparison operators for attribute specifications.

use std::cmp::Ordering;

/// How an attribute is compared against an operand.
///
/// Operators are grouped by the operand types they support:
/// - **Universal**: `Eq`, `Ne`
/// - **String**: `StartsWith`, `EndsWith`, `Contains`, `Regex`
/// - **Number**: `Gt`, `Gte`, `Lt`, `Lte`
/// - **Enum**: `In`
/// - **Bool alias**: `Is` (alias for `Eq`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal. Valid for all types.
    Eq,
    /// Not equal. Valid for all types.
    Ne,

    /// String starts with prefix.
    StartsWith,
    /// String ends with suffix.
    EndsWith,
    /// String contains substring.
    Contains,
    /// String matches a regular expression.
    Regex,

    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,

    /// Enum discriminant is one of a set.
    In,

    /// Alias for `Eq`, reads naturally on flags: `discontinued is true`.
    Is,
}

impl Op {
    /// Returns `true` if this operator is valid for string operands.
    pub fn is_string_op(self) -> bool {
        matches!(
            self,
            Op::Eq | Op::Ne | Op::StartsWith | Op::EndsWith | Op::Contains | Op::Regex
        )
    }

    /// Returns `true` if this operator is valid for numeric operands.
    pub fn is_number_op(self) -> bool {
        matches!(self, Op::Eq | Op::Ne | Op::Gt | Op::Gte | Op::Lt | Op::Lte)
    }

    /// Returns `true` if this operator is valid for enum operands.
    pub fn is_enum_op(self) -> bool {
        matches!(self, Op::Eq | Op::Ne | Op::Is | Op::In)
    }

    /// Returns `true` if this operator is valid for boolean operands.
    pub fn is_bool_op(self) -> bool {
        matches!(self, Op::Eq | Op::Ne | Op::Is)
    }

    /// Maps aliases to their canonical operator (`Is` -> `Eq`).
    pub fn normalize(self) -> Op {
        match self {
            Op::Is => Op::Eq,
            other => other,
        }
    }

    /// Evaluates an ordering-based operator against a comparison result.
    ///
    /// Operators that are not ordering-based answer `false`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self.normalize() {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            _ => false,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::StartsWith => "startswith",
            Op::EndsWith => "endswith",
            Op::Contains => "contains",
            Op::Regex => "regex",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
            Op::In => "in",
            Op::Is => "is",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_by_type() {
        assert!(Op::Contains.is_string_op());
        assert!(!Op::Gt.is_string_op());

        assert!(Op::Lte.is_number_op());
        assert!(!Op::Regex.is_number_op());

        assert!(Op::In.is_enum_op());
        assert!(Op::Is.is_enum_op());
        assert!(!Op::Gte.is_enum_op());

        assert!(Op::Is.is_bool_op());
        assert!(!Op::Contains.is_bool_op());

        for op in [Op::Eq, Op::Ne] {
            assert!(op.is_string_op() && op.is_number_op() && op.is_enum_op() && op.is_bool_op());
        }
    }

    #[test]
    fn is_normalizes_to_eq() {
        assert_eq!(Op::Is.normalize(), Op::Eq);
        assert_eq!(Op::Gt.normalize(), Op::Gt);
    }

    #[test]
    fn ordering_evaluation() {
        use Ordering::{Equal, Greater, Less};

        let table = [
            (Op::Eq, [false, true, false]),
            (Op::Ne, [true, false, true]),
            (Op::Gt, [false, false, true]),
            (Op::Gte, [false, true, true]),
            (Op::Lt, [true, false, false]),
            (Op::Lte, [true, true, false]),
            (Op::Contains, [false, false, false]),
        ];

        for (op, expected) in table {
            let got = [Less, Equal, Greater].map(|o| op.eval_ordering(o));
            assert_eq!(got, expected, "{op}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(Op::StartsWith.to_string(), "startswith");
        assert_eq!(Op::Is.to_string(), "is");
    }
}
