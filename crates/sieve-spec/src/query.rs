//! Fluent query builder over attribute specifications.
//!
//! A [`Query`] groups [`AttributeSpec`]s into three clause groups with fixed
//! combination semantics:
//!
//! ```text
//! match = (every AND clause matches)
//!       ∧ (some OR clause matches, or there are no OR clauses)
//!       ∧ (no NOT clause matches)
//! ```
//!
//! Each group is an n-ary combinator, so a query is just a specification tree
//! assembled by a builder.

use std::fmt;

use regex::Regex;

use crate::attribute_spec::{AttributeSpec, Operand};
use crate::attributes::{AttributeEnum, Attributes};
use crate::combinator::{AllOf, AnyOf};
use crate::error::Result;
use crate::op::Op;
use crate::specification::Specification;

/// Builder for [`Query`].
///
/// Every step consumes and returns the builder. [`QueryBuilder::build`] only
/// reads it, so building twice yields equal queries.
///
/// # Example
///
/// ```
/// use sieve_spec::{Attributes, Query, SpecificationExt, Value};
///
/// struct Phone(&'static str, bool);
///
/// impl Attributes for Phone {
///     fn attribute(&self, name: &str) -> Value<'_> {
///         match name {
///             "name" => Value::String(self.0),
///             "discontinued" => Value::Bool(self.1),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let phones = [Phone("Pixel 8", false), Phone("Pixel 2", true), Phone("Galaxy", false)];
/// let query = Query::builder()
///     .and_starts_with("name", "Pixel")
///     .not_eq("discontinued", true)
///     .build();
///
/// let names: Vec<_> = query.filter(&phones).map(|p| p.0).collect();
/// assert_eq!(names, ["Pixel 8"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    all: Vec<AttributeSpec>,
    any: Vec<AttributeSpec>,
    none: Vec<AttributeSpec>,
}

macro_rules! group_shorthands {
    ($group:ident: $eq:ident, $ne:ident, $gt:ident, $gte:ident, $lt:ident, $lte:ident,
     $contains:ident, $starts_with:ident, $ends_with:ident, $regex:ident, $is:ident, $in:ident) => {
        /// Adds an equality clause.
        pub fn $eq(self, attribute: &str, operand: impl Into<Operand>) -> Self {
            self.$group(attribute, Op::Eq, operand)
        }

        /// Adds an inequality clause.
        pub fn $ne(self, attribute: &str, operand: impl Into<Operand>) -> Self {
            self.$group(attribute, Op::Ne, operand)
        }

        /// Adds a greater-than clause.
        pub fn $gt(self, attribute: &str, operand: impl Into<Operand>) -> Self {
            self.$group(attribute, Op::Gt, operand)
        }

        /// Adds a greater-than-or-equal clause.
        pub fn $gte(self, attribute: &str, operand: impl Into<Operand>) -> Self {
            self.$group(attribute, Op::Gte, operand)
        }

        /// Adds a less-than clause.
        pub fn $lt(self, attribute: &str, operand: impl Into<Operand>) -> Self {
            self.$group(attribute, Op::Lt, operand)
        }

        /// Adds a less-than-or-equal clause.
        pub fn $lte(self, attribute: &str, operand: impl Into<Operand>) -> Self {
            self.$group(attribute, Op::Lte, operand)
        }

        /// Adds a substring clause.
        pub fn $contains(self, attribute: &str, needle: &str) -> Self {
            self.$group(attribute, Op::Contains, needle)
        }

        /// Adds a prefix clause.
        pub fn $starts_with(self, attribute: &str, prefix: &str) -> Self {
            self.$group(attribute, Op::StartsWith, prefix)
        }

        /// Adds a suffix clause.
        pub fn $ends_with(self, attribute: &str, suffix: &str) -> Self {
            self.$group(attribute, Op::EndsWith, suffix)
        }

        /// Adds a regex clause. Fails if `pattern` does not compile.
        pub fn $regex(self, attribute: &str, pattern: &str) -> Result<Self> {
            let regex = Regex::new(pattern)?;
            Ok(self.$group(attribute, Op::Regex, regex))
        }

        /// Adds an enum-variant clause.
        pub fn $is<E: AttributeEnum + ?Sized>(self, attribute: &str, variant: &E) -> Self {
            self.$group(attribute, Op::Eq, Operand::variant(variant))
        }

        /// Adds an enum-set membership clause.
        pub fn $in<'a, E, I>(self, attribute: &str, variants: I) -> Self
        where
            E: AttributeEnum + 'a,
            I: IntoIterator<Item = &'a E>,
        {
            self.$group(attribute, Op::In, Operand::variants(variants))
        }
    };
}

impl QueryBuilder {
    /// Creates an empty builder. An empty query matches everything.
    pub fn new() -> Self {
        QueryBuilder::default()
    }

    /// Adds a clause to the AND group.
    pub fn and(mut self, attribute: &str, op: Op, operand: impl Into<Operand>) -> Self {
        self.all.push(AttributeSpec::new(attribute, op, operand));
        self
    }

    /// Adds a clause to the OR group.
    pub fn or(mut self, attribute: &str, op: Op, operand: impl Into<Operand>) -> Self {
        self.any.push(AttributeSpec::new(attribute, op, operand));
        self
    }

    /// Adds a clause to the NOT group.
    pub fn not(mut self, attribute: &str, op: Op, operand: impl Into<Operand>) -> Self {
        self.none.push(AttributeSpec::new(attribute, op, operand));
        self
    }

    /// Adds a prebuilt specification to the AND group.
    pub fn and_spec(mut self, spec: AttributeSpec) -> Self {
        self.all.push(spec);
        self
    }

    /// Adds a prebuilt specification to the OR group.
    pub fn or_spec(mut self, spec: AttributeSpec) -> Self {
        self.any.push(spec);
        self
    }

    /// Adds a prebuilt specification to the NOT group.
    pub fn not_spec(mut self, spec: AttributeSpec) -> Self {
        self.none.push(spec);
        self
    }

    group_shorthands!(and: and_eq, and_ne, and_gt, and_gte, and_lt, and_lte,
        and_contains, and_starts_with, and_ends_with, and_regex, and_is, and_in);

    group_shorthands!(or: or_eq, or_ne, or_gt, or_gte, or_lt, or_lte,
        or_contains, or_starts_with, or_ends_with, or_regex, or_is, or_in);

    group_shorthands!(not: not_eq, not_ne, not_gt, not_gte, not_lt, not_lte,
        not_contains, not_starts_with, not_ends_with, not_regex, not_is, not_in);

    /// Checks every clause's operator against its operand.
    pub fn validate(&self) -> Result<()> {
        self.all
            .iter()
            .chain(&self.any)
            .chain(&self.none)
            .try_for_each(AttributeSpec::validate)
    }

    /// Produces the query. Idempotent; the builder can keep being extended.
    pub fn build(&self) -> Query {
        Query {
            all: AllOf::new(self.all.iter().cloned()),
            any: AnyOf::new(self.any.iter().cloned()),
            none: AnyOf::new(self.none.iter().cloned()),
        }
    }

    /// Validates, then produces the query.
    pub fn try_build(&self) -> Result<Query> {
        self.validate()?;
        Ok(self.build())
    }
}

/// A compiled query; a [`Specification`] for any [`Attributes`] type.
#[derive(Debug, Clone, Default)]
pub struct Query {
    all: AllOf<AttributeSpec>,
    any: AnyOf<AttributeSpec>,
    none: AnyOf<AttributeSpec>,
}

impl Query {
    /// Starts a [`QueryBuilder`].
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }

    /// Clauses that must all match.
    pub fn and_clauses(&self) -> &[AttributeSpec] {
        self.all.children()
    }

    /// Clauses of which at least one must match.
    pub fn or_clauses(&self) -> &[AttributeSpec] {
        self.any.children()
    }

    /// Clauses of which none may match.
    pub fn not_clauses(&self) -> &[AttributeSpec] {
        self.none.children()
    }

    /// Returns `true` if the query has no clauses (and matches everything).
    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.any.is_empty() && self.none.is_empty()
    }
}

impl<T: Attributes + ?Sized> Specification<T> for Query {
    fn is_satisfied(&self, item: &T) -> bool {
        let all = self.all.is_satisfied(item);
        let any = self.any.is_empty() | self.any.is_satisfied(item);
        let none = !self.none.is_satisfied(item);
        all & any & none
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn group(f: &mut fmt::Formatter<'_>, label: &str, specs: &[AttributeSpec]) -> fmt::Result {
            let parts: Vec<String> = specs.iter().map(ToString::to_string).collect();
            write!(f, "{label}({})", parts.join(", "))
        }

        if self.is_empty() {
            return f.write_str("everything");
        }

        let mut sections: Vec<(&str, &[AttributeSpec])> = Vec::new();
        for (label, specs) in [
            ("all", self.and_clauses()),
            ("any", self.or_clauses()),
            ("none", self.not_clauses()),
        ] {
            if !specs.is_empty() {
                sections.push((label, specs));
            }
        }

        for (i, (label, specs)) in sections.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            group(f, label, specs)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specification::SpecificationExt;
    use crate::value::{Number, Value};

    #[derive(Debug, Clone, PartialEq)]
    struct Task {
        name: String,
        priority: i64,
        status: u32,
        archived: bool,
    }

    impl Attributes for Task {
        fn attribute(&self, name: &str) -> Value<'_> {
            match name {
                "name" => Value::String(&self.name),
                "priority" => Value::Number(Number::I64(self.priority)),
                "status" => Value::Enum(self.status),
                "archived" => Value::Bool(self.archived),
                _ => Value::None,
            }
        }
    }

    fn task(name: &str, priority: i64, status: u32, archived: bool) -> Task {
        Task {
            name: name.to_string(),
            priority,
            status,
            archived,
        }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            task("Task A", 1, 0, false),
            task("Task B", 2, 1, false),
            task("Urgent Task", 5, 1, false),
            task("Critical Task", 5, 2, true),
            task("Done Task", 3, 2, true),
        ]
    }

    fn names<'a>(tasks: impl Iterator<Item = &'a Task>) -> Vec<&'a str> {
        tasks.map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_all() {
        let tasks = sample_tasks();
        let query = Query::builder().build();
        assert!(query.is_empty());
        assert_eq!(query.count(&tasks), 5);
    }

    #[test]
    fn and_clauses_all_apply() {
        let tasks = sample_tasks();
        let query = Query::builder()
            .and_eq("priority", 5)
            .and_eq("archived", false)
            .build();
        assert_eq!(names(query.filter(&tasks)), ["Urgent Task"]);
    }

    #[test]
    fn or_clauses_need_one() {
        let tasks = sample_tasks();
        let query = Query::builder()
            .or_contains("name", "Urgent")
            .or_contains("name", "Critical")
            .build();
        assert_eq!(names(query.filter(&tasks)), ["Urgent Task", "Critical Task"]);
    }

    #[test]
    fn not_clauses_exclude() {
        let tasks = sample_tasks();
        let query = Query::builder().not_eq("archived", true).build();
        assert_eq!(names(query.filter(&tasks)), ["Task A", "Task B", "Urgent Task"]);
    }

    #[test]
    fn groups_combine() {
        let tasks = sample_tasks();
        let query = Query::builder()
            .and_gte("priority", 2)
            .or_eq("status", Operand::Enum(1))
            .or_eq("status", Operand::Enum(2))
            .not_ends_with("name", "Task B")
            .not_eq("archived", true)
            .build();
        assert_eq!(names(query.filter(&tasks)), ["Urgent Task"]);
    }

    #[test]
    fn enum_membership() {
        let tasks = sample_tasks();
        let query = Query::builder().and("status", Op::In, vec![0u32, 2]).build();
        assert_eq!(query.count(&tasks), 3);
    }

    #[test]
    fn regex_shorthand() {
        let tasks = sample_tasks();
        let query = Query::builder()
            .and_regex("name", r"^Task [AB]$")
            .unwrap()
            .build();
        assert_eq!(names(query.filter(&tasks)), ["Task A", "Task B"]);

        assert!(Query::builder().or_regex("name", "[").is_err());
    }

    #[test]
    fn build_is_idempotent() {
        let tasks = sample_tasks();
        let builder = Query::builder()
            .and_lt("priority", 3)
            .not_contains("name", "B");
        let first = builder.build();
        let second = builder.build();

        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(names(first.filter(&tasks)), names(second.filter(&tasks)));

        let extended = builder.and_eq("status", Operand::Enum(0)).build();
        assert_eq!(extended.and_clauses().len(), 2);
        assert_eq!(first.and_clauses().len(), 1);
    }

    #[test]
    fn try_build_validates() {
        let err = Query::builder().and("priority", Op::Contains, 3).try_build();
        assert!(err.is_err());
        assert!(Query::builder().and_gt("priority", 3).try_build().is_ok());
    }

    #[test]
    fn missing_attribute_fails_every_group_but_not() {
        let tasks = sample_tasks();
        assert_eq!(Query::builder().and_eq("owner", "me").build().count(&tasks), 0);
        assert_eq!(Query::builder().or_eq("owner", "me").build().count(&tasks), 0);
        assert_eq!(Query::builder().not_eq("owner", "me").build().count(&tasks), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Query::default().to_string(), "everything");

        let query = Query::builder()
            .and_gt("priority", 1)
            .not_eq("archived", true)
            .build();
        assert_eq!(query.to_string(), "all(priority gt 1) and none(archived eq true)");
    }
}
