//! Combinators: specifications built from other specifications.
//!
//! Every combinator owns its children and is itself a [`Specification`], so
//! trees of any depth are assembled purely by construction. Children are
//! evaluated left to right and all of them are evaluated: the result is the
//! strict boolean function of the children's answers.
//!
//! ```text
//! And(a, b)      = a ∧ b
//! Or(a, b)       = a ∨ b
//! Not(a)         = ¬a
//! AllOf(a, b, …) = a ∧ b ∧ …   (empty: true)
//! AnyOf(a, b, …) = a ∨ b ∨ …   (empty: false)
//! ```

use crate::error::{require, Result, SpecError};
use crate::specification::Specification;

/// Satisfied when both children are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B> {
    left: A,
    right: B,
}

impl<A, B> And<A, B> {
    /// Creates the conjunction of `left` and `right`.
    pub fn new(left: A, right: B) -> Self {
        And { left, right }
    }

    /// Creates the conjunction, failing if either child is unset.
    ///
    /// ```
    /// use sieve_spec::{And, Always, Never};
    ///
    /// let err = And::<Always, Never>::try_new(None, Some(Never)).unwrap_err();
    /// assert!(err.is_invalid_argument());
    /// ```
    pub fn try_new(left: Option<A>, right: Option<B>) -> Result<Self> {
        Ok(And::new(require(left, "left")?, require(right, "right")?))
    }

    /// The left child.
    pub fn left(&self) -> &A {
        &self.left
    }

    /// The right child.
    pub fn right(&self) -> &B {
        &self.right
    }

    /// Splits the combinator back into its children.
    pub fn into_parts(self) -> (A, B) {
        (self.left, self.right)
    }
}

impl<T: ?Sized, A, B> Specification<T> for And<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.left.is_satisfied(item) & self.right.is_satisfied(item)
    }
}

/// Satisfied when at least one child is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<A, B> {
    left: A,
    right: B,
}

impl<A, B> Or<A, B> {
    /// Creates the disjunction of `left` and `right`.
    pub fn new(left: A, right: B) -> Self {
        Or { left, right }
    }

    /// Creates the disjunction, failing if either child is unset.
    pub fn try_new(left: Option<A>, right: Option<B>) -> Result<Self> {
        Ok(Or::new(require(left, "left")?, require(right, "right")?))
    }

    /// The left child.
    pub fn left(&self) -> &A {
        &self.left
    }

    /// The right child.
    pub fn right(&self) -> &B {
        &self.right
    }

    /// Splits the combinator back into its children.
    pub fn into_parts(self) -> (A, B) {
        (self.left, self.right)
    }
}

impl<T: ?Sized, A, B> Specification<T> for Or<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.left.is_satisfied(item) | self.right.is_satisfied(item)
    }
}

/// Satisfied when the child is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<A> {
    inner: A,
}

impl<A> Not<A> {
    /// Creates the negation of `inner`.
    pub fn new(inner: A) -> Self {
        Not { inner }
    }

    /// Creates the negation, failing if the child is unset.
    pub fn try_new(inner: Option<A>) -> Result<Self> {
        Ok(Not::new(require(inner, "inner")?))
    }

    /// The negated child.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Unwraps the negated child.
    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<T: ?Sized, A> Specification<T> for Not<A>
where
    A: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }
}

/// Collects children, reporting the index of the first unset one.
fn require_all<S>(children: impl IntoIterator<Item = Option<S>>) -> Result<Vec<S>> {
    children
        .into_iter()
        .enumerate()
        .map(|(i, child)| {
            child.ok_or_else(|| {
                tracing::debug!(index = i, "combinator child is unset");
                SpecError::missing(format!("children[{i}]"))
            })
        })
        .collect()
}

/// N-ary conjunction. An empty `AllOf` is satisfied by everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllOf<S> {
    children: Vec<S>,
}

impl<S> AllOf<S> {
    /// Creates the conjunction of `children`.
    pub fn new(children: impl IntoIterator<Item = S>) -> Self {
        AllOf {
            children: children.into_iter().collect(),
        }
    }

    /// Creates the conjunction, failing on the first unset child.
    pub fn try_new(children: impl IntoIterator<Item = Option<S>>) -> Result<Self> {
        Ok(AllOf {
            children: require_all(children)?,
        })
    }

    /// Appends a child.
    pub fn push(&mut self, child: S) {
        self.children.push(child);
    }

    /// The children, in evaluation order.
    pub fn children(&self) -> &[S] {
        &self.children
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }
}

impl<S> Default for AllOf<S> {
    fn default() -> Self {
        AllOf {
            children: Vec::new(),
        }
    }
}

impl<S> FromIterator<S> for AllOf<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        AllOf::new(iter)
    }
}

impl<T: ?Sized, S> Specification<T> for AllOf<S>
where
    S: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.children
            .iter()
            .fold(true, |acc, child| acc & child.is_satisfied(item))
    }
}

/// N-ary disjunction. An empty `AnyOf` is satisfied by nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyOf<S> {
    children: Vec<S>,
}

impl<S> AnyOf<S> {
    /// Creates the disjunction of `children`.
    pub fn new(children: impl IntoIterator<Item = S>) -> Self {
        AnyOf {
            children: children.into_iter().collect(),
        }
    }

    /// Creates the disjunction, failing on the first unset child.
    pub fn try_new(children: impl IntoIterator<Item = Option<S>>) -> Result<Self> {
        Ok(AnyOf {
            children: require_all(children)?,
        })
    }

    /// Appends a child.
    pub fn push(&mut self, child: S) {
        self.children.push(child);
    }

    /// The children, in evaluation order.
    pub fn children(&self) -> &[S] {
        &self.children
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }
}

impl<S> Default for AnyOf<S> {
    fn default() -> Self {
        AnyOf {
            children: Vec::new(),
        }
    }
}

impl<S> FromIterator<S> for AnyOf<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        AnyOf::new(iter)
    }
}

impl<T: ?Sized, S> Specification<T> for AnyOf<S>
where
    S: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.children
            .iter()
            .fold(false, |acc, child| acc | child.is_satisfied(item))
    }
}
