//! The [`Specification`] trait and its leaf helpers.
//!
//! A specification classifies a value of type `T` as matching or not. New
//! criteria are added by writing a new type that implements the trait; the
//! filter engine and the existing specifications never change.

use std::sync::Arc;

use crate::combinator::{And, Not, Or};
use crate::filter::Filtered;

/// A reusable predicate over values of type `T`.
///
/// Implementations must be pure: the result depends only on `item` and on
/// parameters fixed at construction. Evaluation never fails; a specification
/// that looks at an attribute the item does not have answers `false`.
///
/// # Example
///
/// ```
/// use sieve_spec::{Specification, SpecificationExt};
///
/// struct Even;
///
/// impl Specification<i64> for Even {
///     fn is_satisfied(&self, n: &i64) -> bool {
///         n % 2 == 0
///     }
/// }
///
/// struct Positive;
///
/// impl Specification<i64> for Positive {
///     fn is_satisfied(&self, n: &i64) -> bool {
///         *n > 0
///     }
/// }
///
/// let numbers = [-4, -1, 2, 3, 6];
/// let spec = Even.and(Positive);
/// let matched: Vec<_> = spec.filter(&numbers).collect();
/// assert_eq!(matched, [&2, &6]);
/// ```
pub trait Specification<T: ?Sized> {
    /// Returns `true` if `item` satisfies this specification.
    fn is_satisfied(&self, item: &T) -> bool;
}

/// Owned, type-erased specification.
///
/// Combinators built from boxed children can hold specifications of
/// different concrete types, which is how trees are assembled at runtime.
pub type BoxedSpec<'a, T> = Box<dyn Specification<T> + Send + Sync + 'a>;

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// Specification satisfied by every item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always;

impl<T: ?Sized> Specification<T> for Always {
    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }
}

/// Specification satisfied by no item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Never;

impl<T: ?Sized> Specification<T> for Never {
    fn is_satisfied(&self, _item: &T) -> bool {
        false
    }
}

/// Atomic specification backed by a closure.
///
/// The closure must be pure; see [`Specification`].
#[derive(Clone, Copy)]
pub struct Predicate<F>(F);

impl<F> std::fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Predicate(..)")
    }
}

impl<T: ?Sized, F> Specification<T> for Predicate<F>
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

/// Wraps a closure as a [`Specification`].
///
/// ```
/// use sieve_spec::{from_fn, Specification};
///
/// let short = from_fn(|s: &str| s.len() < 4);
/// assert!(short.is_satisfied("abc"));
/// assert!(!short.is_satisfied("abcd"));
/// ```
pub fn from_fn<T: ?Sized, F>(f: F) -> Predicate<F>
where
    F: Fn(&T) -> bool,
{
    Predicate(f)
}

/// Composition and execution methods available on every specification.
///
/// Composition consumes the operands and returns a new combinator; nothing
/// about the operands is modified.
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    /// Combines with `other`; satisfied when both are.
    fn and<B: Specification<T>>(self, other: B) -> And<Self, B> {
        And::new(self, other)
    }

    /// Combines with `other`; satisfied when either is.
    fn or<B: Specification<T>>(self, other: B) -> Or<Self, B> {
        Or::new(self, other)
    }

    /// Negates this specification.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Erases the concrete type.
    fn boxed<'a>(self) -> BoxedSpec<'a, T>
    where
        Self: Send + Sync + 'a,
    {
        Box::new(self)
    }

    /// Lazily yields the items satisfying this specification, in order.
    fn filter<'s, 'a, I>(&'s self, items: I) -> Filtered<I::IntoIter, &'s Self>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Filtered::new(items.into_iter(), self)
    }

    /// Collects clones of the matching items.
    fn filter_cloned<'a, I>(&self, items: I) -> Vec<T>
    where
        T: Clone + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.filter(items).cloned().collect()
    }

    /// Counts matching items without collecting them.
    fn count<'a, I>(&self, items: I) -> usize
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.filter(items).count()
    }

    /// Returns `true` if at least one item matches.
    fn any<'a, I>(&self, items: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().any(|item| self.is_satisfied(item))
    }

    /// Returns `true` if every item matches (vacuously true when empty).
    fn all<'a, I>(&self, items: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().all(|item| self.is_satisfied(item))
    }

    /// Returns the first matching item.
    fn find<'a, I>(&self, items: I) -> Option<&'a T>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().find(|item| self.is_satisfied(item))
    }

    /// Returns the index of the first matching item.
    fn position<'a, I>(&self, items: I) -> Option<usize>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().position(|item| self.is_satisfied(item))
    }

    /// Keeps only the matching items of `items`, in place.
    fn retain(&self, items: &mut Vec<T>)
    where
        T: Sized,
    {
        items.retain(|item| self.is_satisfied(item));
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}
