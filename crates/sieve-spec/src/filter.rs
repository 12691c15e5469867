//! The filter engine.
//!
//! [`filter`] turns a source of `&T` and a [`Specification<T>`] into a lazy
//! [`Filtered`] iterator. Nothing is evaluated until the consumer pulls, the
//! source is never copied or mutated, and matching items come out in their
//! original relative order.
//!
//! # Borrowing
//!
//! `Filtered` borrows the source for as long as it lives, so the source
//! cannot be mutated while a filtered view over it is being consumed; the
//! compiler rejects it. The view is single pass: call [`filter`] again to
//! start over.

use std::iter::FusedIterator;

use crate::error::{require, Result};
use crate::specification::Specification;

/// Lazily filters `items` with `spec`.
///
/// ```
/// use sieve_spec::{filter, from_fn};
///
/// let words = ["apple", "kiwi", "banana"];
/// let long = from_fn(|w: &&str| w.len() > 4);
/// let mut view = filter(&words, long);
///
/// assert_eq!(view.next(), Some(&"apple"));
/// assert_eq!(view.next(), Some(&"banana"));
/// assert_eq!(view.next(), None);
/// ```
pub fn filter<'a, T, I, S>(items: I, spec: S) -> Filtered<I::IntoIter, S>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    S: Specification<T>,
{
    Filtered::new(items.into_iter(), spec)
}

/// Like [`filter`], for callers whose arguments may be unset.
///
/// Fails with [`SpecError::InvalidArgument`](crate::SpecError::InvalidArgument)
/// naming `items` or `spec` before any element is produced.
pub fn try_filter<'a, T, I, S>(
    items: Option<I>,
    spec: Option<S>,
) -> Result<Filtered<I::IntoIter, S>>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    S: Specification<T>,
{
    let items = require(items, "items")?;
    let spec = require(spec, "spec")?;
    Ok(filter(items, spec))
}

/// Lazy, single-pass view of the items satisfying a specification.
///
/// Created by [`filter`], [`try_filter`] and
/// [`SpecificationExt::filter`](crate::SpecificationExt::filter).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filtered<I, S> {
    iter: I,
    spec: S,
}

impl<I, S> Filtered<I, S> {
    pub(crate) fn new(iter: I, spec: S) -> Self {
        Filtered { iter, spec }
    }

    /// The specification being applied.
    pub fn spec(&self) -> &S {
        &self.spec
    }
}

impl<'a, T, I, S> Iterator for Filtered<I, S>
where
    T: ?Sized + 'a,
    I: Iterator<Item = &'a T>,
    S: Specification<T>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let spec = &self.spec;
        self.iter.find(|item| spec.is_satisfied(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<'a, T, I, S> DoubleEndedIterator for Filtered<I, S>
where
    T: ?Sized + 'a,
    I: DoubleEndedIterator<Item = &'a T>,
    S: Specification<T>,
{
    fn next_back(&mut self) -> Option<&'a T> {
        let spec = &self.spec;
        self.iter.rfind(|item| spec.is_satisfied(item))
    }
}

impl<'a, T, I, S> FusedIterator for Filtered<I, S>
where
    T: ?Sized + 'a,
    I: FusedIterator<Item = &'a T>,
    S: Specification<T>,
{
}

/// Something that can filter a slice of `T` by a specification.
///
/// [`SpecFilter`] is the generic implementation; the trait exists so callers
/// can accept any filter strategy.
pub trait Filter<T> {
    /// Lazily yields the elements of `items` satisfying `spec`.
    fn filter<'a, S>(
        &self,
        items: &'a [T],
        spec: &'a S,
    ) -> Filtered<std::slice::Iter<'a, T>, &'a S>
    where
        S: Specification<T> + ?Sized;
}

/// Generic [`Filter`] that never inspects `T` itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecFilter;

impl SpecFilter {
    /// Creates the filter.
    pub fn new() -> Self {
        SpecFilter
    }
}

impl<T> Filter<T> for SpecFilter {
    fn filter<'a, S>(
        &self,
        items: &'a [T],
        spec: &'a S,
    ) -> Filtered<std::slice::Iter<'a, T>, &'a S>
    where
        S: Specification<T> + ?Sized,
    {
        Filtered::new(items.iter(), spec)
    }
}
