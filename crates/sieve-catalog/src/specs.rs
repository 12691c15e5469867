//! Hand-written product specifications.
//!
//! Each criterion is its own type. Adding one never touches the filter
//! engine or the existing criteria; combine them with
//! [`SpecificationExt`](sieve_spec::SpecificationExt) or the combinator
//! types.

use sieve_spec::Specification;

use crate::product::{Color, Product, Size};

/// Matches products of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        ColorSpecification { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.color() == self.color
    }
}

/// Matches products of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        SizeSpecification { size }
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.size() == self.size
    }
}

/// Matches products priced strictly below a limit.
///
/// Products without a price never match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBelow {
    limit: f64,
}

impl PriceBelow {
    pub fn new(limit: f64) -> Self {
        PriceBelow { limit }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }
}

impl Specification<Product> for PriceBelow {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.price().is_some_and(|price| price < self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(color: Color, size: Size, price: Option<f64>) -> Product {
        let p = Product::new("item", color, size).unwrap();
        match price {
            Some(price) => p.with_price(price),
            None => p,
        }
    }

    #[test]
    fn color() {
        let spec = ColorSpecification::new(Color::Blue);
        assert!(spec.is_satisfied(&product(Color::Blue, Size::Huge, None)));
        assert!(!spec.is_satisfied(&product(Color::Gray, Size::Huge, None)));
        assert_eq!(spec.color(), Color::Blue);
    }

    #[test]
    fn size() {
        let spec = SizeSpecification::new(Size::Medium);
        assert!(spec.is_satisfied(&product(Color::White, Size::Medium, None)));
        assert!(!spec.is_satisfied(&product(Color::White, Size::Large, None)));
        assert_eq!(spec.size(), Size::Medium);
    }

    #[test]
    fn price_below() {
        let spec = PriceBelow::new(100.0);
        assert!(spec.is_satisfied(&product(Color::Black, Size::Small, Some(99.99))));
        assert!(!spec.is_satisfied(&product(Color::Black, Size::Small, Some(100.0))));
        assert!(!spec.is_satisfied(&product(Color::Black, Size::Small, None)));
        assert_eq!(spec.limit(), 100.0);
    }
}
