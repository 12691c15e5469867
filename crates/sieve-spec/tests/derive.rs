//! Integration tests for the `Attributes` and `AttributeEnum` derives.

#![allow(dead_code)] // Some fields are intentionally not exposed

use sieve_macros::{AttributeEnum, Attributes};
use sieve_spec::{
    filter, And, AttributeEnum as _, AttributeSpec, Attributes as _, Number, Or, Query,
    SpecificationExt, Value,
};

#[derive(Debug, Clone, Copy, PartialEq, AttributeEnum)]
enum Color {
    Black,
    White,
    Gray,
    #[attr(rename = "navy")]
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, AttributeEnum)]
enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Attributes)]
struct Product {
    #[attr(String)]
    name: String,

    #[attr(Enum)]
    color: Color,

    #[attr(ty = "enum")]
    size: Size,

    #[attr(Number, optional)]
    price: Option<f64>,

    #[attr(Bool, rename = "discontinued")]
    retired: bool,

    #[attr(String, optional)]
    vendor: Option<String>,

    #[attr(skip)]
    sku: u64,

    notes: String,
}

fn product(name: &str, color: Color, size: Size, price: Option<f64>) -> Product {
    Product {
        name: name.to_string(),
        color,
        size,
        price,
        retired: false,
        vendor: None,
        sku: 0,
        notes: String::new(),
    }
}

fn catalog() -> Vec<Product> {
    vec![
        product("Apple", Color::White, Size::Small, Some(999.0)),
        product("Google Pixel", Color::Black, Size::Small, Some(599.0)),
        product("Samsung", Color::Black, Size::Large, None),
    ]
}

fn names<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
    products.map(|p| p.name.as_str()).collect()
}

// =============================================================================
// AttributeEnum
// =============================================================================

#[test]
fn enum_discriminants_follow_declaration_order() {
    assert_eq!(Color::Black.discriminant(), 0);
    assert_eq!(Color::White.discriminant(), 1);
    assert_eq!(Color::Gray.discriminant(), 2);
    assert_eq!(Color::Blue.discriminant(), 3);
    assert_eq!(Size::Large.discriminant(), 2);
}

#[test]
fn enum_variant_names() {
    assert_eq!(Color::Black.variant_name(), "Black");
    assert_eq!(Color::Blue.variant_name(), "navy");
}

// =============================================================================
// Attributes
// =============================================================================

#[test]
fn constants_are_generated() {
    assert_eq!(Product::NAME, "name");
    assert_eq!(Product::COLOR, "color");
    assert_eq!(Product::SIZE, "size");
    assert_eq!(Product::PRICE, "price");
    assert_eq!(Product::DISCONTINUED, "discontinued");
    assert_eq!(Product::VENDOR, "vendor");
}

#[test]
fn exposed_fields_read_back() {
    let mut p = product("Apple", Color::White, Size::Small, Some(999.0));
    p.vendor = Some("Cupertino".to_string());

    assert_eq!(p.attribute("name"), Value::String("Apple"));
    assert_eq!(p.attribute("color"), Value::Enum(1));
    assert_eq!(p.attribute("size"), Value::Enum(0));
    assert_eq!(p.attribute("price"), Value::Number(Number::F64(999.0)));
    assert_eq!(p.attribute("discontinued"), Value::Bool(false));
    assert_eq!(p.attribute("vendor"), Value::String("Cupertino"));
}

#[test]
fn unset_optional_reads_as_none() {
    let p = product("Samsung", Color::Black, Size::Large, None);
    assert_eq!(p.attribute("price"), Value::None);
    assert_eq!(p.attribute("vendor"), Value::None);
}

#[test]
fn hidden_fields_read_as_none() {
    let p = product("Apple", Color::White, Size::Small, None);
    assert_eq!(p.attribute("sku"), Value::None);
    assert_eq!(p.attribute("notes"), Value::None);
    assert_eq!(p.attribute("retired"), Value::None);
    assert_eq!(p.attribute(""), Value::None);
}

// =============================================================================
// Derived entities in specifications
// =============================================================================

#[test]
fn and_of_attribute_specs() {
    let products = catalog();
    let spec = And::new(
        AttributeSpec::is(Product::COLOR, &Color::Black),
        AttributeSpec::is(Product::SIZE, &Size::Small),
    );
    assert_eq!(names(filter(&products, &spec)), ["Google Pixel"]);
}

#[test]
fn or_of_attribute_specs() {
    let products = catalog();
    let spec = Or::new(
        AttributeSpec::is(Product::COLOR, &Color::Black),
        AttributeSpec::is(Product::SIZE, &Size::Large),
    );
    assert_eq!(names(filter(&products, &spec)), ["Google Pixel", "Samsung"]);
}

#[test]
fn absent_price_is_not_cheap_and_not_expensive() {
    let products = catalog();
    let cheap = AttributeSpec::lt(Product::PRICE, 700);
    let pricey = AttributeSpec::gte(Product::PRICE, 700);
    assert_eq!(names(cheap.filter(&products)), ["Google Pixel"]);
    assert_eq!(names(pricey.filter(&products)), ["Apple"]);
}

#[test]
fn query_over_derived_entity() {
    let products = catalog();
    let query = Query::builder()
        .and_in(Product::COLOR, &[Color::Black, Color::Gray])
        .not_is(Product::SIZE, &Size::Large)
        .build();
    assert_eq!(names(query.filter(&products)), ["Google Pixel"]);
}
