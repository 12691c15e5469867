//! Implementation of `#[derive(Attributes)]` and `#[derive(AttributeEnum)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Ident, LitStr, Result};

use super::attrs::{parse_attr_options, AttrKind};

/// Generates the `Attributes` impl and attribute-name constants.
pub fn attributes_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Attributes can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Attributes can only be derived for structs",
            ))
        }
    };

    let mut match_arms: Vec<TokenStream> = Vec::new();
    let mut constants: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let options = parse_attr_options(&field.attrs)?;
        if options.skip {
            continue;
        }
        let kind = match options.kind {
            Some(kind) => kind,
            None if options.optional || options.rename.is_some() => {
                return Err(Error::new(
                    field.span(),
                    "missing attribute type: add String, Number, Enum or Bool",
                ))
            }
            None => continue,
        };

        let attribute_name = options.rename.unwrap_or_else(|| field_name.to_string());
        let const_name = syn::parse_str::<Ident>(&to_screaming_snake_case(&attribute_name))
            .map_err(|_| {
                Error::new(
                    field.span(),
                    format!("attribute name `{attribute_name}` is not a valid identifier"),
                )
            })?;

        constants.push(quote! {
            /// Attribute name constant for attribute specifications.
            pub const #const_name: &'static str = #attribute_name;
        });

        let value_expr = if options.optional {
            let inner = value_tokens(kind, quote! { v }, true);
            quote! {
                match &self.#field_name {
                    ::core::option::Option::Some(v) => #inner,
                    ::core::option::Option::None => ::sieve_spec::Value::None,
                }
            }
        } else {
            value_tokens(kind, quote! { self.#field_name }, false)
        };

        match_arms.push(quote! {
            #attribute_name => #value_expr,
        });
    }

    Ok(quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#constants)*
        }

        impl #impl_generics ::sieve_spec::Attributes for #struct_name #ty_generics #where_clause {
            fn attribute(&self, name: &str) -> ::sieve_spec::Value<'_> {
                match name {
                    #(#match_arms)*
                    _ => ::sieve_spec::Value::None,
                }
            }
        }
    })
}

/// Builds the `Value` expression for one field.
///
/// `by_ref` is set when `place` is already a reference (the `Some(v)` binding
/// of an optional field).
fn value_tokens(kind: AttrKind, place: TokenStream, by_ref: bool) -> TokenStream {
    match (kind, by_ref) {
        (AttrKind::String, false) => quote! { ::sieve_spec::Value::String(&#place) },
        (AttrKind::String, true) => quote! { ::sieve_spec::Value::String(#place) },
        (AttrKind::Number, false) => {
            quote! { ::sieve_spec::Value::Number(::sieve_spec::Number::from(#place)) }
        }
        (AttrKind::Number, true) => {
            quote! { ::sieve_spec::Value::Number(::sieve_spec::Number::from(*#place)) }
        }
        (AttrKind::Enum, false) => quote! {
            ::sieve_spec::Value::Enum(::sieve_spec::AttributeEnum::discriminant(&#place))
        },
        (AttrKind::Enum, true) => quote! {
            ::sieve_spec::Value::Enum(::sieve_spec::AttributeEnum::discriminant(#place))
        },
        (AttrKind::Bool, false) => quote! { ::sieve_spec::Value::Bool(#place) },
        (AttrKind::Bool, true) => quote! { ::sieve_spec::Value::Bool(*#place) },
    }
}

/// Generates the `AttributeEnum` impl for a fieldless enum.
///
/// Discriminants follow declaration order starting at zero.
pub fn attribute_enum_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let enum_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(Error::new(
                input.span(),
                "AttributeEnum can only be derived for enums",
            ))
        }
    };

    let mut discriminant_arms: Vec<TokenStream> = Vec::new();
    let mut name_arms: Vec<TokenStream> = Vec::new();

    for (index, variant) in variants.iter().enumerate() {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new(
                variant.span(),
                "AttributeEnum can only be derived for enums without fields",
            ));
        }

        let options = parse_attr_options(&variant.attrs)?;
        let ident = &variant.ident;
        let index = u32::try_from(index)
            .map_err(|_| Error::new(variant.span(), "too many variants"))?;
        let name = LitStr::new(
            &options.rename.unwrap_or_else(|| ident.to_string()),
            ident.span(),
        );

        discriminant_arms.push(quote! { Self::#ident => #index, });
        name_arms.push(quote! { Self::#ident => #name, });
    }

    if discriminant_arms.is_empty() {
        return Ok(quote! {
            impl #impl_generics ::sieve_spec::AttributeEnum for #enum_name #ty_generics #where_clause {
                fn discriminant(&self) -> u32 {
                    match *self {}
                }

                fn variant_name(&self) -> &'static str {
                    match *self {}
                }
            }
        });
    }

    Ok(quote! {
        impl #impl_generics ::sieve_spec::AttributeEnum for #enum_name #ty_generics #where_clause {
            fn discriminant(&self) -> u32 {
                match self {
                    #(#discriminant_arms)*
                }
            }

            fn variant_name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }
    })
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = c.is_alphanumeric();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("name"), "NAME");
        assert_eq!(to_screaming_snake_case("unit_price"), "UNIT_PRICE");
        assert_eq!(to_screaming_snake_case("unitPrice"), "UNIT_PRICE");
        assert_eq!(to_screaming_snake_case("in-stock"), "IN_STOCK");
    }

    #[test]
    fn rejects_tuple_structs() {
        let input: DeriveInput = syn::parse_quote! { struct Pair(u8, u8); };
        let err = attributes_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn rejects_untyped_optional_field() {
        let input: DeriveInput = syn::parse_quote! {
            struct Item {
                #[attr(optional)]
                note: Option<String>,
            }
        };
        let err = attributes_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("missing attribute type"));
    }

    #[test]
    fn rejects_names_that_are_not_identifiers() {
        for name in ["unit price", "2fast", ""] {
            let input: DeriveInput = syn::parse_quote! {
                struct Item {
                    #[attr(Number, rename = #name)]
                    price: f64,
                }
            };
            let err = attributes_derive_impl(input).unwrap_err();
            assert!(err.to_string().contains("is not a valid identifier"), "{name}");
        }
    }

    #[test]
    fn generates_constants_and_arms() {
        let input: DeriveInput = syn::parse_quote! {
            struct Item {
                #[attr(String, rename = "title")]
                name: String,
                #[attr(Number, optional)]
                price: Option<f64>,
                internal: u64,
            }
        };
        let tokens = attributes_derive_impl(input).unwrap().to_string();
        assert!(tokens.contains("TITLE"));
        assert!(tokens.contains("PRICE"));
        assert!(!tokens.contains("INTERNAL"));
        assert!(tokens.contains("\"title\""));
    }

    #[test]
    fn rejects_data_carrying_variants() {
        let input: DeriveInput = syn::parse_quote! {
            enum Shape { Dot, Circle(f64) }
        };
        let err = attribute_enum_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("without fields"));
    }

    #[test]
    fn enum_derive_on_struct_fails() {
        let input: DeriveInput = syn::parse_quote! { struct NotAnEnum; };
        assert!(attribute_enum_derive_impl(input).is_err());
    }
}
