//! Attribute parsing for the `Attributes` and `AttributeEnum` derives.
//!
//! Parses `#[attr(...)]` on struct fields and enum variants.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

/// The value type a field is exposed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// `#[attr(String)]`
    String,
    /// `#[attr(Number)]`
    Number,
    /// `#[attr(Enum)]`
    Enum,
    /// `#[attr(Bool)]`
    Bool,
}

impl AttrKind {
    fn parse_name(name: &str, span: Span) -> Result<Self> {
        match name {
            "String" | "string" => Ok(AttrKind::String),
            "Number" | "number" => Ok(AttrKind::Number),
            "Enum" | "enum" | "enumeration" => Ok(AttrKind::Enum),
            "Bool" | "bool" | "boolean" => Ok(AttrKind::Bool),
            other => Err(Error::new(
                span,
                format!(
                    "unknown attribute type: '{}'. Expected one of: String, Number, Enum, Bool",
                    other
                ),
            )),
        }
    }
}

/// Options from one `#[attr(...)]`.
#[derive(Debug, Clone)]
pub struct AttrOptions {
    /// Exposed value type, if any.
    pub kind: Option<AttrKind>,
    /// `#[attr(skip)]`
    pub skip: bool,
    /// `#[attr(optional)]`: the field is an `Option<_>`.
    pub optional: bool,
    /// `rename = "..."`
    pub rename: Option<String>,
    /// Where the type was declared, for error reporting.
    pub span: Span,
}

impl Default for AttrOptions {
    fn default() -> Self {
        AttrOptions {
            kind: None,
            skip: false,
            optional: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

fn string_value(value: &syn::Expr, what: &str) -> Result<syn::LitStr> {
    match value {
        syn::Expr::Lit(syn::ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.clone()),
        other => Err(Error::new(
            other.span(),
            format!("{what} must be a string literal"),
        )),
    }
}

impl Parse for AttrOptions {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut options = AttrOptions::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => options.skip = true,
                Meta::Path(p) if p.is_ident("optional") => options.optional = true,
                Meta::Path(p) => {
                    let ident: &Ident = p.get_ident().ok_or_else(|| {
                        Error::new(
                            p.span(),
                            "expected attribute type: String, Number, Enum, Bool, skip or optional",
                        )
                    })?;
                    options.kind = Some(AttrKind::parse_name(&ident.to_string(), ident.span())?);
                    options.span = ident.span();
                }
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    options.rename = Some(string_value(&nv.value, "rename")?.value());
                }
                Meta::NameValue(nv) if nv.path.is_ident("ty") => {
                    let s = string_value(&nv.value, "ty")?;
                    options.kind = Some(AttrKind::parse_name(&s.value(), s.span())?);
                    options.span = s.span();
                }
                Meta::NameValue(nv) => {
                    return Err(Error::new(
                        nv.path.span(),
                        "unknown option. Expected: rename or ty",
                    ));
                }
                Meta::List(list) => {
                    return Err(Error::new(
                        list.span(),
                        "unexpected list. Expected: String, Number, Enum, Bool, skip, optional, rename = \"...\" or ty = \"...\"",
                    ));
                }
            }
        }

        Ok(options)
    }
}

/// Extracts `#[attr(...)]` from a field's or variant's attributes.
pub fn parse_attr_options(attrs: &[Attribute]) -> Result<AttrOptions> {
    for attr in attrs {
        if attr.path().is_ident("attr") {
            return attr.parse_args::<AttrOptions>();
        }
    }
    Ok(AttrOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: &str) -> Result<AttrOptions> {
        syn::parse_str::<AttrOptions>(tokens)
    }

    #[test]
    fn kinds() {
        assert_eq!(parse("String").unwrap().kind, Some(AttrKind::String));
        assert_eq!(parse("Number").unwrap().kind, Some(AttrKind::Number));
        assert_eq!(parse("Enum").unwrap().kind, Some(AttrKind::Enum));
        assert_eq!(parse("Bool").unwrap().kind, Some(AttrKind::Bool));
        assert_eq!(parse("boolean").unwrap().kind, Some(AttrKind::Bool));
    }

    #[test]
    fn ty_for_keywords() {
        assert_eq!(parse(r#"ty = "enum""#).unwrap().kind, Some(AttrKind::Enum));
        assert_eq!(parse(r#"ty = "bool""#).unwrap().kind, Some(AttrKind::Bool));
    }

    #[test]
    fn flags() {
        let options = parse("skip").unwrap();
        assert!(options.skip);
        assert_eq!(options.kind, None);

        let options = parse("Number, optional").unwrap();
        assert!(options.optional);
        assert_eq!(options.kind, Some(AttrKind::Number));
    }

    #[test]
    fn rename() {
        let options = parse(r#"String, rename = "title""#).unwrap();
        assert_eq!(options.rename.as_deref(), Some("title"));
    }

    #[test]
    fn errors() {
        let err = parse("Timestamp").unwrap_err();
        assert!(err.to_string().contains("unknown attribute type"));

        assert!(parse("rename = 3").is_err());
        assert!(parse(r#"alias = "x""#).is_err());
        assert!(parse("String(x)").is_err());
    }
}
