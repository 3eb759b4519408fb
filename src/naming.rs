use proc_macro2::Ident;
use quote::format_ident;
use syn::{Error, LitStr};
use tap::prelude::*;

/// Naming convention of the generated constructor and accessor of a variant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// `create_host` / `as_host`
    #[default]
    SnakeCase,
    /// `createHost` / `asHost`
    LowerCamelCase,
    /// `CreateHost` / `asHost`
    CamelCase,
}

pub const STYLE_VALID_FORMS: &str =
    r#"valid forms are `style = "snake_case"`, `style = "lowerCamelCase"`, or `style = "CamelCase"`"#;

impl TryFrom<&LitStr> for Style {
    type Error = Error;
    fn try_from(lit: &LitStr) -> std::result::Result<Self, Self::Error> {
        match lit.value().as_str() {
            "snake_case" => Ok(Style::SnakeCase),
            "lowerCamelCase" => Ok(Style::LowerCamelCase),
            "CamelCase" => Ok(Style::CamelCase),
            _ => Err(Error::new_spanned(lit, STYLE_VALID_FORMS)),
        }
    }
}

impl Style {
    pub fn constructor(self, variant: &Ident) -> Ident {
        let ident = match self {
            Style::SnakeCase => format_ident!("create_{}", snake_case(&variant.to_string())),
            Style::LowerCamelCase => format_ident!("create{}", variant),
            Style::CamelCase => format_ident!("Create{}", variant),
        };
        ident.tap_mut(|ident| ident.set_span(variant.span()))
    }

    pub fn accessor(self, variant: &Ident) -> Ident {
        let ident = match self {
            Style::SnakeCase => format_ident!("as_{}", snake_case(&variant.to_string())),
            Style::LowerCamelCase | Style::CamelCase => format_ident!("as{}", variant),
        };
        ident.tap_mut(|ident| ident.set_span(variant.span()))
    }
}

/// `HttpPort` -> `http_port`, `TLSConfig` -> `tls_config`, `Ipv4` -> `ipv4`
pub fn snake_case(name: &str) -> String {
    let name = name.strip_prefix("r#").unwrap_or(name);
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                None | Some('_') => false,
                Some(prev) if prev.is_lowercase() || prev.is_ascii_digit() => true,
                Some(prev) => prev.is_uppercase() && next.is_some_and(char::is_lowercase),
            };
            if boundary {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
