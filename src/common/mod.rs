use quote::{quote, ToTokens};
use syn::{
    punctuated::Punctuated, Attribute, Error, Expr, ExprLit, Fields, FieldsUnnamed, Ident, Lit,
    LitStr, Meta, MetaNameValue, Result, Token, Type, Variant,
};

pub type Args = Punctuated<Meta, Token![,]>;
pub fn ident(arg: &Meta) -> Result<&Ident> {
    let path = arg.path();
    path.get_ident()
        .ok_or_else(|| Error::new_spanned(path, "must be a bare identifier"))
}

/// Accepts `name = "literal"` and nothing else.
pub fn str_value(arg: &Meta, valid_forms: &str) -> Result<LitStr> {
    match arg {
        Meta::NameValue(MetaNameValue {
            value: Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            }),
            ..
        }) => Ok(s.clone()),
        _ => Err(Error::new_spanned(arg, valid_forms)),
    }
}

pub fn fill_empty_or_else<T>(
    opt: &mut Option<T>,
    new: T,
    err: impl FnOnce(&T, T) -> Error,
) -> Result<()> {
    match opt {
        Some(old) => Err(err(old, new)),
        None => {
            opt.replace(new);
            Ok(())
        }
    }
}

pub fn duplicate_parameter(new: impl ToTokens) -> Error {
    Error::new_spanned(new, "duplicate parameter")
}

/// A variant of the declaration, split into its name, its payload type and its attributes.
pub struct WrappedVariant {
    pub attrs: Vec<Attribute>,
    pub id: Ident,
    pub ty: Type,
}

impl TryFrom<&Variant> for WrappedVariant {
    type Error = Error;
    fn try_from(variant: &Variant) -> std::result::Result<Self, Self::Error> {
        if let Some((eq_token, discriminant)) = &variant.discriminant {
            Err(Error::new_spanned(
                quote!(#eq_token #discriminant),
                "explicit discriminants unsupported, the tag enum defines them",
            ))?
        }
        let id = variant.ident.clone();
        let ty = match &variant.fields {
            Fields::Named(named_fields) => Err(Error::new(
                named_fields.brace_token.span.join(),
                "named fields unsupported",
            ))?,
            Fields::Unnamed(FieldsUnnamed {
                unnamed,
                paren_token,
            }) => match unnamed.first() {
                Some(field) if unnamed.len() == 1 => field.ty.clone(),
                _ => Err(Error::new(
                    paren_token.span.join(),
                    "tuple-like variant must have exactly 1 field",
                ))?,
            },
            Fields::Unit => Err(Error::new_spanned(
                &variant.ident,
                "variant must carry a value, eg. `Host(String)`",
            ))?,
        };
        Ok(WrappedVariant {
            attrs: variant.attrs.clone(),
            id,
            ty,
        })
    }
}
