use std::collections::HashSet;

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    parse::Parser, punctuated::Punctuated, Attribute, Error, Ident, ItemEnum, Meta, MetaList,
    Path, Result, Token, Type,
};

use tap::prelude::*;

use crate::{
    common::{duplicate_parameter, fill_empty_or_else, ident, str_value, Args, WrappedVariant},
    naming::{Style, STYLE_VALID_FORMS},
};

pub fn doit(args: TokenStream, item_enum: ItemEnum) -> Result<TokenStream> {
    let params = Params::try_from(Args::parse_terminated.parse2(args)?)?;
    let Config {
        tag,
        style,
        exhaustive,
    } = Config::new(params)?;

    let ItemEnum {
        attrs,
        vis,
        enum_token: _,
        ident,
        generics,
        brace_token: _,
        variants,
    } = &item_enum;

    if let Some(lt_token) = generics.lt_token {
        Err(Error::new_spanned(
            lt_token,
            "`asenum` does not support generic parameters",
        ))?
    }

    let mut debug = false;
    let attrs = attrs
        .iter()
        .filter_map(|attr| -> Option<Result<Attribute>> {
            let Meta::List(list) = &attr.meta else {
                return Some(Ok(attr.clone()));
            };
            if !list.path.is_ident("derive") {
                return Some(Ok(attr.clone()));
            }
            let paths = match Punctuated::<Path, Token![,]>::parse_terminated
                .parse2(list.tokens.clone())
            {
                Ok(paths) => paths,
                Err(err) => return Some(Err(err)),
            };
            let (debug_paths, kept): (Vec<_>, Vec<_>) = paths.into_iter().partition(|path| {
                path.segments
                    .last()
                    .is_some_and(|segment| segment.ident == "Debug")
            });
            debug |= !debug_paths.is_empty();
            (!kept.is_empty()).then(|| {
                Ok(Attribute {
                    meta: Meta::List(MetaList {
                        tokens: quote! { #(#kept),* },
                        ..list.clone()
                    }),
                    ..attr.clone()
                })
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cases = variants
        .iter()
        .map(|variant| Case::new(variant, style))
        .collect::<Result<Vec<_>>>()?;

    let mut seen = HashSet::new();
    for Case { id, .. } in &cases {
        if !seen.insert(id.to_string()) {
            Err(Error::new_spanned(id, "duplicate variant"))?
        }
    }

    let case_impls = cases.iter().map(
        |Case {
             id, ty, marker, ..
         }| {
            quote! {
                #[allow(non_camel_case_types)]
                struct #marker;
                impl ::asenum::Case<#tag> for #marker {
                    const TAG: #tag = #tag::#id;
                    type Payload = #ty;
                }
            }
        },
    );

    let methods = cases.iter().map(
        |Case {
             docs,
             ty,
             marker,
             constructor,
             accessor,
             ..
         }| {
            quote! {
                #(#docs)*
                #vis fn #constructor(value: #ty) -> Self {
                    Self(::asenum::AsEnum::new::<#marker>(value))
                }

                #(#docs)*
                #vis fn #accessor(
                    &self,
                ) -> ::core::result::Result<&#ty, ::asenum::TypeMismatch<#tag>> {
                    self.0.get::<#marker>()
                }
            }
        },
    );

    let coverage_check = if exhaustive {
        let ids = cases.iter().map(|case| &case.id);
        quote! {
            const _: fn(#tag) = |tag| match tag {
                #(#tag::#ids => {})*
            };
        }
    } else {
        quote!()
    };

    let debug_impl = if debug {
        quote! {
            impl ::core::fmt::Debug for #ident {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.debug_struct(::core::stringify!(#ident))
                        .field("tag", &self.0.tag())
                        .finish_non_exhaustive()
                }
            }
        }
    } else {
        quote!()
    };

    Ok(quote! {
        #(#attrs)*
        #vis struct #ident(::asenum::AsEnum<#tag>);

        const _: () = {
            #(#case_impls)*

            #[allow(non_snake_case)]
            impl #ident {
                #(#methods)*

                /// The entry of the tag enum this value was created as.
                #vis fn tag(&self) -> #tag {
                    self.0.tag()
                }
            }

            impl ::asenum::Tagged for #ident {
                type Tag = #tag;
                fn tag(&self) -> #tag {
                    self.0.tag()
                }
            }

            #debug_impl

            #coverage_check
        };
    })
}

/// A declared variant, with the names of everything generated for it.
struct Case {
    docs: Vec<Attribute>,
    id: Ident,
    ty: Type,
    marker: Ident,
    constructor: Ident,
    accessor: Ident,
}
impl Case {
    fn new(variant: &syn::Variant, default_style: Style) -> Result<Self> {
        let WrappedVariant { attrs, id, ty } = WrappedVariant::try_from(variant)?;

        let mut style = None;
        let mut docs = Vec::new();
        for attr in attrs {
            let path = attr.path();
            if path.is_ident("doc") {
                docs.push(attr);
            } else if path.is_ident("asenum") {
                let args = attr.parse_args_with(Args::parse_terminated)?;
                for arg in args {
                    match ident(&arg)?.to_string().as_str() {
                        "style" => fill_empty_or_else(
                            &mut style,
                            Style::try_from(&str_value(&arg, STYLE_VALID_FORMS)?)?,
                            |_, _| duplicate_parameter(&arg),
                        )?,
                        _ => Err(Error::new_spanned(
                            arg.path(),
                            "asenum: unrecognized variant parameter",
                        ))?,
                    }
                }
            } else {
                Err(Error::new_spanned(
                    attr,
                    "only `#[doc]` and `#[asenum(...)]` attributes are supported on variants",
                ))?
            }
        }

        let style = style.unwrap_or(default_style);
        Ok(Case {
            docs,
            marker: format_ident!("__AsEnumCase_{}", id),
            constructor: style.constructor(&id),
            accessor: style.accessor(&id),
            id,
            ty,
        })
    }
}

struct Config {
    tag: Path,
    style: Style,
    exhaustive: bool,
}
impl Config {
    fn new(
        Params {
            tag,
            style,
            partial,
        }: Params,
    ) -> Result<Self> {
        Ok(Self {
            tag: tag.ok_or_else(|| {
                Error::new(
                    Span::call_site(),
                    "missing `tag(PathTo::ExistingEnum)` parameter",
                )
            })?,
            style: style.unwrap_or_default(),
            exhaustive: !partial.unwrap_or_default(),
        })
    }
}

#[derive(Default)]
struct Params {
    tag: Option<Path>,
    style: Option<Style>,
    /// Allows the declaration to cover only some entries of the tag enum.
    partial: Option<bool>,
}

impl TryFrom<Args> for Params {
    type Error = Error;
    fn try_from(args: Args) -> std::result::Result<Self, Self::Error> {
        let mut params = Params::default();
        for arg in args {
            let ident = ident(&arg)?;
            match ident.to_string().as_str() {
                "tag" => {
                    const TAG_VALID_FORMS: &str = "valid form is `tag(PathTo::ExistingEnum)`";
                    let path = match &arg {
                        Meta::List(MetaList { tokens, .. }) => syn::parse2::<Path>(tokens.clone())
                            .map_err(|err| {
                                err.tap_mut(|err| {
                                    err.combine(Error::new_spanned(tokens, TAG_VALID_FORMS))
                                })
                            })?,
                        _ => Err(Error::new_spanned(&arg, TAG_VALID_FORMS))?,
                    };
                    fill_empty_or_else(&mut params.tag, path, |_, _| duplicate_parameter(&arg))?
                }
                "style" => {
                    let style = Style::try_from(&str_value(&arg, STYLE_VALID_FORMS)?)?;
                    fill_empty_or_else(&mut params.style, style, |_, _| {
                        duplicate_parameter(&arg)
                    })?
                }
                "partial" => {
                    if !matches!(arg, Meta::Path(_)) {
                        Err(Error::new_spanned(&arg, "valid form is `partial`"))?
                    }
                    fill_empty_or_else(&mut params.partial, true, |_, _| {
                        duplicate_parameter(&arg)
                    })?
                }
                _ => Err(Error::new_spanned(ident, "asenum: unrecognized parameter"))?,
            }
        }
        Ok(params)
    }
}
