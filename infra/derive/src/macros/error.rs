use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Type, Variant};

/// What the expansion needs to know about a single error variant.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg_attrs: Vec<&'a Attribute>,
}

impl ErrorVariant<'_> {
    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }

    fn predicate_ident(&self) -> Ident {
        format_ident!("is_{}", to_snake_case(&self.ident.to_string()))
    }
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let ext_trait = format_ident!("{}Ext", name);

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("scriba_error can only be applied to enums"); };
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        match inspect_variant(variant) {
            Ok(meta) => variants.push(meta),
            Err(err) => return err,
        }
    }
    if let Some(err) = missing_context_error(&variants) {
        return err;
    }

    let derive_attr = missing_derives(&input);
    let ext_tokens = context_trait(name, &ext_trait, &variants);
    let from_tokens = variants.iter().filter_map(|v| source_conversion(name, &ext_trait, v));
    let internal_tokens = internal_conversions(name, &variants);
    let predicate_tokens = variant_predicates(name, &variants);

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derive_attr
        #input

        #ext_tokens
        #(#from_tokens)*
        #internal_tokens
        #predicate_tokens

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    }
}

fn inspect_variant(variant: &Variant) -> Result<ErrorVariant<'_>, TokenStream> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "scriba_error variants must use named fields (`source`, `message`, `context`)",
        )
        .to_compile_error());
    };

    let mut has_context = false;
    let mut source = None;
    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else { continue };
        if ident == "context" {
            if !is_cow_context(&field.ty) {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "context field must be Option<Cow<'static, str>>",
                )
                .to_compile_error());
            }
            has_context = true;
        } else if source.is_none() && (ident == "source" || has_attr(field, "source") || has_attr(field, "from")) {
            source = Some((ident, &field.ty));
        }
    }

    Ok(ErrorVariant {
        ident: &variant.ident,
        source,
        has_context,
        cfg_attrs: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
    })
}

fn missing_context_error(variants: &[ErrorVariant<'_>]) -> Option<TokenStream> {
    variants.iter().find(|v| v.source.is_some() && !v.has_context).map(|v| {
        syn::Error::new_spanned(
            v.ident,
            "scriba_error requires `context: Option<Cow<'static, str>>` next to a source field",
        )
        .to_compile_error()
    })
}

fn missing_derives(input: &DeriveInput) -> TokenStream {
    let present = derived_traits(&input.attrs);
    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !present.contains("Error") {
        derives.push(quote! { ::thiserror::Error });
    }
    if derives.is_empty() { quote! {} } else { quote! { #[derive(#(#derives),*)] } }
}

fn context_trait(name: &Ident, ext_trait: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let cfg_attrs = &v.cfg_attrs;
        let ident = v.ident;
        quote! { #(#cfg_attrs)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        pub trait #ext_trait<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext_trait<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #( #arms )*
                        _ => {}
                    }
                    err
                })
            }
        }
    }
}

fn source_conversion(
    name: &Ident,
    ext_trait: &Ident,
    variant: &ErrorVariant<'_>,
) -> Option<TokenStream> {
    if variant.is_internal() {
        return None;
    }
    let (field, ty) = variant.source?;
    let ident = variant.ident;
    let cfg_attrs = &variant.cfg_attrs;

    Some(quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
        }

        #(#cfg_attrs)*
        impl<T> #ext_trait<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_conversions(name: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let Some(internal) = variants.iter().find(|v| v.is_internal()) else {
        return quote! {};
    };
    let cfg_attrs = &internal.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None } }
        }
        #(#cfg_attrs)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::Internal { message: std::borrow::Cow::Owned(s), context: None } }
        }
    }
}

/// `is_<variant>()` helpers, so callers can branch on an error class without a full `match`.
fn variant_predicates(name: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let predicates = variants.iter().map(|v| {
        let cfg_attrs = &v.cfg_attrs;
        let ident = v.ident;
        let predicate = v.predicate_ident();
        quote! {
            #(#cfg_attrs)*
            #[must_use]
            pub const fn #predicate(&self) -> bool {
                matches!(self, #name::#ident { .. })
            }
        }
    });

    quote! {
        #[automatically_derived]
        impl #name {
            #(#predicates)*
        }
    }
}

fn has_attr(field: &syn::Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

pub(crate) fn derived_traits(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}

fn to_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Matches `Option<Cow<'static, str>>` by its last path segments.
fn is_cow_context(ty: &Type) -> bool {
    let Some(option) = last_segment(ty).filter(|seg| seg.ident == "Option") else {
        return false;
    };
    let Some(syn::GenericArgument::Type(inner)) = angle_args(option).and_then(|a| a.first()) else {
        return false;
    };
    let Some(cow) = last_segment(inner).filter(|seg| seg.ident == "Cow") else {
        return false;
    };
    let Some(args) = angle_args(cow) else {
        return false;
    };
    let mut args = args.iter();
    let Some(syn::GenericArgument::Lifetime(lt)) = args.next() else {
        return false;
    };
    let Some(syn::GenericArgument::Type(str_ty)) = args.next() else {
        return false;
    };
    lt.ident == "static" && last_segment(str_ty).is_some_and(|seg| seg.ident == "str")
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    let Type::Path(path) = ty else {
        return None;
    };
    path.path.segments.last()
}

fn angle_args(
    segment: &syn::PathSegment,
) -> Option<&syn::punctuated::Punctuated<syn::GenericArgument, syn::Token![,]>> {
    match &segment.arguments {
        syn::PathArguments::AngleBracketed(args) => Some(&args.args),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::to_snake_case;

    #[test]
    fn snake_cases_variant_names() {
        assert_eq!(to_snake_case("UnknownType"), "unknown_type");
        assert_eq!(to_snake_case("Internal"), "internal");
        assert_eq!(to_snake_case("NotFound"), "not_found");
    }
}
