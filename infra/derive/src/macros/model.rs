use crate::macros::error::derived_traits;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::{Fields, ItemStruct, Lit, LitStr, Meta};

/// Expands the `#[model_class(eclass = "...")]` attribute macro.
///
/// Injects the derives every model needs for structural copy (`Debug`, `Clone`, `Default`,
/// `PartialEq`, `Serialize`, `Deserialize`), a camelCase/default serde policy unless the
/// struct brings its own `#[serde(...)]`, and the `Object` + `ModelClass` impls.
pub fn expand_model_class(args: TokenStream, input: ItemStruct) -> TokenStream {
    let eclass = match parse_eclass(args, &input) {
        Ok(lit) => lit,
        Err(err) => return err,
    };
    let Fields::Named(fields) = &input.fields else {
        return syn::Error::new_spanned(&input.ident, "model_class requires a struct with named fields")
            .to_compile_error();
    };

    let has_field = |wanted: &str| {
        fields.named.iter().any(|f| f.ident.as_ref().is_some_and(|ident| ident == wanted))
    };
    if !has_field("id") {
        return syn::Error::new_spanned(&input.ident, "model_class requires an `id: String` field")
            .to_compile_error();
    }
    let name_body = if has_field("name") {
        quote! { self.name.as_deref() }
    } else {
        quote! { None }
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let derive_attr = derive_attr(&input);
    let serde_attr = if input.attrs.iter().any(|attr| attr.path().is_ident("serde")) {
        quote! {}
    } else {
        quote! { #[serde(default, rename_all = "camelCase")] }
    };

    quote! {
        #derive_attr
        #serde_attr
        #input

        #[automatically_derived]
        impl #impl_generics ::scriba_domain::model::Object for #name #ty_generics #where_clause {
            fn id(&self) -> &str {
                &self.id
            }

            fn eclass(&self) -> &'static str {
                #eclass
            }

            fn name(&self) -> Option<&str> {
                #name_body
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn ::std::any::Any + Send> {
                self
            }
        }

        #[automatically_derived]
        impl #impl_generics ::scriba_domain::model::ModelClass for #name #ty_generics #where_clause {
            const ECLASS: &'static str = #eclass;
        }
    }
}

fn derive_attr(input: &ItemStruct) -> TokenStream {
    let present = derived_traits(&input.attrs);
    let wanted = [
        ("Debug", quote! { Debug }),
        ("Clone", quote! { Clone }),
        ("Default", quote! { Default }),
        ("PartialEq", quote! { PartialEq }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ];
    let missing: Vec<_> = wanted
        .into_iter()
        .filter(|(label, _)| !present.contains(*label))
        .map(|(_, tokens)| tokens)
        .collect();

    if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } }
}

fn parse_eclass(args: TokenStream, input: &ItemStruct) -> Result<LitStr, TokenStream> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;

    let mut eclass: Option<LitStr> = None;
    for meta in metas {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(meta, "Expected `eclass = \"...\"`").to_compile_error());
        };
        if !name_value.path.is_ident("eclass") {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "Only `eclass = \"...\"` is supported",
            )
            .to_compile_error());
        }
        if eclass.is_some() {
            return Err(syn::Error::new_spanned(name_value, "Duplicate `eclass = \"...\"` argument")
                .to_compile_error());
        }
        let syn::Expr::Lit(syn::ExprLit { lit: Lit::Str(lit), .. }) = &name_value.value else {
            return Err(syn::Error::new_spanned(
                &name_value.value,
                "Expected string literal for `eclass = \"...\"`",
            )
            .to_compile_error());
        };
        eclass = Some(lit.clone());
    }

    eclass.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "model_class requires a discriminant: `#[model_class(eclass = \"...\")]`",
        )
        .to_compile_error()
    })
}
