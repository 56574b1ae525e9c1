#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! * [`scriba_error`] turns an enum into a `thiserror` error with context helpers.
//! * [`model_class`] declares the discriminant of a domain model and wires it into the
//!   `Object`/`ModelClass` traits of `scriba-domain`.
//!
//! Examples are `ignore`d here because the generated code refers to crates that depend on
//! this one; see the tests of `scriba-domain` and `scriba-mapping` for compiled usage.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for defining crate-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling the `?` operator for upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * **Predicates**: One `is_<variant>()` method per variant.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants with a source must also carry `context: Option<Cow<'static, str>>`.
/// 3. Only one error enum per module: the macro emits a module-level `format_context` helper.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[scriba_derive::scriba_error]
/// pub enum MappingError {
///     #[error("Malformed transfer object{}: {source}", format_context(.context))]
///     Malformed { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal mapping error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<serde_json::Value, MappingError> {
///     serde_json::from_str(raw).context("Parsing transfer object")
/// }
/// ```
#[proc_macro_attribute]
pub fn scriba_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Declares a domain model and the backend discriminant ("eclass") it represents.
///
/// The struct must have named fields, including `id: String`. An optional
/// `name: Option<String>` field is exposed through `Object::name`.
///
/// # Generated Items
///
/// * Missing derives among `Debug`, `Clone`, `Default`, `PartialEq`, `Serialize`, `Deserialize`.
/// * `#[serde(default, rename_all = "camelCase")]` unless the struct has its own serde attribute,
///   so that absent transfer fields fall back to zero values.
/// * `impl scriba_domain::model::Object` and `impl scriba_domain::model::ModelClass`.
///
/// # Errors
///
/// Emits a compile-time error if the `eclass` argument is missing, duplicated or not a string
/// literal, or if the struct has no `id` field.
///
/// # Example
///
/// ```rust,ignore
/// use scriba_derive::model_class;
///
/// #[model_class(eclass = "BTSAnnotation")]
/// pub struct Annotation {
///     pub id: String,
///     pub name: Option<String>,
///     pub body: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn model_class(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::model::expand_model_class(args.into(), input).into()
}
