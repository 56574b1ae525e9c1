//! Domain objects and the traits that tie them to backend discriminants.
//!
//! Every type the backend can send as a top-level document implements [`ModelClass`] through
//! the `#[model_class(eclass = "...")]` attribute. Conversion produces `Box<dyn Object>`, which
//! callers downcast to the concrete model with [`downcast_ref`](trait.Object.html#method.downcast_ref)
//! or [`downcast`](trait.Object.html#method.downcast).

mod annotation;
mod common;
mod glyphs;
mod lemma;
mod reference;
mod thesaurus;

pub use annotation::Annotation;
pub use common::{EditorInfo, Passport, Synonym};
pub use glyphs::{Glyph, Glyphs, Joiner};
pub use lemma::{Lemma, Word};
pub use reference::{ExternalReference, ExternalReferences};
pub use thesaurus::ThsEntry;

use serde::de::DeserializeOwned;
use std::any::Any;
use std::fmt::Debug;

/// A converted domain object, independent of its concrete type.
pub trait Object: Any + Debug + Send + Sync {
    fn id(&self) -> &str;

    /// The discriminant this object was built from.
    fn eclass(&self) -> &'static str;

    fn name(&self) -> Option<&str>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send>;
}

impl dyn Object {
    /// Borrows the object as `T` if that is its runtime type.
    #[must_use]
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Takes the object as `T`.
    ///
    /// # Errors
    /// Hands the box back as `dyn Any` when the runtime type is not `T`.
    pub fn downcast<T: Object>(self: Box<Self>) -> Result<T, Box<dyn Any + Send>> {
        self.into_any().downcast::<T>().map(|object| *object)
    }
}

/// A domain type constructible from backend data, declaring exactly one discriminant.
pub trait ModelClass: Object + DeserializeOwned + Sized {
    const ECLASS: &'static str;
}

/// Completeness predicate applied when related objects are extracted for display.
///
/// Objects failing it are filtered out silently.
pub trait Complete {
    fn is_complete(&self) -> bool;
}

pub(crate) fn non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}
