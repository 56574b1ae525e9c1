//! Registration list and type maps for the lexicon models.

use crate::converters::{ExternalReferenceConverter, GlyphConverter};
use crate::engine::{Mapper, TypeMap};
use crate::error::MappingError;
use crate::registry::ModelType;
use scriba_domain::config::ReferencesConfig;
use scriba_domain::model::{Annotation, Lemma, ThsEntry};

/// Every model type the front end can build from backend documents.
#[must_use]
pub fn model_types() -> [ModelType; 3] {
    [ModelType::of::<Annotation>(), ModelType::of::<Lemma>(), ModelType::of::<ThsEntry>()]
}

/// Builds the mapper for the lexicon models.
///
/// # Errors
/// Returns [`MappingError::Registration`] if the registration list or a type map is invalid.
pub fn lexicon_mapper(references: &ReferencesConfig) -> Result<Mapper, MappingError> {
    let references = ExternalReferenceConverter::new(references.clone());

    Mapper::builder()
        .types(model_types())
        .map::<Annotation>(TypeMap::new().rename("editors", "editedBy"))
        .map::<Lemma>(
            TypeMap::new()
                .rename("editors", "editedBy")
                .convert("externalReferences", "externalReferences", references.clone())
                .nested("words", TypeMap::new().convert("glyphs", "glyphs", GlyphConverter)),
        )
        .map::<ThsEntry>(
            TypeMap::new()
                .rename("editors", "editedBy")
                .convert("externalReferences", "externalReferences", references),
        )
        .build()
}
