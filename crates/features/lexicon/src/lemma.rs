use crate::backend::Backend;
use crate::service::ObjectService;
use scriba_domain::model::{Annotation, Glyphs, Lemma};
use scriba_mapping::{Mapper, ObjectDetails};
use std::ops::Deref;
use std::sync::Arc;

/// Passport path holding the bibliography as `;`-separated text.
pub const BIBLIOGRAPHY_PATH: &str = "bibliography.bibliographical_text_field";

/// Lemma retrieval plus the extractions the lemma detail page needs.
#[derive(Debug)]
pub struct LemmaService<B> {
    objects: ObjectService<Lemma, B>,
}

impl<B: Backend> LemmaService<B> {
    #[must_use]
    pub const fn new(backend: Arc<B>, mapper: Arc<Mapper>) -> Self {
        Self { objects: ObjectService::new(backend, mapper) }
    }
}

impl<B> LemmaService<B> {
    /// Related annotations that carry both a title and a text.
    #[must_use]
    pub fn extract_annotations(details: &ObjectDetails<Lemma>) -> Vec<&Annotation> {
        details.extract::<Annotation>()
    }

    /// Glyph sequences of all written forms that have one, in word order.
    #[must_use]
    pub fn extract_hieroglyphs(lemma: &Lemma) -> Vec<&Glyphs> {
        lemma.words.iter().map(|word| &word.glyphs).filter(|glyphs| !glyphs.is_empty()).collect()
    }

    /// Bibliography entries from the passport, split on `;`, trimmed, blanks dropped.
    #[must_use]
    pub fn extract_bibliography(lemma: &Lemma) -> Vec<String> {
        lemma
            .passport
            .leaves(BIBLIOGRAPHY_PATH)
            .into_iter()
            .flat_map(|text| text.split(';'))
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

impl<B> Deref for LemmaService<B> {
    type Target = ObjectService<Lemma, B>;

    fn deref(&self) -> &Self::Target {
        &self.objects
    }
}

impl<B> Clone for LemmaService<B> {
    fn clone(&self) -> Self {
        Self { objects: self.objects.clone() }
    }
}
