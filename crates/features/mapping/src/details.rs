use crate::engine::Mapper;
use crate::error::MappingError;
use scriba_domain::dto::SingleDocumentWrapper;
use scriba_domain::model::{Complete, ModelClass, Object};
use std::collections::BTreeMap;
use tracing::debug;

/// Converted related objects: discriminant, then id, then object.
pub type RelatedObjects = BTreeMap<String, BTreeMap<String, Box<dyn Object>>>;

/// A primary object plus the related objects a detail response embedded with it.
///
/// `related` stays `None` when the response declared no relation block, so callers can tell
/// "not queried" apart from "queried, nothing found".
#[derive(Debug)]
pub struct ObjectDetails<T> {
    object: T,
    related: Option<RelatedObjects>,
}

impl<T: Object> ObjectDetails<T> {
    /// Assembles a container, dropping related entries that are the primary object itself.
    #[must_use]
    pub fn new(object: T, related: Option<RelatedObjects>) -> Self {
        let related = related.map(|mut groups| {
            if let Some(group) = groups.get_mut(object.eclass()) {
                group.remove(object.id());
            }
            groups
        });
        Self { object, related }
    }

    /// Converts the primary document and every related document of a detail response.
    ///
    /// # Errors
    /// Any conversion error; the container is only built when every document converts.
    pub fn from_wrapper(
        mapper: &Mapper,
        wrapper: &SingleDocumentWrapper,
    ) -> Result<Self, MappingError>
    where
        T: ModelClass,
    {
        let object = mapper.convert_as::<T>(&wrapper.doc)?;

        let related = match &wrapper.related {
            Some(block) => {
                let mut groups = RelatedObjects::new();
                for doc in block.values().flat_map(BTreeMap::values) {
                    let related = mapper.convert(doc)?;
                    groups
                        .entry(related.eclass().to_owned())
                        .or_default()
                        .insert(related.id().to_owned(), related);
                }
                Some(groups)
            },
            None => None,
        };

        let details = Self::new(object, related);
        debug!(
            eclass = T::ECLASS,
            id = details.object.id(),
            related = details.related_count(),
            "Assembled object details"
        );
        Ok(details)
    }

    #[must_use]
    pub const fn object(&self) -> &T {
        &self.object
    }

    #[must_use]
    pub fn into_object(self) -> T {
        self.object
    }

    /// Whether the response declared a relation block at all.
    #[must_use]
    pub const fn has_relations(&self) -> bool {
        self.related.is_some()
    }

    #[must_use]
    pub const fn related_objects(&self) -> Option<&RelatedObjects> {
        self.related.as_ref()
    }

    /// Related objects with the given discriminant, ordered by id.
    ///
    /// `None` when no relation block was declared; an empty list when it was, but held
    /// nothing of this discriminant.
    #[must_use]
    pub fn related(&self, eclass: &str) -> Option<Vec<&dyn Object>> {
        let groups = self.related.as_ref()?;
        let objects = groups.get(eclass).map(|group| group.values().map(Box::as_ref).collect::<Vec<_>>());
        Some(objects.unwrap_or_default())
    }

    /// Related objects whose runtime type is `R`.
    #[must_use]
    pub fn related_of<R: ModelClass>(&self) -> Option<Vec<&R>> {
        let groups = self.related.as_ref()?;
        let objects = groups
            .get(R::ECLASS)
            .map(|group| group.values().filter_map(|object| object.downcast_ref::<R>()).collect::<Vec<_>>());
        Some(objects.unwrap_or_default())
    }

    /// Related objects of type `R` that pass `R`'s completeness check; the rest are skipped.
    #[must_use]
    pub fn extract<R: ModelClass + Complete>(&self) -> Vec<&R> {
        self.related_of::<R>()
            .unwrap_or_default()
            .into_iter()
            .filter(|object| object.is_complete())
            .collect()
    }

    /// Number of related objects across all discriminants.
    #[must_use]
    pub fn related_count(&self) -> usize {
        self.related.as_ref().map_or(0, |groups| groups.values().map(BTreeMap::len).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriba_domain::model::{Annotation, Lemma};

    fn lemma(id: &str) -> Lemma {
        Lemma { id: id.to_owned(), ..Lemma::default() }
    }

    fn boxed(lemma: Lemma) -> Box<dyn Object> {
        Box::new(lemma)
    }

    fn annotation(id: &str, name: Option<&str>, body: Option<&str>) -> Box<dyn Object> {
        Box::new(Annotation {
            id: id.to_owned(),
            name: name.map(str::to_owned),
            body: body.map(str::to_owned),
            ..Annotation::default()
        })
    }

    fn group(objects: Vec<Box<dyn Object>>) -> BTreeMap<String, Box<dyn Object>> {
        objects.into_iter().map(|object| (object.id().to_owned(), object)).collect()
    }

    #[test]
    fn missing_block_and_empty_group_differ() {
        let without = ObjectDetails::new(lemma("1"), None);
        assert!(without.related("BTSAnnotation").is_none());
        assert!(!without.has_relations());

        let declared = ObjectDetails::new(lemma("1"), Some(RelatedObjects::new()));
        assert!(declared.related("BTSAnnotation").is_some_and(|related| related.is_empty()));
        assert!(declared.extract::<Annotation>().is_empty());
    }

    #[test]
    fn extract_keeps_only_complete_objects_of_the_type() {
        let mut related = RelatedObjects::new();
        related.insert(
            "BTSAnnotation".to_owned(),
            group(vec![
                annotation("ann1", Some("a"), Some("b")),
                annotation("ann2", Some("a"), None),
                boxed(lemma("other")),
            ]),
        );
        let details = ObjectDetails::new(lemma("1"), Some(related));

        let ids: Vec<_> = details.extract::<Annotation>().into_iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["ann1"]);
        assert_eq!(details.related_count(), 3);
    }

    #[test]
    fn primary_object_is_not_its_own_relation() {
        let mut related = RelatedObjects::new();
        related.insert("BTSLemmaEntry".to_owned(), group(vec![boxed(lemma("1")), boxed(lemma("2"))]));
        let details = ObjectDetails::new(lemma("1"), Some(related));

        let ids: Vec<_> = details
            .related_of::<Lemma>()
            .expect("declared")
            .into_iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, ["2"]);
    }
}
