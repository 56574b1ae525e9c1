//! Conversion engine: transfer objects in, domain objects out.
//!
//! Conversion works on a JSON copy of the transfer object:
//! 1. the discriminant is resolved through the [`TypeRegistry`];
//! 2. every nested record carrying a discriminant with a [`TypeMap`] is prepared with it,
//!    innermost first, and the top-level record last;
//! 3. the prepared record is deserialized into the model type (structural copy by field name,
//!    absent fields keep their zero value).

use crate::converters::{ErasedConverter, FieldConverter};
use crate::error::{MappingError, MappingErrorExt};
use crate::registry::{ModelType, TypeRegistry};
use fxhash::{FxHashMap, FxHashSet};
use scriba_domain::dto::DocumentDto;
use scriba_domain::model::{ModelClass, Object};
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

const ECLASS_KEY: &str = "eclass";

enum Binding {
    /// Moves `source` to `target`, unchanged.
    Rename { source: &'static str, target: &'static str },
    Convert { source: &'static str, target: &'static str, converter: Box<dyn ErasedConverter> },
    /// Applies a map to an embedded record, or to every record of an embedded list.
    Nested { field: &'static str, map: TypeMap },
}

impl Binding {
    const fn target(&self) -> &'static str {
        match self {
            Self::Rename { target, .. } | Self::Convert { target, .. } => *target,
            Self::Nested { field, .. } => *field,
        }
    }

    fn apply(&self, record: &mut Map<String, Value>) -> Result<(), serde_json::Error> {
        match self {
            Self::Rename { source, target } => {
                if let Some(value) = record.remove(*source) {
                    record.insert((*target).to_owned(), value);
                }
            },
            Self::Convert { source, target, converter } => {
                let value = converter.apply(record.get(*source))?;
                record.insert((*target).to_owned(), value);
            },
            Self::Nested { field, map } => match record.get_mut(*field) {
                Some(Value::Object(inner)) => map.apply(inner)?,
                Some(Value::Array(items)) => {
                    for item in items {
                        if let Value::Object(inner) = item {
                            map.apply(inner)?;
                        }
                    }
                },
                _ => {},
            },
        }
        Ok(())
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rename { source, target } => {
                f.debug_struct("Rename").field("source", source).field("target", target).finish()
            },
            Self::Convert { source, target, converter } => f
                .debug_struct("Convert")
                .field("source", source)
                .field("target", target)
                .field("converter", &converter.type_name())
                .finish(),
            Self::Nested { field, map } => {
                f.debug_struct("Nested").field("field", field).field("map", map).finish()
            },
        }
    }
}

/// Field bindings for one model type, keyed by JSON (camelCase) field names.
///
/// Fields without a binding are copied by name. At most one binding may target a field.
#[derive(Debug, Default)]
pub struct TypeMap {
    bindings: Vec<Binding>,
}

impl TypeMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rename(mut self, source: &'static str, target: &'static str) -> Self {
        self.bindings.push(Binding::Rename { source, target });
        self
    }

    /// Replaces `target` with `converter`'s output for the `source` field.
    #[must_use]
    pub fn convert<C: FieldConverter>(
        mut self,
        source: &'static str,
        target: &'static str,
        converter: C,
    ) -> Self {
        self.bindings.push(Binding::Convert { source, target, converter: Box::new(converter) });
        self
    }

    #[must_use]
    pub fn nested(mut self, field: &'static str, map: Self) -> Self {
        self.bindings.push(Binding::Nested { field, map });
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn check(&self, eclass: &str) -> Result<(), MappingError> {
        let mut targets = FxHashSet::default();
        for binding in &self.bindings {
            if !targets.insert(binding.target()) {
                return Err(MappingError::registration(format!(
                    "field '{}' of {eclass} has more than one binding",
                    binding.target()
                )));
            }
            if let Binding::Nested { field, map } = binding {
                map.check(&format!("{eclass}.{field}"))?;
            }
        }
        Ok(())
    }

    fn apply(&self, record: &mut Map<String, Value>) -> Result<(), serde_json::Error> {
        self.bindings.iter().try_for_each(|binding| binding.apply(record))
    }
}

/// Immutable registry plus type maps. Build once, share behind an `Arc`.
#[derive(Debug)]
pub struct Mapper {
    registry: TypeRegistry,
    maps: FxHashMap<&'static str, TypeMap>,
}

impl Mapper {
    #[must_use]
    pub fn builder() -> MapperBuilder {
        MapperBuilder::default()
    }

    #[must_use]
    pub const fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Converts a transfer object into the model type registered for its discriminant.
    ///
    /// # Errors
    /// * [`MappingError::UnknownType`] if the discriminant is not registered.
    /// * [`MappingError::Malformed`] if a field has the wrong shape for its model field.
    pub fn convert(&self, doc: &DocumentDto) -> Result<Box<dyn Object>, MappingError> {
        let model = self.registry.lookup(doc.eclass())?;
        debug!(eclass = doc.eclass(), id = doc.id(), model = model.type_name(), "Converting document");

        let record = self.prepare(doc)?;
        model.build(record).context(describe(doc))
    }

    /// Converts a transfer object into `T`.
    ///
    /// # Errors
    /// * [`MappingError::UnknownType`] if the discriminant is not registered.
    /// * [`MappingError::TypeMismatch`] if the discriminant belongs to another model type.
    /// * [`MappingError::Malformed`] if a field has the wrong shape for its model field.
    pub fn convert_as<T: ModelClass>(&self, doc: &DocumentDto) -> Result<T, MappingError> {
        let model = self.registry.lookup(doc.eclass())?;
        if !model.is::<T>() {
            return Err(MappingError::TypeMismatch {
                expected: T::ECLASS,
                found: doc.eclass().to_owned(),
                context: Some(describe(doc).into()),
            });
        }
        debug!(eclass = doc.eclass(), id = doc.id(), model = model.type_name(), "Converting document");

        let record = self.prepare(doc)?;
        serde_json::from_value::<T>(record).context(describe(doc))
    }

    /// Converts every document in order; the first failure aborts the whole batch.
    ///
    /// # Errors
    /// The first error returned by [`Mapper::convert`].
    pub fn convert_all(&self, docs: &[DocumentDto]) -> Result<Vec<Box<dyn Object>>, MappingError> {
        docs.iter().map(|doc| self.convert(doc)).collect()
    }

    fn prepare(&self, doc: &DocumentDto) -> Result<Value, MappingError> {
        let mut record = doc.to_value();
        self.prepare_value(&mut record).context(describe(doc))?;
        Ok(record)
    }

    fn prepare_value(&self, value: &mut Value) -> Result<(), serde_json::Error> {
        match value {
            Value::Object(record) => {
                for child in record.values_mut() {
                    self.prepare_value(child)?;
                }
                let map = record.get(ECLASS_KEY).and_then(Value::as_str).and_then(|e| self.maps.get(e));
                if let Some(map) = map {
                    map.apply(record)?;
                }
            },
            Value::Array(items) => {
                for item in items {
                    self.prepare_value(item)?;
                }
            },
            _ => {},
        }
        Ok(())
    }
}

fn describe(doc: &DocumentDto) -> String {
    format!("{} {}", doc.eclass(), doc.id())
}

/// Collects model types and type maps for a [`Mapper`].
#[derive(Debug, Default)]
pub struct MapperBuilder {
    types: Vec<ModelType>,
    maps: Vec<(&'static str, TypeMap)>,
}

impl MapperBuilder {
    #[must_use]
    pub fn register<T: ModelClass>(self) -> Self {
        self.register_type(ModelType::of::<T>())
    }

    #[must_use]
    pub fn register_type(mut self, model: ModelType) -> Self {
        self.types.push(model);
        self
    }

    #[must_use]
    pub fn types(mut self, types: impl IntoIterator<Item = ModelType>) -> Self {
        self.types.extend(types);
        self
    }

    /// Binds `map` to `T`'s discriminant.
    #[must_use]
    pub fn map<T: ModelClass>(mut self, map: TypeMap) -> Self {
        self.maps.push((T::ECLASS, map));
        self
    }

    /// # Errors
    /// Returns [`MappingError::Registration`] when a type declares a blank discriminant, a
    /// discriminant has two type maps, a type map targets an unregistered discriminant, or a
    /// field has more than one binding.
    pub fn build(self) -> Result<Mapper, MappingError> {
        let registry = TypeRegistry::from_types(self.types)?;

        let mut maps = FxHashMap::default();
        for (eclass, map) in self.maps {
            if !registry.contains(eclass) {
                return Err(MappingError::registration(format!(
                    "type map for unregistered discriminant '{eclass}'"
                )));
            }
            map.check(eclass)?;
            if maps.insert(eclass, map).is_some() {
                return Err(MappingError::registration(format!(
                    "discriminant '{eclass}' has more than one type map"
                )));
            }
        }

        debug!(types = registry.len(), maps = maps.len(), "Mapper built");
        Ok(Mapper { registry, maps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::GlyphConverter;
    use scriba_domain::model::{Annotation, Lemma};
    use serde_json::json;

    fn doc(value: Value) -> DocumentDto {
        DocumentDto::from_value(value).expect("valid document")
    }

    #[test]
    fn duplicate_bindings_are_rejected() {
        let err = Mapper::builder()
            .register::<Annotation>()
            .map::<Annotation>(TypeMap::new().rename("editors", "editedBy").rename("by", "editedBy"))
            .build()
            .unwrap_err();
        assert!(err.is_registration());
        assert!(err.to_string().contains("editedBy"));
    }

    #[test]
    fn duplicate_type_maps_are_rejected() {
        let err = Mapper::builder()
            .register::<Annotation>()
            .map::<Annotation>(TypeMap::new())
            .map::<Annotation>(TypeMap::new())
            .build()
            .unwrap_err();
        assert!(err.is_registration());
    }

    #[test]
    fn map_for_unregistered_type_is_rejected() {
        let err = Mapper::builder().map::<Lemma>(TypeMap::new()).build().unwrap_err();
        assert!(err.is_registration());
    }

    #[test]
    fn nested_bindings_apply_to_list_elements() {
        let mapper = Mapper::builder()
            .register::<Lemma>()
            .map::<Lemma>(TypeMap::new().nested("words", TypeMap::new().convert("glyphs", "glyphs", GlyphConverter)))
            .build()
            .expect("mapper");

        let lemma: Lemma = mapper
            .convert_as(&doc(json!({
                "eclass": "BTSLemmaEntry",
                "id": "1",
                "words": [{ "glyphs": "G17-Z1" }, { "transcription": "nfr" }]
            })))
            .expect("lemma");

        assert_eq!(lemma.words[0].glyphs.len(), 2);
        assert!(lemma.words[1].glyphs.is_empty());
        assert_eq!(lemma.words[1].transcription.as_deref(), Some("nfr"));
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let mapper = Mapper::builder().register::<Annotation>().build().expect("mapper");
        let err = mapper
            .convert(&doc(json!({ "eclass": "BTSAnnotation", "id": "a", "body": ["x"] })))
            .unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().starts_with("Malformed transfer object (BTSAnnotation a)"));
    }
}
