//! Discriminant to model type registry.
//!
//! The registry is filled from an explicit list of [`ModelType`]s, each built from a type's
//! `ModelClass::ECLASS`. It is owned by the [`Mapper`](crate::Mapper) and never changes once
//! the mapper has been built.

use crate::error::MappingError;
use fxhash::FxHashMap;
use scriba_domain::model::{ModelClass, Object};
use serde_json::Value;
use std::any::{TypeId, type_name};
use tracing::warn;

type BuildFn = fn(Value) -> Result<Box<dyn Object>, serde_json::Error>;

/// A registered model type: its discriminant and how to build it from prepared JSON.
#[derive(Debug, Clone, Copy)]
pub struct ModelType {
    eclass: &'static str,
    type_name: &'static str,
    type_id: TypeId,
    build: BuildFn,
}

impl ModelType {
    #[must_use]
    pub fn of<T: ModelClass>() -> Self {
        Self {
            eclass: T::ECLASS,
            type_name: type_name::<T>(),
            type_id: TypeId::of::<T>(),
            build: build_model::<T>,
        }
    }

    #[must_use]
    pub const fn eclass(&self) -> &'static str {
        self.eclass
    }

    /// Fully qualified Rust type name, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub fn is<T: ModelClass>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Structural copy: deserializes the prepared record into the model type.
    pub(crate) fn build(&self, record: Value) -> Result<Box<dyn Object>, serde_json::Error> {
        (self.build)(record)
    }
}

fn build_model<T: ModelClass>(record: Value) -> Result<Box<dyn Object>, serde_json::Error> {
    let object: T = serde_json::from_value(record)?;
    Ok(Box::new(object))
}

impl PartialEq for ModelType {
    fn eq(&self, other: &Self) -> bool {
        self.eclass == other.eclass && self.type_id == other.type_id
    }
}

impl Eq for ModelType {}

/// Maps discriminants to model types.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    types: FxHashMap<&'static str, ModelType>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a list of model types.
    ///
    /// # Errors
    /// Returns [`MappingError::Registration`] if a type declares a blank discriminant.
    pub fn from_types(types: impl IntoIterator<Item = ModelType>) -> Result<Self, MappingError> {
        let mut registry = Self::new();
        registry.initialize(types)?;
        Ok(registry)
    }

    /// Inserts a model type under its discriminant.
    ///
    /// Registering a discriminant again replaces the earlier entry.
    ///
    /// # Errors
    /// Returns [`MappingError::Registration`] if the discriminant is blank.
    pub fn register(&mut self, model: ModelType) -> Result<(), MappingError> {
        if model.eclass.trim().is_empty() {
            return Err(MappingError::registration(format!(
                "{} declares no discriminant",
                model.type_name
            )));
        }
        if let Some(previous) = self.types.insert(model.eclass, model)
            && previous.type_id != model.type_id
        {
            warn!(
                eclass = model.eclass,
                previous = previous.type_name,
                current = model.type_name,
                "Discriminant registered twice, keeping the last type"
            );
        }
        Ok(())
    }

    /// Clears the registry and registers every type in `types`.
    ///
    /// # Errors
    /// Returns [`MappingError::Registration`] on the first type with a blank discriminant.
    pub fn initialize(
        &mut self,
        types: impl IntoIterator<Item = ModelType>,
    ) -> Result<(), MappingError> {
        self.types.clear();
        types.into_iter().try_for_each(|model| self.register(model))
    }

    /// # Errors
    /// Returns [`MappingError::UnknownType`] if nothing is registered under `eclass`.
    pub fn lookup(&self, eclass: &str) -> Result<&ModelType, MappingError> {
        self.types.get(eclass).ok_or_else(|| MappingError::unknown_type(eclass))
    }

    #[must_use]
    pub fn contains(&self, eclass: &str) -> bool {
        self.types.contains_key(eclass)
    }

    /// Registered types ordered by discriminant.
    #[must_use]
    pub fn types(&self) -> Vec<&ModelType> {
        let mut types: Vec<_> = self.types.values().collect();
        types.sort_unstable_by_key(|model| model.eclass);
        types
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
