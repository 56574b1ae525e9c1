//! # Mapping
//!
//! Turns backend transfer objects into typed domain objects.
//!
//! * [`TypeRegistry`]: discriminant (`eclass`) to model type, filled from an explicit list.
//! * [`converters`]: typed field converters for irregular field shapes.
//! * [`Mapper`]: registry plus per-type [`TypeMap`]s; structural copy with converter overrides.
//! * [`ObjectDetails`]: a primary object with its related objects, keyed by discriminant and id.
//!
//! ```rust
//! use scriba_domain::config::ReferencesConfig;
//! use scriba_domain::dto::DocumentDto;
//! use scriba_domain::model::Lemma;
//! use scriba_mapping::lexicon_mapper;
//!
//! let mapper = lexicon_mapper(&ReferencesConfig::default()).unwrap();
//! let doc = DocumentDto::from_value(serde_json::json!({
//!     "eclass": "BTSLemmaEntry",
//!     "id": "10070",
//!     "editors": { "author": "Altmann" }
//! }))
//! .unwrap();
//!
//! let lemma: Lemma = mapper.convert_as(&doc).unwrap();
//! assert_eq!(lemma.edited_by.unwrap().author.as_deref(), Some("Altmann"));
//! ```

pub mod converters;
mod details;
mod engine;
mod error;
mod models;
mod registry;

pub use crate::details::{ObjectDetails, RelatedObjects};
pub use crate::engine::{Mapper, MapperBuilder, TypeMap};
pub use crate::error::{MappingError, MappingErrorExt};
pub use crate::models::{lexicon_mapper, model_types};
pub use crate::registry::{ModelType, TypeRegistry};
