//! # Lexicon services
//!
//! Orchestration between the document [`Backend`] and the [`Mapper`](scriba_mapping::Mapper):
//! retrieve one object, retrieve it with its relations, or search a page of objects.
//!
//! The backend is an external collaborator; this crate only defines the contract it must
//! fulfil and never performs I/O itself.

mod backend;
mod error;
mod lemma;
mod search;
mod service;

pub use crate::backend::Backend;
pub use crate::error::{ServiceError, ServiceErrorExt};
pub use crate::lemma::{BIBLIOGRAPHY_PATH, LemmaService};
pub use crate::search::SearchResults;
pub use crate::service::{AnnotationService, ObjectService, Searchable, ThsService};
