use crate::backend::Backend;
use crate::error::ServiceError;
use crate::search::SearchResults;
use scriba_domain::model::{Annotation, Lemma, ModelClass, ThsEntry};
use scriba_domain::search::{LemmaSearch, ThsSearch};
use scriba_mapping::{Mapper, ObjectDetails};
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// A model type the backend can search for, and the command it is searched with.
pub trait Searchable: ModelClass {
    type Query: Serialize + Send + Sync;
}

impl Searchable for Lemma {
    type Query = LemmaSearch;
}

impl Searchable for ThsEntry {
    type Query = ThsSearch;
}

/// Retrieval and search for one model type.
///
/// Requests go to the backend, answers are converted with the shared [`Mapper`]. Nothing is
/// cached between calls.
pub struct ObjectService<T, B> {
    backend: Arc<B>,
    mapper: Arc<Mapper>,
    _model: PhantomData<fn() -> T>,
}

pub type AnnotationService<B> = ObjectService<Annotation, B>;
pub type ThsService<B> = ObjectService<ThsEntry, B>;

impl<T: ModelClass, B: Backend> ObjectService<T, B> {
    #[must_use]
    pub const fn new(backend: Arc<B>, mapper: Arc<Mapper>) -> Self {
        Self { backend, mapper, _model: PhantomData }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    /// # Errors
    /// * [`ServiceError::NotFound`] if the backend has no such document.
    /// * [`ServiceError::Backend`] if the call fails or the document is malformed.
    /// * [`ServiceError::Mapping`] if the document cannot be converted into `T`.
    pub async fn retrieve(&self, id: &str) -> Result<T, ServiceError> {
        debug!(eclass = T::ECLASS, id, "Retrieving document");
        let doc = self
            .backend
            .retrieve_document(T::ECLASS, id)
            .await?
            .ok_or_else(|| ServiceError::not_found(T::ECLASS, id))?;

        self.mapper.convert_as::<T>(&doc).map_err(ServiceError::conversion)
    }

    /// Retrieves a document with its related documents; see [`ObjectDetails`].
    ///
    /// # Errors
    /// As for [`ObjectService::retrieve`]; a single unconvertible related document fails the
    /// whole call.
    pub async fn retrieve_with_relations(&self, id: &str) -> Result<ObjectDetails<T>, ServiceError> {
        debug!(eclass = T::ECLASS, id, "Retrieving document details");
        let wrapper = self
            .backend
            .retrieve_details(T::ECLASS, id)
            .await?
            .ok_or_else(|| ServiceError::not_found(T::ECLASS, id))?;

        ObjectDetails::from_wrapper(&self.mapper, &wrapper).map_err(ServiceError::conversion)
    }
}

impl<T: Searchable, B: Backend> ObjectService<T, B> {
    /// Forwards a search command and converts the returned page.
    ///
    /// # Errors
    /// * [`ServiceError::Backend`] if the call fails, the command cannot be encoded, or a hit
    ///   is malformed.
    /// * [`ServiceError::Mapping`] if any hit cannot be converted into `T`.
    pub async fn search(&self, query: &T::Query, page: u32) -> Result<SearchResults<T>, ServiceError> {
        let command = serde_json::to_value(query)
            .map_err(|err| ServiceError::backend(format!("cannot encode search command: {err}")))?;
        debug!(eclass = T::ECLASS, page, "Searching");

        let response = self.backend.search(T::ECLASS, &command, page).await?;
        let objects = response
            .results
            .iter()
            .map(|doc| self.mapper.convert_as::<T>(doc))
            .collect::<Result<Vec<_>, _>>()
            .map_err(ServiceError::conversion)?;

        Ok(SearchResults { objects, page: response.page, query: response.query })
    }
}

impl<T, B> Clone for ObjectService<T, B> {
    fn clone(&self) -> Self {
        Self { backend: Arc::clone(&self.backend), mapper: Arc::clone(&self.mapper), _model: PhantomData }
    }
}

impl<T, B: fmt::Debug> fmt::Debug for ObjectService<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectService")
            .field("model", &std::any::type_name::<T>())
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}
