use crate::error::ServiceError;
use scriba_domain::dto::{DocumentDto, SearchResultsWrapper, SingleDocumentWrapper};
use serde_json::Value;
use std::future::Future;

/// The remote document store, as seen by the services.
///
/// Implementations own transport, retries and timeouts. Absence is `Ok(None)`; a failed or
/// garbled exchange is [`ServiceError::Backend`].
pub trait Backend: Send + Sync {
    /// Fetches one document of the given discriminant.
    fn retrieve_document(
        &self,
        eclass: &'static str,
        id: &str,
    ) -> impl Future<Output = Result<Option<DocumentDto>, ServiceError>> + Send;

    /// Fetches one document together with its related documents.
    fn retrieve_details(
        &self,
        eclass: &'static str,
        id: &str,
    ) -> impl Future<Output = Result<Option<SingleDocumentWrapper>, ServiceError>> + Send;

    /// Runs a search command; `page` is zero-based.
    fn search(
        &self,
        eclass: &'static str,
        query: &Value,
        page: u32,
    ) -> impl Future<Output = Result<SearchResultsWrapper, ServiceError>> + Send;
}
