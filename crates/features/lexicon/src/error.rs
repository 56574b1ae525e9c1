use scriba_mapping::MappingError;
use std::borrow::Cow;
use tracing::{error, warn};

/// Errors surfaced by the object services.
#[scriba_derive::scriba_error]
pub enum ServiceError {
    /// The backend has no document with this id; a normal "absent" outcome.
    #[error("Not found{}: {eclass} {id}", format_context(.context))]
    NotFound { eclass: &'static str, id: String, context: Option<Cow<'static, str>> },

    /// The backend call failed or answered with data that does not fit the models.
    #[error("Backend error{}: {message}", format_context(.context))]
    Backend { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Conversion failed for a reason that points at the registry, not at the backend.
    #[error("Mapping error{}: {source}", format_context(.context))]
    Mapping { source: MappingError, context: Option<Cow<'static, str>> },
}

impl ServiceError {
    #[must_use]
    pub fn not_found(eclass: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { eclass, id: id.into(), context: None }
    }

    #[must_use]
    pub fn backend(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Backend { message: message.into(), context: None }
    }

    /// Classifies a conversion failure and logs it.
    ///
    /// Malformed payloads are the backend's fault. Anything else means the registry does
    /// not match what the backend sends, which is a deployment bug.
    pub(crate) fn conversion(err: MappingError) -> Self {
        if err.is_malformed() {
            warn!(error = %err, "Backend sent a malformed document");
            Self::backend(err.to_string())
        } else {
            error!(error = %err, "Document conversion failed");
            Self::from(err)
        }
    }
}
