use crate::converters::FieldConverter;
use scriba_domain::config::ReferencesConfig;
use scriba_domain::dto::ExternalReferenceDto;
use scriba_domain::model::{ExternalReference, ExternalReferences};
use tracing::warn;

/// Groups a flat reference list by canonical source key.
///
/// Order inside each group follows the input. References from sources missing in the
/// configuration land under the fallback key.
#[derive(Debug, Default, Clone)]
pub struct ExternalReferenceConverter {
    config: ReferencesConfig,
}

impl ExternalReferenceConverter {
    #[must_use]
    pub const fn new(config: ReferencesConfig) -> Self {
        Self { config }
    }

    fn group(&self, reference: ExternalReferenceDto) -> (String, ExternalReference) {
        let ExternalReferenceDto { source, id, kind } = reference;
        match self.config.canonical(&source) {
            Some((key, known)) => {
                let href = known.href(&id);
                (key.to_owned(), ExternalReference { id, kind, href })
            },
            None => {
                warn!(source = %source, id = %id, "Unknown external reference source");
                (self.config.fallback.clone(), ExternalReference { id, kind, href: None })
            },
        }
    }
}

impl FieldConverter for ExternalReferenceConverter {
    type Source = Vec<ExternalReferenceDto>;
    type Target = ExternalReferences;

    fn convert(&self, source: Option<Self::Source>) -> ExternalReferences {
        source.unwrap_or_default().into_iter().map(|reference| self.group(reference)).collect()
    }
}
