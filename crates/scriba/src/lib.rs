//! Facade crate for the lexicon front end.
//! Re-exports domain/kernel primitives and the feature crates, and builds the shared mapper.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load a [`ScribaConfig`](domain::config::ScribaConfig) with [`kernel::config::load_scriba_config`].
//! - Call [`init`] once at startup and hand the mapper to the services in [`lexicon`].

use scriba_domain::config::ScribaConfig;
use scriba_mapping::{Mapper, MappingError, lexicon_mapper};
use std::sync::Arc;
use tracing::info;

pub use scriba_domain as domain;
pub use scriba_kernel as kernel;
pub use scriba_lexicon as lexicon;
pub use scriba_mapping as mapping;

/// Builds the registry and type maps for every lexicon model.
///
/// # Errors
/// Returns [`MappingError::Registration`] if the registration list or a type map is invalid.
pub fn init(config: &ScribaConfig) -> Result<Arc<Mapper>, MappingError> {
    let mapper = lexicon_mapper(&config.references)?;
    info!(
        types = mapper.registry().len(),
        sources = config.references.sources.len(),
        "Type registry initialized"
    );
    Ok(Arc::new(mapper))
}
