use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Key external references are grouped under when their source is not configured.
pub const FALLBACK_SOURCE: &str = "other";

/// Top-level configuration shared by the binaries.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScribaConfigInner {
    pub logging: LoggingConfig,
    pub references: ReferencesConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into services.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ScribaConfig {
    #[serde(flatten, default)]
    inner: Arc<ScribaConfigInner>,
}

impl Deref for ScribaConfig {
    type Target = ScribaConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ScribaConfig {
    fn deref_mut(&mut self) -> &mut ScribaConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub console: bool,
    /// Directory for daily rolling log files; no file output when absent.
    pub path: Option<PathBuf>,
    /// Rolled files kept in `path`.
    pub max_files: usize,
    /// Writes the file output as JSON lines.
    pub json: bool,
    /// Env-filter directives, e.g. `scriba_mapping=debug`.
    pub filter: Option<String>,
}

/// Known external reference sources, keyed by canonical source name.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReferencesConfig {
    pub fallback: String,
    pub sources: BTreeMap<String, ReferenceSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReferenceSource {
    /// Display name.
    pub label: String,
    /// Link template; `{id}` is replaced with the reference id.
    pub url: Option<String>,
}

impl ReferencesConfig {
    /// Finds the canonical key for a source tag, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn canonical(&self, tag: &str) -> Option<(&str, &ReferenceSource)> {
        let tag = tag.trim();
        self.sources
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(tag))
            .map(|(key, source)| (key.as_str(), source))
    }
}

impl ReferenceSource {
    #[must_use]
    pub fn href(&self, id: &str) -> Option<String> {
        self.url.as_ref().map(|template| template.replace("{id}", id))
    }
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            path: None,
            max_files: 10,
            json: false,
            filter: None,
        }
    }
}

impl Default for ReferencesConfig {
    fn default() -> Self {
        let source = |label: &str, url: Option<&str>| ReferenceSource {
            label: label.to_owned(),
            url: url.map(str::to_owned),
        };
        let sources = BTreeMap::from([
            ("aaew_wcn".to_owned(), source("Digitized Slip Archive", None)),
            ("cfeetk".to_owned(), source("Coffin Texts Word Index", None)),
            ("damf".to_owned(), source("Demotic Word List", None)),
            ("thot".to_owned(), source("THOT Thesauri", None)),
            ("topbib".to_owned(), source("Topographical Bibliography", None)),
            (
                "trismegistos".to_owned(),
                source("Trismegistos", Some("https://www.trismegistos.org/text/{id}")),
            ),
        ]);
        Self { fallback: FALLBACK_SOURCE.to_owned(), sources }
    }
}
