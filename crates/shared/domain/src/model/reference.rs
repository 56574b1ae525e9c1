use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Deref;

/// A link into an external lexicographic resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalReference {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Resolved link, when the source has a URL template configured.
    pub href: Option<String>,
}

/// External references grouped by canonical source key, each group in backend order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalReferences(BTreeMap<String, Vec<ExternalReference>>);

impl ExternalReferences {
    #[must_use]
    pub const fn new(groups: BTreeMap<String, Vec<ExternalReference>>) -> Self {
        Self(groups)
    }

    /// References from one source, or an empty slice.
    #[must_use]
    pub fn source(&self, key: &str) -> &[ExternalReference] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Vec<ExternalReference>> {
        self.0
    }
}

impl Deref for ExternalReferences {
    type Target = BTreeMap<String, Vec<ExternalReference>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<(String, ExternalReference)> for ExternalReferences {
    /// Groups `(source, reference)` pairs, keeping the order of appearance inside each group.
    fn from_iter<I: IntoIterator<Item = (String, ExternalReference)>>(iter: I) -> Self {
        let mut groups: BTreeMap<String, Vec<ExternalReference>> = BTreeMap::new();
        for (source, reference) in iter {
            groups.entry(source).or_default().push(reference);
        }
        Self(groups)
    }
}
