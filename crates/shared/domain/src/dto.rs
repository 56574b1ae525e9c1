//! Backend-shaped transfer objects.
//!
//! These are produced by the backend client and read by the conversion layer; nothing in the
//! front end mutates them, so a payload can be logged or converted again with another mapper.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A generic document: its discriminant, its id, and every other field as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDto {
    eclass: String,
    id: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl DocumentDto {
    #[must_use]
    pub fn new(eclass: impl Into<String>, id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self { eclass: eclass.into(), id: id.into(), fields }
    }

    /// Reads a document from a JSON value with top-level `eclass` and `id` keys.
    ///
    /// # Errors
    /// Returns the `serde_json` error if either key is missing or not a string.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[must_use]
    pub fn eclass(&self) -> &str {
        &self.eclass
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Payload fields, without `eclass` and `id`.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// A full JSON copy of the document, discriminant and id included.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut object = self.fields.clone();
        object.insert("eclass".to_owned(), Value::String(self.eclass.clone()));
        object.insert("id".to_owned(), Value::String(self.id.clone()));
        Value::Object(object)
    }
}

/// Related documents of a detail response: discriminant, then id, then document.
pub type RelatedBlock = BTreeMap<String, BTreeMap<String, DocumentDto>>;

/// Detail response: one document plus the documents it refers to.
///
/// `related` is `None` when the backend sent no relation block at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleDocumentWrapper {
    pub doc: DocumentDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<RelatedBlock>,
}

impl SingleDocumentWrapper {
    #[must_use]
    pub const fn new(doc: DocumentDto) -> Self {
        Self { doc, related: None }
    }

    #[must_use]
    pub fn with_related(mut self, related: RelatedBlock) -> Self {
        self.related = Some(related);
        self
    }
}

/// Paging metadata as reported by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageInfo {
    /// Zero-based page index.
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

/// One page of search hits in backend order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultsWrapper {
    pub results: Vec<DocumentDto>,
    #[serde(default)]
    pub page: PageInfo,
    /// The search command as the backend understood it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
}

/// Flat external reference record, tagged with the system it points into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalReferenceDto {
    #[serde(alias = "provider")]
    pub source: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_keeps_payload_fields() {
        let doc = DocumentDto::from_value(json!({
            "eclass": "BTSLemmaEntry",
            "id": "10070",
            "name": "jnk",
            "editors": { "author": "Altmann" },
        }))
        .expect("valid document");

        assert_eq!(doc.eclass(), "BTSLemmaEntry");
        assert_eq!(doc.id(), "10070");
        assert_eq!(doc.fields().len(), 2);
        assert_eq!(doc.field("name"), Some(&json!("jnk")));
        assert_eq!(doc.to_value()["id"], json!("10070"));
    }

    #[test]
    fn document_requires_discriminant() {
        assert!(DocumentDto::from_value(json!({ "id": "1" })).is_err());
    }

    #[test]
    fn detail_wrapper_distinguishes_missing_and_empty_relations() {
        let without: SingleDocumentWrapper = serde_json::from_value(json!({
            "doc": { "eclass": "BTSLemmaEntry", "id": "1" }
        }))
        .expect("wrapper");
        assert!(without.related.is_none());

        let empty: SingleDocumentWrapper = serde_json::from_value(json!({
            "doc": { "eclass": "BTSLemmaEntry", "id": "1" },
            "related": {}
        }))
        .expect("wrapper");
        assert_eq!(empty.related.map(|r| r.len()), Some(0));
    }

    #[test]
    fn search_wrapper_reads_page_metadata() {
        let wrapper: SearchResultsWrapper = serde_json::from_value(json!({
            "results": [{ "eclass": "BTSLemmaEntry", "id": "1" }],
            "page": { "number": 2, "size": 20, "totalElements": 41, "totalPages": 3 }
        }))
        .expect("wrapper");

        assert_eq!(wrapper.results.len(), 1);
        assert_eq!(wrapper.page.total_elements, 41);
        assert_eq!(wrapper.page.number, 2);
        assert!(wrapper.query.is_none());
    }

    #[test]
    fn reference_accepts_provider_alias() {
        let reference: ExternalReferenceDto =
            serde_json::from_value(json!({ "provider": "thot", "id": "thot-71" })).expect("ref");
        assert_eq!(reference.source, "thot");
        assert!(reference.kind.is_none());
    }
}
