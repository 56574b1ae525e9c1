use crate::model::{EditorInfo, ExternalReferences, Synonym};
use scriba_derive::model_class;

/// A thesaurus entry (places, dates, text categories and the like).
#[model_class(eclass = "BTSThsEntry")]
pub struct ThsEntry {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub subtype: Option<String>,
    pub revision_state: Option<String>,
    pub edited_by: Option<EditorInfo>,
    pub external_references: ExternalReferences,
    pub synonyms: Vec<Synonym>,
}
