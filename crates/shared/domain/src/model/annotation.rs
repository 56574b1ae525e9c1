use crate::model::{Complete, EditorInfo, non_empty};
use scriba_derive::model_class;

/// A commentary attached to a lemma or thesaurus entry.
#[model_class(eclass = "BTSAnnotation")]
pub struct Annotation {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub body: Option<String>,
    pub revision_state: Option<String>,
    /// Filled from the transfer object's `editors` field.
    pub edited_by: Option<EditorInfo>,
}

impl Complete for Annotation {
    /// Only annotations with both a title and a text are worth showing.
    fn is_complete(&self) -> bool {
        non_empty(self.name.as_deref()) && non_empty(self.body.as_deref())
    }
}
