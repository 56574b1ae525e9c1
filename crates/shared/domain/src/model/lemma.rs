use crate::model::{EditorInfo, ExternalReferences, Glyphs, Passport};
use scriba_derive::model_class;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A dictionary entry.
#[model_class(eclass = "BTSLemmaEntry")]
pub struct Lemma {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub subtype: Option<String>,
    pub revision_state: Option<String>,
    pub edited_by: Option<EditorInfo>,
    pub external_references: ExternalReferences,
    pub words: Vec<Word>,
    /// Language code to translations, in backend order.
    pub translations: BTreeMap<String, Vec<String>>,
    pub passport: Passport,
}

/// One written form of a lemma.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Word {
    pub glyphs: Glyphs,
    pub transcription: Option<String>,
    pub flexcode: Option<i64>,
}
