//! Search commands forwarded to the backend.

use bitflags::bitflags;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const HIERATIC: &str = "hieratic";
pub const DEMOTIC: &str = "demotic";

bitflags! {
    /// Scripts a lemma search can be restricted to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ScriptSet: u8 {
        const HIERATIC = 1 << 0;
        const DEMOTIC = 1 << 1;

        const ALL = Self::HIERATIC.bits() | Self::DEMOTIC.bits();
    }
}

impl Default for ScriptSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<&str> for ScriptSet {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            HIERATIC => Self::HIERATIC,
            DEMOTIC => Self::DEMOTIC,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl ScriptSet {
    fn names(self) -> impl Iterator<Item = &'static str> {
        [(Self::HIERATIC, HIERATIC), (Self::DEMOTIC, DEMOTIC)]
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

/// Serialized as a list of script names, which is what the backend expects.
impl Serialize for ScriptSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(None)?;
        for name in self.names() {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ScriptSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.iter().fold(Self::empty(), |set, name| set | Self::from(name.as_str())))
    }
}

/// Translation languages offered by the lemma search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    En,
    Fr,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationSearch {
    pub text: Option<String>,
    pub lang: Vec<Language>,
}

/// Lemma search form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LemmaSearch {
    pub transcription: Option<String>,
    pub script: ScriptSet,
    pub translation: TranslationSearch,
    /// Part of speech.
    pub pos: Option<String>,
    pub root: Option<String>,
}

/// Thesaurus search form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThsSearch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
