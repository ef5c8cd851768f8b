use serde::{Deserialize, Serialize};

/// One narrator in a transmission chain, listed in transmission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarratorEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grading: Option<String>,
}

/// A single transmission chain (isnad) for one hadith.
///
/// The submission core never looks inside: records are counted, cloned, and
/// forwarded in the order the backend returned them. Chain ordering denotes
/// ranking, so it must survive every hop unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainRecord {
    pub narrators: Vec<NarratorEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_arabic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_english: Option<String>,
}
