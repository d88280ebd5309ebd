//! Quran / Hadith lookup DTOs.

use serde::{Deserialize, Serialize};

use crate::nullable::Nullable;
use crate::types::Extra;

/// Search language for Quran and Hadith lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(format!("unknown language '{other}', expected 'en' or 'ar'")),
        }
    }
}

/// A Quran verse or Hadith saying.
///
/// The analyzer catalog uses `text_en`/`text_ar`/`reference`; the search
/// endpoints add surah, narrator and relevance fields, which land in
/// `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub text_en: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub text_ar: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub reference: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub keywords: Nullable<Vec<String>>,
    #[serde(flatten)]
    pub extra: Extra,
}

pub type Ayah = Passage;
pub type Hadith = Passage;

/// Passage listing as returned by the catalog and search endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PassageList {
    Bare(Vec<Passage>),
    Ayahs { ayahs: Vec<Passage> },
    Hadiths { hadiths: Vec<Passage> },
    Results { results: Vec<Passage> },
}

impl PassageList {
    pub fn into_inner(self) -> Vec<Passage> {
        match self {
            PassageList::Bare(items)
            | PassageList::Ayahs { ayahs: items }
            | PassageList::Hadiths { hadiths: items }
            | PassageList::Results { results: items } => items,
        }
    }
}

/// Answer to a free-form question: the best matching verse and saying
/// plus a generated explanation.
///
/// The analyzer names the explanation `ai_explanation`; some deployments
/// send `explanation`. Both keys are kept as sent and read through
/// [`Analysis::explanation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub question: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub ayah: Nullable<Ayah>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub hadith: Nullable<Hadith>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub ai_explanation: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub explanation: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub match_found: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub available_topics: Nullable<Vec<String>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Analysis {
    pub fn explanation(&self) -> Option<&str> {
        self.ai_explanation
            .as_deref()
            .or_else(|| self.explanation.as_deref())
    }
}
