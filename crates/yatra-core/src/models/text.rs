//! Bilingual text lookup.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display language for authored content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "hi" | "hindi" => Ok(Language::Hi),
            _ => Err(format!("Unsupported language: {s}")),
        }
    }
}

/// A piece of authored text in English and Hindi.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BilingualText {
    pub en: &'static str,
    pub hi: &'static str,
}

impl BilingualText {
    pub const fn new(en: &'static str, hi: &'static str) -> Self {
        Self { en, hi }
    }

    /// Text for the requested language, falling back to English when the
    /// translation is empty.
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Hi if !self.hi.is_empty() => self.hi,
            _ => self.en,
        }
    }
}
