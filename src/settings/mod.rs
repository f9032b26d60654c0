//! Persisted generation defaults.

mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::policy::Policy;

pub use file::default_path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub number: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub custom_symbols: Option<String>,
    pub spaces: bool,
    pub dictionary: bool,
    pub dictionary_file: Option<PathBuf>,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        Self::load_from(&default_path())
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        self.save_to(&default_path())
    }

    /// Missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    /// Policy for these settings. `word_corpus` may be empty.
    pub fn policy(&self, word_corpus: Vec<String>) -> Policy {
        Policy {
            target_length: self.length,
            letters_lower: self.lowercase,
            letters_upper: self.uppercase,
            digits: self.digits,
            symbols: self.symbols,
            custom_symbol_set: self.custom_symbols.clone(),
            spaces: self.spaces,
            dictionary_mode: self.dictionary,
            word_corpus,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            number: 1,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            custom_symbols: None,
            spaces: false,
            dictionary: false,
            dictionary_file: None,
        }
    }
}
