//! Error types returned by the library.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a policy could not produce a password.
///
/// Everything except [`GenerationError::WordExceedsBudget`] is detected before any
/// randomness is drawn.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("password length must be a positive integer")]
    InvalidLength,
    #[error("custom symbols were supplied while symbols are excluded; choose one")]
    ConflictingSymbolConfig,
    #[error("dictionary mode needs letters; lowercase and uppercase cannot both be excluded")]
    DictionaryRequiresLetters,
    #[error(
        "password length ({length}) cannot fit a dictionary word and the required character \
         types; minimum for dictionary mode: {minimum}"
    )]
    LengthTooSmallForDictionary { length: usize, minimum: usize },
    #[error(
        "dictionary word '{word}' exceeds the password length ({length}) once other required \
         characters are reserved (word budget: {budget})"
    )]
    WordExceedsBudget {
        word: String,
        length: usize,
        budget: usize,
    },
    #[error("no words available for dictionary generation; check the dictionary file")]
    NoWordsAvailable,
    #[error("no character types selected")]
    NoCharacterTypesSelected,
}

/// Failure to turn a word file into a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("dictionary file not found at '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("error reading dictionary file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dictionary file '{}' is empty", .0.display())]
    Empty(PathBuf),
    #[error("no valid words found in '{}'; expected comma-separated words", .0.display())]
    NoWords(PathBuf),
}

/// Failure to load or store persisted settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
