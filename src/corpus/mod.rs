//! Word corpora for dictionary mode.
//!
//! The built-in corpus is the Italian list followed by the English list, embedded at
//! compile time. Custom corpora come from comma-separated word files.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::CorpusError;

static ITALIAN: &str = include_str!("wordlists/italian.wordlist");
static ENGLISH: &str = include_str!("wordlists/english.wordlist");

static DEFAULT: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    ITALIAN
        .lines()
        .chain(ENGLISH.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
});

/// Built-in fallback corpus.
pub fn default_words() -> &'static [&'static str] {
    &DEFAULT
}

/// Split comma-separated content into trimmed, non-empty words.
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

/// Read a comma-separated word file.
pub fn load_words(path: &Path) -> Result<Vec<String>, CorpusError> {
    if !path.exists() {
        return Err(CorpusError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Err(CorpusError::Empty(path.to_path_buf()));
    }

    let words = parse_words(&content);
    if words.is_empty() {
        return Err(CorpusError::NoWords(path.to_path_buf()));
    }
    Ok(words)
}
