//! Generation policy and its validation.

use std::fmt;

use crate::error::GenerationError;

/// A class of characters a password may be required to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
    Space,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Lowercase => "lowercase",
            Category::Uppercase => "uppercase",
            Category::Digits => "digit",
            Category::Symbols => "symbol",
            Category::Space => "space",
        };
        f.write_str(name)
    }
}

/// Declarative description of the password to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub target_length: usize,
    pub letters_lower: bool,
    pub letters_upper: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Replaces the default punctuation when symbols are enabled.
    pub custom_symbol_set: Option<String>,
    pub spaces: bool,
    pub dictionary_mode: bool,
    /// Words for dictionary mode. Empty means "use the fallback corpus".
    pub word_corpus: Vec<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            target_length: 16,
            letters_lower: true,
            letters_upper: true,
            digits: true,
            symbols: true,
            custom_symbol_set: None,
            spaces: false,
            dictionary_mode: false,
            word_corpus: Vec::new(),
        }
    }
}

impl Policy {
    /// Check the policy for contradictions. Draws no randomness.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.target_length == 0 {
            return Err(GenerationError::InvalidLength);
        }
        if self.custom_symbols().is_some() && !self.symbols {
            return Err(GenerationError::ConflictingSymbolConfig);
        }
        if self.dictionary_mode && !self.letters_lower && !self.letters_upper {
            return Err(GenerationError::DictionaryRequiresLetters);
        }
        Ok(())
    }

    /// The custom symbol set, ignoring an empty string.
    pub fn custom_symbols(&self) -> Option<&str> {
        self.custom_symbol_set.as_deref().filter(|s| !s.is_empty())
    }

    /// Categories that get a guaranteed representative, in draw order.
    pub fn guaranteed_categories(&self) -> Vec<Category> {
        let mut categories = Vec::with_capacity(5);
        if !self.dictionary_mode {
            if self.letters_lower {
                categories.push(Category::Lowercase);
            }
            if self.letters_upper {
                categories.push(Category::Uppercase);
            }
        }
        categories.extend(self.reserved_categories());
        categories
    }

    /// Digits, symbols and space, when enabled.
    pub fn reserved_categories(&self) -> Vec<Category> {
        [
            (self.digits, Category::Digits),
            (self.symbols, Category::Symbols),
            (self.spaces, Category::Space),
        ]
        .into_iter()
        .filter_map(|(on, c)| on.then_some(c))
        .collect()
    }

    /// Maximum total length left for dictionary words, or `None` when nothing fits.
    pub fn word_budget(&self) -> Option<usize> {
        self.target_length
            .checked_sub(self.reserved_categories().len())
            .filter(|&budget| budget >= 1)
    }

    /// Smallest `target_length` this policy accepts.
    pub fn minimum_length(&self) -> usize {
        if self.dictionary_mode {
            self.reserved_categories().len() + 1
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_is_rejected_first() {
        let policy = Policy {
            target_length: 0,
            symbols: false,
            custom_symbol_set: Some("#".into()),
            ..Policy::default()
        };
        assert_eq!(policy.validate(), Err(GenerationError::InvalidLength));
    }

    #[test]
    fn custom_symbols_with_symbols_disabled_conflict() {
        let policy = Policy {
            symbols: false,
            custom_symbol_set: Some("#@".into()),
            ..Policy::default()
        };
        assert_eq!(policy.validate(), Err(GenerationError::ConflictingSymbolConfig));
    }

    #[test]
    fn empty_custom_symbols_count_as_absent() {
        let policy = Policy {
            symbols: false,
            custom_symbol_set: Some(String::new()),
            ..Policy::default()
        };
        assert_eq!(policy.validate(), Ok(()));
        assert_eq!(policy.custom_symbols(), None);
    }

    #[test]
    fn dictionary_without_letters_is_rejected() {
        let policy = Policy {
            dictionary_mode: true,
            letters_lower: false,
            letters_upper: false,
            ..Policy::default()
        };
        assert_eq!(policy.validate(), Err(GenerationError::DictionaryRequiresLetters));
    }

    #[test]
    fn word_budget_reserves_one_slot_per_category() {
        let policy = Policy {
            target_length: 10,
            spaces: true,
            dictionary_mode: true,
            ..Policy::default()
        };
        assert_eq!(policy.word_budget(), Some(7));
        assert_eq!(policy.minimum_length(), 4);

        let tight = Policy {
            target_length: 3,
            ..policy
        };
        assert_eq!(tight.word_budget(), None);
    }

    #[test]
    fn letters_are_guaranteed_only_outside_dictionary_mode() {
        let plain = Policy::default();
        assert_eq!(
            plain.guaranteed_categories(),
            vec![
                Category::Lowercase,
                Category::Uppercase,
                Category::Digits,
                Category::Symbols
            ]
        );

        let dict = Policy {
            dictionary_mode: true,
            ..Policy::default()
        };
        assert_eq!(
            dict.guaranteed_categories(),
            vec![Category::Digits, Category::Symbols]
        );
    }
}
