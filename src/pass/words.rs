//! Dictionary word selection and casing.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::error::GenerationError;

const MAX_WORDS: usize = 5;
const MAX_ATTEMPTS: usize = 10;

/// Case options applied to selected words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Casing {
    pub lower: bool,
    pub upper: bool,
}

/// Sample words whose total length fits `budget`.
///
/// Stops once the words fill 80% of the budget, after five words or after ten samples,
/// whichever comes first. If nothing fit, one more word is forced.
pub fn select<R: Rng + ?Sized>(
    corpus: &[&str],
    budget: usize,
    length: usize,
    rng: &mut R,
) -> Result<Vec<String>, GenerationError> {
    if corpus.is_empty() {
        return Err(GenerationError::NoWordsAvailable);
    }

    let (mut chosen, attempts) = sample(corpus, budget, rng);

    if chosen.is_empty()
        && let Some(&word) = corpus.choose(rng)
    {
        if word.chars().count() > budget {
            return Err(GenerationError::WordExceedsBudget {
                word: word.to_string(),
                length,
                budget,
            });
        }
        chosen.push(word.to_string());
    }

    debug!(words = chosen.len(), attempts, budget, "selected dictionary words");
    Ok(chosen)
}

/// The bounded sampling loop. Returns the accepted words and the number of samples taken.
fn sample<R: Rng + ?Sized>(corpus: &[&str], budget: usize, rng: &mut R) -> (Vec<String>, usize) {
    let mut chosen = Vec::new();
    let mut total = 0;
    let mut attempts = 0;

    // total < 0.8 * budget, widened so huge budgets cannot overflow
    while (total as u128) * 5 < (budget as u128) * 4
        && chosen.len() < MAX_WORDS
        && attempts < MAX_ATTEMPTS
    {
        if let Some(&word) = corpus.choose(rng) {
            let len = word.chars().count();
            if len <= budget - total {
                chosen.push(word.to_string());
                total += len;
            }
        }
        attempts += 1;
    }

    (chosen, attempts)
}

/// Apply per-letter casing. Returns the new word and the number of letters whose case was
/// left to chance.
pub fn apply_casing<R: Rng + ?Sized>(word: &str, casing: Casing, rng: &mut R) -> (String, usize) {
    let mut out = String::with_capacity(word.len());
    let mut randomized = 0;

    for ch in word.chars() {
        if !ch.is_alphabetic() {
            out.push(ch);
            continue;
        }
        let upper = match (casing.lower, casing.upper) {
            (true, true) => {
                randomized += 1;
                rng.random_bool(0.5)
            }
            (false, true) => true,
            _ => false,
        };
        out.push(convert(ch, upper));
    }

    (out, randomized)
}

/// Single-char case conversion; multi-char mappings (such as `ß`) keep the original.
fn convert(ch: char, upper: bool) -> char {
    let mut mapped = if upper {
        CaseIter::Upper(ch.to_uppercase())
    } else {
        CaseIter::Lower(ch.to_lowercase())
    };
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

enum CaseIter {
    Upper(std::char::ToUppercase),
    Lower(std::char::ToLowercase),
}

impl Iterator for CaseIter {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self {
            CaseIter::Upper(it) => it.next(),
            CaseIter::Lower(it) => it.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn fills_the_budget_with_short_words() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let words = select(&["ox"], 5, 5, &mut rng).unwrap();
        assert_eq!(words, vec!["ox".to_string(), "ox".to_string()]);
    }

    #[test]
    fn never_exceeds_budget_or_word_cap() {
        let corpus = ["a", "be", "sea", "tree", "horse", "galaxy"];
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let words = select(&corpus, 40, 40, &mut rng).unwrap();
            let total: usize = words.iter().map(|w| w.len()).sum();
            assert!(!words.is_empty());
            assert!(words.len() <= MAX_WORDS);
            assert!(total <= 40);
        }
    }

    #[test]
    fn rejected_samples_stop_at_the_attempt_cap() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (chosen, attempts) = sample(&["abcdefghij", "klmnopqrst"], 9, &mut rng);
        assert!(chosen.is_empty());
        assert_eq!(attempts, MAX_ATTEMPTS);
    }

    #[test]
    fn mostly_rejected_samples_never_pass_the_cap() {
        for seed in 0..30 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let (chosen, attempts) = sample(&["abcdefghij", "a"], 9, &mut rng);
            assert!(attempts <= MAX_ATTEMPTS);
            assert!(chosen.iter().all(|w| w == "a"));
            // only the word cap can end the loop early here
            if chosen.len() < MAX_WORDS {
                assert_eq!(attempts, MAX_ATTEMPTS);
            }
        }
    }

    #[test]
    fn huge_budget_does_not_overflow() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let budget = usize::MAX / 2;
        let words = select(&["internationalization"], budget, budget, &mut rng).unwrap();
        assert_eq!(words.len(), MAX_WORDS);
    }

    #[test]
    fn oversized_word_is_reported() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = select(&["internationalization"], 3, 5, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GenerationError::WordExceedsBudget {
                word: "internationalization".into(),
                length: 5,
                budget: 3,
            }
        );
    }

    #[test]
    fn empty_corpus_has_no_words() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            select(&[], 8, 8, &mut rng),
            Err(GenerationError::NoWordsAvailable)
        );
    }

    #[test]
    fn single_case_is_forced() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let upper = Casing {
            lower: false,
            upper: true,
        };
        assert_eq!(apply_casing("essere-2", upper, &mut rng), ("ESSERE-2".into(), 0));

        let lower = Casing {
            lower: true,
            upper: false,
        };
        assert_eq!(apply_casing("MiXeD", lower, &mut rng), ("mixed".into(), 0));
    }

    #[test]
    fn mixed_case_keeps_letters_and_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let both = Casing {
            lower: true,
            upper: true,
        };
        let (cased, randomized) = apply_casing("straße", both, &mut rng);
        assert_eq!(cased.chars().count(), 6);
        assert_eq!(randomized, 6);
        assert_eq!(cased.to_lowercase(), "straße");
    }
}
