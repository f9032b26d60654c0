//! Password generation.

use std::fmt;

use rand::Rng;
use tracing::debug;
use zeroize::Zeroizing;

use super::assemble::{self, Unit};
use super::charset;
use super::words::{self, Casing};
use crate::corpus;
use crate::error::GenerationError;
use crate::policy::{Category, Policy};

/// Non-secret facts about one generated password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub length: usize,
    pub words: usize,
    pub word_chars: usize,
    /// Letters whose case was picked at random.
    pub cased_letters: usize,
    pub filler: usize,
    pub pool_size: usize,
    /// Size of the corpus the words were drawn from (0 outside dictionary mode).
    pub corpus_size: usize,
    /// Characters removed when cutting to length.
    pub truncated: usize,
    /// Categories whose guaranteed character did not survive the cut.
    pub dropped: Vec<Category>,
    /// Words that lost characters to the cut.
    pub cut_words: usize,
}

impl Report {
    /// True when the cut removed a guaranteed character or part of a word.
    pub fn has_shortfall(&self) -> bool {
        !self.dropped.is_empty() || self.cut_words > 0
    }
}

/// A generated password. Its text and words are wiped on drop.
pub struct Generated {
    password: Zeroizing<String>,
    words: Zeroizing<Vec<String>>,
    report: Report,
}

impl fmt::Debug for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generated")
            .field("password", &"<redacted>")
            .field("report", &self.report)
            .finish()
    }
}

impl Generated {
    pub fn as_str(&self) -> &str {
        &self.password
    }

    /// Processed (cased) words, in selection order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Hand over the password, leaving the report behind.
    pub fn into_password(self) -> Zeroizing<String> {
        self.password
    }
}

/// Generate a password, falling back to the built-in word lists in dictionary mode.
pub fn generate<R: Rng + ?Sized>(policy: &Policy, rng: &mut R) -> Result<Generated, GenerationError> {
    generate_with_fallback(policy, corpus::default_words(), rng)
}

/// Generate a password using `fallback` when the policy carries no words.
pub fn generate_with_fallback<R: Rng + ?Sized>(
    policy: &Policy,
    fallback: &[&str],
    rng: &mut R,
) -> Result<Generated, GenerationError> {
    let plan = plan(policy, fallback)?;
    let target = policy.target_length;

    let mut report = Report {
        length: target,
        pool_size: plan.pool.len(),
        ..Report::default()
    };

    let mut cased = Zeroizing::new(Vec::new());
    let mut units: Vec<Unit> = match &plan.dictionary {
        Some(dict) => {
            report.corpus_size = dict.corpus.len();
            let selected = Zeroizing::new(words::select(&dict.corpus, dict.budget, target, rng)?);
            let casing = Casing {
                lower: policy.letters_lower,
                upper: policy.letters_upper,
            };
            for word in selected.iter() {
                let (processed, randomized) = words::apply_casing(word, casing, rng);
                report.cased_letters += randomized;
                report.word_chars += processed.chars().count();
                cased.push(processed);
            }
            report.words = cased.len();

            let guaranteed = charset::draw_guaranteed(policy, rng);
            assemble::interleave(cased.to_vec(), guaranteed)
        }
        None => assemble::guaranteed_only(charset::draw_guaranteed(policy, rng)),
    };

    report.filler = assemble::fill(&mut units, &plan.pool, target, rng);
    assemble::shuffle(&mut units, rng);
    let joined = assemble::join(&units, target);

    report.truncated = joined.truncated;
    report.dropped = joined.dropped;
    report.cut_words = joined.cut_words;

    debug!(
        length = target,
        words = report.words,
        filler = report.filler,
        truncated = report.truncated,
        "generated password"
    );

    Ok(Generated {
        password: joined.text,
        words: cased,
        report,
    })
}

struct Plan<'a> {
    pool: Vec<char>,
    dictionary: Option<DictionaryPlan<'a>>,
}

struct DictionaryPlan<'a> {
    corpus: Vec<&'a str>,
    budget: usize,
}

/// Every check that does not need randomness.
fn plan<'a>(policy: &'a Policy, fallback: &[&'a str]) -> Result<Plan<'a>, GenerationError> {
    policy.validate()?;

    let pool = charset::build(policy);
    if pool.is_empty() {
        return Err(GenerationError::NoCharacterTypesSelected);
    }

    let dictionary = if policy.dictionary_mode {
        let budget = policy
            .word_budget()
            .ok_or_else(|| GenerationError::LengthTooSmallForDictionary {
                length: policy.target_length,
                minimum: policy.minimum_length(),
            })?;
        let corpus: Vec<&str> = if policy.word_corpus.is_empty() {
            fallback.to_vec()
        } else {
            policy.word_corpus.iter().map(String::as_str).collect()
        };
        if corpus.is_empty() {
            return Err(GenerationError::NoWordsAvailable);
        }
        Some(DictionaryPlan { corpus, budget })
    } else {
        None
    };

    Ok(Plan { pool, dictionary })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn dict_policy(length: usize, corpus: &[&str]) -> Policy {
        Policy {
            target_length: length,
            dictionary_mode: true,
            word_corpus: corpus.iter().map(|w| w.to_string()).collect(),
            ..Policy::default()
        }
    }

    #[test]
    fn checks_run_before_randomness() {
        let policy = Policy {
            target_length: 2,
            spaces: true,
            dictionary_mode: true,
            ..Policy::default()
        };
        assert_eq!(
            plan(&policy, &["ox"]).err(),
            Some(GenerationError::LengthTooSmallForDictionary {
                length: 2,
                minimum: 4
            })
        );
    }

    #[test]
    fn empty_fallback_and_corpus_means_no_words() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let policy = dict_policy(12, &[]);
        assert_eq!(
            generate_with_fallback(&policy, &[], &mut rng).err(),
            Some(GenerationError::NoWordsAvailable)
        );
    }

    #[test]
    fn policy_words_win_over_fallback() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let policy = dict_policy(12, &["kiwi"]);
        let generated = generate_with_fallback(&policy, &["banana"], &mut rng).unwrap();
        assert!(generated.words().iter().all(|w| w.eq_ignore_ascii_case("kiwi")));
        assert_eq!(generated.report().corpus_size, 1);
    }

    #[test]
    fn report_accounts_for_every_character() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let policy = dict_policy(20, &["sun", "moon", "star"]);
        let generated = generate(&policy, &mut rng).unwrap();
        let report = generated.report();
        assert_eq!(report.length, 20);
        assert_eq!(report.word_chars + 2 + report.filler, 20);
        assert_eq!(report.cased_letters, report.word_chars);
        assert_eq!(report.truncated, 0);
        assert!(!report.has_shortfall());
    }

    #[test]
    fn short_length_cuts_guaranteed_characters() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let policy = Policy {
            target_length: 2,
            ..Policy::default()
        };
        let generated = generate(&policy, &mut rng).unwrap();
        assert_eq!(generated.as_str().chars().count(), 2);
        assert_eq!(generated.report().truncated, 2);
        assert_eq!(generated.report().dropped.len(), 2);
        assert_eq!(generated.report().filler, 0);
        assert!(generated.report().has_shortfall());
    }
}
