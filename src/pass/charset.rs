//! Character pool building for password generation.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::policy::{Category, Policy};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// ASCII punctuation, used when no custom symbol set is given.
pub const DEFAULT_SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Every character of one category. Custom symbols keep duplicates, which weights them.
pub fn range(policy: &Policy, category: Category) -> Vec<char> {
    match category {
        Category::Lowercase => LOWERCASE.chars().collect(),
        Category::Uppercase => UPPERCASE.chars().collect(),
        Category::Digits => DIGITS.chars().collect(),
        Category::Symbols => policy
            .custom_symbols()
            .unwrap_or(DEFAULT_SYMBOLS)
            .chars()
            .collect(),
        Category::Space => vec![' '],
    }
}

/// Categories feeding the filler pool, in pool order.
///
/// In dictionary mode letters come last: words carry them, the pool only tops up.
fn pool_categories(policy: &Policy) -> Vec<Category> {
    let letters = [
        (policy.letters_lower, Category::Lowercase),
        (policy.letters_upper, Category::Uppercase),
    ]
    .into_iter()
    .filter_map(|(on, c)| on.then_some(c));

    if policy.dictionary_mode {
        let mut categories = policy.reserved_categories();
        categories.extend(letters);
        categories
    } else {
        let mut categories: Vec<Category> = letters.collect();
        categories.extend(policy.reserved_categories());
        categories
    }
}

/// Build the filler pool. Empty only when every category is disabled.
pub fn build(policy: &Policy) -> Vec<char> {
    pool_categories(policy)
        .into_iter()
        .flat_map(|category| range(policy, category))
        .collect()
}

/// Draw one representative per guaranteed category.
pub fn draw_guaranteed<R: Rng + ?Sized>(policy: &Policy, rng: &mut R) -> Vec<(Category, char)> {
    policy
        .guaranteed_categories()
        .into_iter()
        .filter_map(|category| match category {
            Category::Space => Some((category, ' ')),
            _ => range(policy, category)
                .choose(rng)
                .map(|&ch| (category, ch)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn pool_follows_enabled_categories() {
        let policy = Policy {
            letters_upper: false,
            symbols: false,
            ..Policy::default()
        };
        let pool = build(&policy);
        assert_eq!(pool.len(), 26 + 10);
        assert!(pool.iter().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn custom_symbols_replace_punctuation() {
        let policy = Policy {
            letters_lower: false,
            letters_upper: false,
            digits: false,
            custom_symbol_set: Some("§§€".into()),
            ..Policy::default()
        };
        assert_eq!(build(&policy), vec!['§', '§', '€']);
    }

    #[test]
    fn dictionary_pool_keeps_letters_but_guarantees_none() {
        let policy = Policy {
            dictionary_mode: true,
            spaces: true,
            ..Policy::default()
        };
        let pool = build(&policy);
        assert_eq!(pool.first(), Some(&'0'));
        assert!(pool.contains(&'a') && pool.contains(&'Z') && pool.contains(&' '));

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let drawn = draw_guaranteed(&policy, &mut rng);
        let categories: Vec<Category> = drawn.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            categories,
            vec![Category::Digits, Category::Symbols, Category::Space]
        );
        assert!(drawn[0].1.is_ascii_digit());
        assert!(DEFAULT_SYMBOLS.contains(drawn[1].1));
        assert_eq!(drawn[2].1, ' ');
    }

    #[test]
    fn nothing_enabled_means_empty_pool() {
        let policy = Policy {
            letters_lower: false,
            letters_upper: false,
            digits: false,
            symbols: false,
            ..Policy::default()
        };
        assert!(build(&policy).is_empty());
    }
}
