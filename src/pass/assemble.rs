//! Assembly of words, guaranteed characters and filler into one password.
//!
//! Units are shuffled whole, so a word always stays contiguous. The joined string is cut
//! to the target length afterwards; units that land past the cut are reported.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use zeroize::{Zeroize, Zeroizing};

use crate::policy::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Guaranteed(Category),
    Word,
    Filler,
}

/// One indivisible fragment of the password. Wiped on drop.
#[derive(Debug)]
pub struct Unit {
    pub text: String,
    pub kind: UnitKind,
}

impl Unit {
    fn word(text: String) -> Self {
        Self {
            text,
            kind: UnitKind::Word,
        }
    }

    fn single(ch: char, kind: UnitKind) -> Self {
        Self {
            text: ch.to_string(),
            kind,
        }
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Drop for Unit {
    fn drop(&mut self) {
        self.text.zeroize();
    }
}

/// Words in order, with one guaranteed character between each pair of words while any
/// remain. Leftover guaranteed characters go after the last word.
pub fn interleave(words: Vec<String>, guaranteed: Vec<(Category, char)>) -> Vec<Unit> {
    let mut pending = guaranteed.into_iter();
    let last = words.len().saturating_sub(1);
    let mut units = Vec::with_capacity(words.len() * 2);

    for (i, word) in words.into_iter().enumerate() {
        units.push(Unit::word(word));
        if i < last
            && let Some((category, ch)) = pending.next()
        {
            units.push(Unit::single(ch, UnitKind::Guaranteed(category)));
        }
    }
    units.extend(pending.map(|(category, ch)| Unit::single(ch, UnitKind::Guaranteed(category))));
    units
}

/// Guaranteed characters as units, in draw order.
pub fn guaranteed_only(guaranteed: Vec<(Category, char)>) -> Vec<Unit> {
    guaranteed
        .into_iter()
        .map(|(category, ch)| Unit::single(ch, UnitKind::Guaranteed(category)))
        .collect()
}

/// Top the units up to `target` characters with random pool characters.
/// Returns the number of filler units added.
pub fn fill<R: Rng + ?Sized>(units: &mut Vec<Unit>, pool: &[char], target: usize, rng: &mut R) -> usize {
    let current: usize = units.iter().map(Unit::len).sum();
    let missing = target.saturating_sub(current);
    let before = units.len();

    units.extend(
        (0..missing)
            .filter_map(|_| pool.choose(rng))
            .map(|&ch| Unit::single(ch, UnitKind::Filler)),
    );
    units.len() - before
}

/// Fisher-Yates over whole units.
pub fn shuffle<R: Rng + ?Sized>(units: &mut [Unit], rng: &mut R) {
    units.shuffle(rng);
}

/// Result of joining units and cutting to length.
#[derive(Debug)]
pub struct Joined {
    pub text: Zeroizing<String>,
    /// Characters removed by the cut.
    pub truncated: usize,
    /// Categories whose guaranteed character was cut.
    pub dropped: Vec<Category>,
    /// Word units that lost at least one character.
    pub cut_words: usize,
}

/// Concatenate units in order and keep the first `target` characters.
pub fn join(units: &[Unit], target: usize) -> Joined {
    let mut text = Zeroizing::new(String::with_capacity(target));
    let mut dropped = Vec::new();
    let mut cut_words = 0;
    let mut pos = 0;

    for unit in units {
        let len = unit.len();
        if pos + len > target {
            match unit.kind {
                UnitKind::Guaranteed(category) => dropped.push(category),
                UnitKind::Word => cut_words += 1,
                UnitKind::Filler => {}
            }
        }
        let keep = target.saturating_sub(pos).min(len);
        text.extend(unit.text.chars().take(keep));
        pos += len;
    }

    Joined {
        text,
        truncated: pos.saturating_sub(target),
        dropped,
        cut_words,
    }
}
