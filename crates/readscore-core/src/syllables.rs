//! Heuristic syllable counting.
//!
//! Counts vowel groups rather than looking words up, so results are rough
//! for English but stable for any input:
//!
//! 1. Vowels are `a`, `e`, `i`, `o`, `u`, `y`. Uppercase letters never count.
//! 2. A run of adjacent vowels counts once ("rain" has one group).
//! 3. A trailing lowercase `e` is silent ("side" has one syllable).
//! 4. Every word has at least one syllable.

/// Words with more than this many syllables are polysyllables.
pub const POLYSYLLABLE_THRESHOLD: usize = 2;

/// Estimate the number of syllables in a single word.
///
/// Always returns at least 1, including for the empty string.
pub fn count_syllables(word: &str) -> usize {
    let mut groups = 0usize;
    let mut in_vowel_run = false;

    for ch in word.chars() {
        let vowel = is_vowel(ch);
        if vowel && !in_vowel_run {
            groups += 1;
        }
        in_vowel_run = vowel;
    }

    if word.ends_with('e') {
        groups = groups.saturating_sub(1);
    }

    groups.max(1)
}

/// Whether a word with this many syllables counts as a polysyllable.
pub const fn is_polysyllable(syllables: usize) -> bool {
    syllables > POLYSYLLABLE_THRESHOLD
}

const fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
