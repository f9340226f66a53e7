//! Whole-document counts used by every readability formula.

use serde::{Deserialize, Serialize};

use crate::syllables;
use crate::text;

/// Counts gathered from a segmented document.
///
/// Invariants: `characters` is the sum of word lengths,
/// `polysyllables <= words`, and `syllables >= words`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregates {
    /// Number of whitespace-delimited words.
    pub words: usize,
    /// Number of sentence fragments, degenerate ones included.
    pub sentences: usize,
    /// Total word length in characters, punctuation included.
    pub characters: usize,
    /// Total estimated syllables.
    pub syllables: usize,
    /// Words with more than two syllables.
    pub polysyllables: usize,
}

impl Aggregates {
    /// Segment `text` and aggregate the result.
    pub fn from_text(text: &str) -> Self {
        aggregate(&text::segment(text))
    }

    /// Return these counts with one more word folded in.
    #[must_use]
    pub fn with_word(self, word: &str) -> Self {
        let syllables = syllables::count_syllables(word);
        let polysyllable = usize::from(syllables::is_polysyllable(syllables));
        Self {
            words: self.words + 1,
            characters: self.characters + word.chars().count(),
            syllables: self.syllables + syllables,
            polysyllables: self.polysyllables + polysyllable,
            ..self
        }
    }
}

/// Fold a sequence of sentences into document counts.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn aggregate<S: AsRef<str>>(sentences: &[S]) -> Aggregates {
    let start = Aggregates {
        sentences: sentences.len(),
        ..Aggregates::default()
    };

    let totals = sentences
        .iter()
        .flat_map(|s| text::words(s.as_ref()))
        .fold(start, Aggregates::with_word);

    tracing::debug!(
        words = totals.words,
        characters = totals.characters,
        syllables = totals.syllables,
        polysyllables = totals.polysyllables,
        "aggregated text"
    );
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(agg: &Aggregates) {
        assert!(agg.syllables >= agg.words, "{agg:?}");
        assert!(agg.polysyllables <= agg.words, "{agg:?}");
    }

    #[test]
    fn counts_simple_text() {
        let agg = Aggregates::from_text("The cat sat. It was happy!");
        assert_eq!(agg.words, 6);
        assert_eq!(agg.sentences, 2);
        // The(3) cat(3) sat.(4) It(2) was(3) happy!(6)
        assert_eq!(agg.characters, 21);
        // happy! has two vowel groups, everything else one
        assert_eq!(agg.syllables, 7);
        assert_eq!(agg.polysyllables, 0);
    }

    #[test]
    fn counts_polysyllables() {
        let agg = Aggregates::from_text("A banana is beautiful.");
        assert_eq!(agg.words, 4);
        assert_eq!(agg.polysyllables, 2);
        assert_invariants(&agg);
    }

    #[test]
    fn degenerate_fragments_count_as_sentences() {
        let agg = Aggregates::from_text("Hello world. How are you? Great!!");
        assert_eq!(agg.sentences, 4);
        // the lone "!" is a word too
        assert_eq!(agg.words, 7);
    }

    #[test]
    fn empty_text_is_all_zero() {
        assert_eq!(Aggregates::from_text(""), Aggregates::default());
    }

    #[test]
    fn whitespace_sentence_adds_no_words() {
        let agg = aggregate(&["Hi there.", "   "]);
        assert_eq!(agg.sentences, 2);
        assert_eq!(agg.words, 2);
    }

    #[test]
    fn invariants_hold_for_assorted_inputs() {
        for text in [
            "",
            "e e e",
            "Supercalifragilisticexpialidocious!",
            "AEIOU. BCD? xyz!",
            "Readability formulas estimate comprehension difficulty.\n\nAnother paragraph here",
            "...!!!???",
        ] {
            assert_invariants(&Aggregates::from_text(text));
        }
    }
}
