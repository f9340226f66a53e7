//! Text segmentation.
//!
//! Splits a document into sentences and sentences into words. The rules are
//! deliberately loose: there is no abbreviation, decimal, or URL awareness.
//!
//! - A sentence is a run of characters other than `.`, `!`, `?`, ended by at
//!   most one of those terminators. Every character of the input lands in
//!   exactly one sentence, so a second terminator in a row (`"?!"`) becomes a
//!   fragment of its own and trailing text without a terminator (even a lone
//!   newline) is a sentence too.
//! - A word is a maximal run of non-whitespace characters. Punctuation stays
//!   attached to the word.

/// Split text into sentence fragments, in document order.
///
/// Returned slices borrow from `text` and concatenate back to it exactly.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn segment(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if is_sentence_terminator(ch) {
            let end = idx + ch.len_utf8();
            sentences.push(&text[start..end]);
            start = end;
        }
    }

    // Remaining text
    if start < text.len() {
        sentences.push(&text[start..]);
    }

    tracing::debug!(sentences = sentences.len(), "segmented text");
    sentences
}

/// Split a sentence into words on ASCII whitespace.
///
/// Whitespace runs never produce empty words.
pub fn words(sentence: &str) -> impl Iterator<Item = &str> {
    sentence.split_ascii_whitespace()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}
