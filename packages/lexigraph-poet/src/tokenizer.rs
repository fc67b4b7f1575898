//! Corpus and input tokenization.
//!
//! Words are non-empty strings of non-whitespace characters, delimited by
//! spaces, line breaks, or the ends of the text. Vertex identity is
//! case-insensitive, so corpus words are folded to lower case; input words
//! keep their original case for the generated output.

/// Split text into non-empty, case-folded words.
pub fn fold_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(|w| w.to_lowercase()).collect()
}

/// Split text into non-empty words, original case preserved.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
