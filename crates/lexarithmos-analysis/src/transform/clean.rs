//! Phrase cleaning: strip accents and punctuation, uppercase, split into words.

use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Clean `message` into uppercase words.
///
/// Accents are removed by decomposing (NFD), dropping every character with a
/// non-zero canonical combining class and recomposing (NFC). Marks of class 0,
/// such as U+034F, are kept and later rejected as unknown symbols. ASCII
/// punctuation is removed without inserting a space,
/// so `"ΛΟΓ-ΟΣ"` yields one word.
pub fn clean_message(message: &str) -> Vec<String> {
    let stripped: String = message
        .nfd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .nfc()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    stripped
        .to_uppercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
