//! Word-overlap similarity between queries

use std::collections::HashSet;

/// Words shorter than this many characters plus one are ignored
pub const MIN_WORD_LENGTH: usize = 3;

/// Lower-cased words longer than [`MIN_WORD_LENGTH`], punctuation stripped
pub fn query_words(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
        })
        .filter(|word| word.chars().count() > MIN_WORD_LENGTH)
        .collect()
}

/// `|A ∩ B| / max(|A|, |B|)`, 0 when either side is empty
pub fn overlap_ratio(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let larger = a.len().max(b.len());
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    shared as f64 / larger as f64
}
