/// Stop words dropped from both documents and queries.
/// The set is part of the tokenization contract: changing it changes every
/// vector in the index.
const STOP_WORDS: [&str; 18] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of",
    "with", "by", "is", "are", "was", "were",
];

/// Split text into lowercase alphanumeric terms.
///
/// Characters outside `[a-z0-9]` and whitespace are stripped in place, so
/// `"plastic-free"` becomes the single term `"plasticfree"` rather than two
/// words. Documents and queries must go through this same function or their
/// vectors stop being comparable.
///
/// # Examples
/// ```
/// use destination_recommender::recommender::tokenizer::tokenize;
/// assert_eq!(tokenize("The Himalayan Trek!!"), vec!["himalayan", "trek"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter_map(|ch| {
            let ch = ch.to_ascii_lowercase();
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace() {
                Some(ch)
            } else {
                None
            }
        })
        .collect();
    cleaned
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(tokenize("The Himalayan Trek!!"), vec!["himalayan", "trek"]);
    }

    #[test]
    fn removes_stop_words() {
        assert_eq!(
            tokenize("a trek to the mountains and back"),
            vec!["trek", "mountains", "back"]
        );
    }

    #[test]
    fn strips_inner_punctuation_without_splitting() {
        assert_eq!(tokenize("plastic-free zones"), vec!["plasticfree", "zones"]);
        assert_eq!(tokenize("it's"), vec!["its"]);
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(tokenize("Route 66 classics"), vec!["route", "66", "classics"]);
    }

    #[test]
    fn empty_and_noise_inputs_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
        assert!(tokenize("!!! ... ???").is_empty());
        assert!(tokenize("the and of").is_empty());
    }

    #[test]
    fn non_ascii_characters_are_stripped() {
        assert_eq!(tokenize("café crème"), vec!["caf", "crme"]);
    }
}
