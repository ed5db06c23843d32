use std::collections::HashSet;

pub type TrigramSet = HashSet<String>;

/// Padded character trigrams of already normalized text.
pub fn trigrams(text: &str) -> TrigramSet {
    if text.is_empty() {
        return TrigramSet::new();
    }

    let padded: Vec<char> = "  ".chars().chain(text.chars()).chain("  ".chars()).collect();
    padded
        .windows(3)
        .map(|window| window.iter().collect::<String>())
        .collect()
}

pub fn jaccard(a: &TrigramSet, b: &TrigramSet) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|gram| large.contains(*gram)).count();
    let union = (a.len() + b.len() - intersection).max(1);
    intersection as f64 / union as f64
}

pub fn contains(text: &str, query: &str) -> bool {
    !query.is_empty() && text.contains(query)
}

/// Damerau–Levenshtein distance in its optimal string alignment form:
/// a transposition only swaps two adjacent characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::osa_distance(a, b)
}

pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count()).max(1);
    1.0 - edit_distance(a, b) as f64 / longest as f64
}

/// The three measures between a normalized query and a normalized candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Similarity {
    pub substring: bool,
    pub jaccard: f64,
    pub edit: f64,
}

impl Similarity {
    pub fn measure(query: &str, text: &str) -> Self {
        Self::measure_with_trigrams(query, &trigrams(query), text)
    }

    pub fn measure_with_trigrams(query: &str, query_trigrams: &TrigramSet, text: &str) -> Self {
        Self {
            substring: contains(text, query),
            jaccard: jaccard(query_trigrams, &trigrams(text)),
            edit: edit_similarity(query, text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{edit_distance, edit_similarity, jaccard, trigrams};

    #[test]
    fn trigrams_include_padded_boundaries() {
        let grams = trigrams("ab");
        let mut sorted: Vec<&str> = grams.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["  a", " ab", "ab ", "b  "]);
    }

    #[test]
    fn trigrams_are_deduplicated() {
        assert_eq!(trigrams("aaaa").len(), 5);
        assert!(trigrams("").is_empty());
    }

    #[test]
    fn jaccard_of_two_empty_sets_is_zero() {
        assert_eq!(jaccard(&trigrams(""), &trigrams("")), 0.0);
    }

    #[test]
    fn edit_distance_matches_known_values() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("ab", "ba"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("ca", "abc"), 3);
        assert_eq!(edit_distance("abab", "baab"), 1);
    }

    #[test]
    fn edit_similarity_of_empty_strings_is_one() {
        assert_eq!(edit_similarity("", ""), 1.0);
        assert_eq!(edit_similarity("abcd", "abcd"), 1.0);
    }
}
