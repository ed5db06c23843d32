use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical comparison form: diacritics stripped, lowercase ASCII letters and
/// digits separated by single spaces.
///
/// Only combining marks are dropped. Spacing accents such as `` ` ``, `^` and
/// `´` separate words like any other punctuation.
pub fn normalize(input: &str) -> String {
    let folded = input
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    let mut normalized = String::with_capacity(folded.len());
    for word in folded
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|word| !word.is_empty())
    {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }
    normalized
}
