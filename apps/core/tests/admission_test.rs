use songfind_core::admission::{admits, admits_normalized, AdmissionTier};
use songfind_core::search::score;

#[test]
fn short_query_substring_is_admitted_regardless_of_thresholds() {
    assert!(admits("cat", "category"));
    assert!(admits("CAT", "Category!"));
}

#[test]
fn empty_query_or_candidate_is_rejected() {
    assert!(!admits("", "anything"));
    assert!(!admits("  !! ", "anything"));
    assert!(!admits("rain", ""));
    assert!(!admits("rain", "???"));
}

#[test]
fn long_misspelling_is_admitted_by_edit_similarity() {
    assert!(admits("wondrful", "wonderful"));
    assert!(admits("wondrful", "Wonderful"));
}

#[test]
fn misspelling_against_longer_text_falls_below_thresholds() {
    // distance 9 over 17 characters and 7 of 22 trigrams shared
    assert!(!admits("wondrful", "wonderful tonight"));
}

#[test]
fn misspelled_match_scores_above_unrelated_text() {
    let matched = score("wondrful", "wonderful");
    let unrelated = score("wondrful", "yesterday");
    assert!(matched > unrelated);
    assert!(!admits("wondrful", "yesterday"));
}

#[test]
fn short_queries_need_closer_matches_than_long_ones() {
    // one substitution in three characters
    assert!(!admits_normalized("abx", "abc"));
    // one substitution in eight characters
    assert!(admits_normalized("abcdefgx", "abcdefgh"));
}

#[test]
fn tiers_tighten_as_queries_shrink() {
    let short = AdmissionTier::Short;
    let medium = AdmissionTier::Medium;
    let long = AdmissionTier::Long;
    assert!(short.min_jaccard() > medium.min_jaccard());
    assert!(medium.min_jaccard() > long.min_jaccard());
    assert!(short.min_edit_similarity() > medium.min_edit_similarity());
    assert!(medium.min_edit_similarity() > long.min_edit_similarity());
}
