use crate::admission::AdmissionTier;
use crate::catalog::CatalogSnapshot;
use crate::model::{Hit, SearchableEntry};
use crate::normalize::normalize;
use crate::similarity::{trigrams, Similarity};

pub const MAX_ARTIST_HITS: usize = 5;
pub const MAX_SUGGESTIONS: usize = 8;

const SUBSTRING_WEIGHT: f64 = 0.55;
const JACCARD_WEIGHT: f64 = 0.30;
const EDIT_WEIGHT: f64 = 0.15;

/// Ranks both pools of the snapshot and merges them into one suggestion list.
pub fn search(snapshot: &CatalogSnapshot, query: &str) -> Vec<Hit> {
    let normalized_query = normalize(query);
    if normalized_query.is_empty() {
        return Vec::new();
    }

    let artists = rank_pool(&normalized_query, snapshot.artist_entries());
    let songs = rank_pool(&normalized_query, snapshot.song_entries());
    merge(artists, songs)
}

pub fn score(query: &str, candidate: &str) -> f64 {
    weighted_score(&Similarity::measure(&normalize(query), &normalize(candidate)))
}

fn weighted_score(similarity: &Similarity) -> f64 {
    let substring = if similarity.substring { 1.0 } else { 0.0 };
    SUBSTRING_WEIGHT * substring + JACCARD_WEIGHT * similarity.jaccard + EDIT_WEIGHT * similarity.edit
}

/// Admits, scores and sorts one pool. Entries must carry normalized text.
/// Equal scores keep their pool order.
pub fn rank_pool(normalized_query: &str, pool: Vec<SearchableEntry>) -> Vec<Hit> {
    let Some(tier) = AdmissionTier::for_query_len(normalized_query.chars().count()) else {
        return Vec::new();
    };
    let query_trigrams = trigrams(normalized_query);

    let mut hits: Vec<Hit> = pool
        .into_iter()
        .filter(|entry| !entry.text.is_empty())
        .filter_map(|entry| {
            let similarity =
                Similarity::measure_with_trigrams(normalized_query, &query_trigrams, &entry.text);
            if !tier.accepts(&similarity) {
                return None;
            }
            Some(Hit {
                score: weighted_score(&similarity),
                entry,
            })
        })
        .collect();

    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits
}

pub fn merge(artists: Vec<Hit>, songs: Vec<Hit>) -> Vec<Hit> {
    let mut merged: Vec<Hit> = artists.into_iter().take(MAX_ARTIST_HITS).collect();
    let remaining = MAX_SUGGESTIONS - merged.len();
    merged.extend(songs.into_iter().take(remaining));
    merged
}
