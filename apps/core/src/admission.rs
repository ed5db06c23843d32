use crate::normalize::normalize;
use crate::similarity::Similarity;

/// Threshold row chosen by normalized query length. Short queries carry few
/// trigrams and a large relative edit cost, so their thresholds are stricter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionTier {
    Short,
    Medium,
    Long,
}

impl AdmissionTier {
    pub fn for_query_len(len: usize) -> Option<Self> {
        match len {
            0 => None,
            1..=3 => Some(Self::Short),
            4..=6 => Some(Self::Medium),
            _ => Some(Self::Long),
        }
    }

    pub fn min_jaccard(self) -> f64 {
        match self {
            Self::Short => 0.60,
            Self::Medium => 0.45,
            Self::Long => 0.40,
        }
    }

    pub fn min_edit_similarity(self) -> f64 {
        match self {
            Self::Short => 0.85,
            Self::Medium => 0.80,
            Self::Long => 0.78,
        }
    }

    // Substring containment always passes, whatever the tier.
    pub fn accepts(self, similarity: &Similarity) -> bool {
        similarity.substring
            || similarity.jaccard >= self.min_jaccard()
            || similarity.edit >= self.min_edit_similarity()
    }
}

/// Hard gate over raw text. Both sides are normalized first.
pub fn admits(query: &str, candidate: &str) -> bool {
    admits_normalized(&normalize(query), &normalize(candidate))
}

pub fn admits_normalized(query: &str, candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }
    let Some(tier) = AdmissionTier::for_query_len(query.chars().count()) else {
        return false;
    };
    tier.accepts(&Similarity::measure(query, candidate))
}
