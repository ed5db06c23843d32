use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_labels",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,
}

/// `categories` that is null or not a list of strings counts as no labels,
/// so the legacy `category` still applies.
fn lenient_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Labels {
        List(Vec<Option<String>>),
        Other(IgnoredAny),
    }

    Ok(match Labels::deserialize(deserializer)? {
        Labels::List(labels) => labels.into_iter().flatten().collect(),
        Labels::Other(_) => Vec::new(),
    })
}

impl CatalogItem {
    pub fn new(id: &str, title: &str, artist: &str, categories: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: Some(title.to_string()),
            artist: Some(artist.to_string()),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn artist(&self) -> &str {
        self.artist.as_deref().unwrap_or_default()
    }

    /// Labels the song is filed under: the `categories` list, else the legacy
    /// single `category`, else nothing.
    pub fn labels(&self) -> Vec<&str> {
        if !self.categories.is_empty() {
            return self.categories.iter().map(String::as_str).collect();
        }
        self.category.as_deref().map(|c| vec![c]).unwrap_or_default()
    }

    pub fn primary_section(&self) -> &str {
        self.labels()
            .into_iter()
            .find(|label| !label.trim().is_empty())
            .unwrap_or(UNCATEGORIZED)
    }

    pub fn display_label(&self) -> String {
        format!("{} — {}", self.title().trim(), self.artist().trim())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub songs: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(songs: Vec<CatalogItem>) -> Self {
        Self {
            categories: Vec::new(),
            songs,
        }
    }

    pub fn song(&self, id: &str) -> Option<&CatalogItem> {
        self.songs.iter().find(|song| song.id == id)
    }
}

/// Build-time projection of the catalog: one pre-normalized row per song.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactIndex {
    #[serde(default = "default_index_version")]
    pub version: u32,
    #[serde(default)]
    pub songs: Vec<IndexEntry>,
}

fn default_index_version() -> u32 {
    1
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: String,
    #[serde(default)]
    pub t: String,
    #[serde(default)]
    pub a: String,
    #[serde(default)]
    pub c: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Song,
    Artist,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchableEntry {
    pub kind: EntryKind,
    /// Song id for songs, artist name for artists.
    pub reference: String,
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub entry: SearchableEntry,
    pub score: f64,
}

impl Hit {
    pub fn kind(&self) -> EntryKind {
        self.entry.kind
    }

    pub fn selection(&self) -> Selection {
        Selection {
            kind: self.entry.kind,
            reference: self.entry.reference.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub kind: EntryKind,
    pub reference: String,
}
