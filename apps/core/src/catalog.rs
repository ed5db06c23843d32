use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{Catalog, CatalogItem, CompactIndex, EntryKind, IndexEntry, SearchableEntry};
use crate::normalize::normalize;

#[derive(Debug)]
pub enum CatalogError {
    Io(PathBuf, std::io::Error),
    Json(PathBuf, serde_json::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, error) => write!(f, "failed to read {}: {error}", path.display()),
            Self::Json(path, error) => write!(f, "invalid catalog json in {}: {error}", path.display()),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Songs plus the optional compact index, as handed over by the loader.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub catalog: Catalog,
    pub index: Option<CompactIndex>,
}

impl CatalogSnapshot {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            index: None,
        }
    }

    pub fn with_index(catalog: Catalog, index: CompactIndex) -> Self {
        Self {
            catalog,
            index: Some(index),
        }
    }

    pub fn load(catalog_path: &Path, index_path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = load_catalog(catalog_path)?;
        let index = match index_path {
            Some(path) if path.exists() => Some(load_index(path)?),
            _ => None,
        };
        Ok(Self { catalog, index })
    }

    pub fn song_entries(&self) -> Vec<SearchableEntry> {
        match &self.index {
            Some(index) => song_entries_from_index(&self.catalog, index),
            None => song_entries(&self.catalog),
        }
    }

    pub fn artist_entries(&self) -> Vec<SearchableEntry> {
        artist_entries(&self.catalog)
    }
}

pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|e| CatalogError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&raw).map_err(|e| CatalogError::Json(path.to_path_buf(), e))
}

pub fn load_index(path: &Path) -> Result<CompactIndex, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|e| CatalogError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&raw).map_err(|e| CatalogError::Json(path.to_path_buf(), e))
}

pub fn write_index(path: &Path, index: &CompactIndex) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CatalogError::Io(parent.to_path_buf(), e))?;
    }
    let encoded =
        serde_json::to_string(index).map_err(|e| CatalogError::Json(path.to_path_buf(), e))?;
    fs::write(path, encoded).map_err(|e| CatalogError::Io(path.to_path_buf(), e))
}

pub fn build_index(catalog: &Catalog) -> CompactIndex {
    let songs = catalog
        .songs
        .iter()
        .map(|song| IndexEntry {
            id: song.id.clone(),
            t: normalize(song.title()),
            a: normalize(song.artist()),
            c: normalize(&song.labels().join(" ")),
        })
        .collect();
    CompactIndex { version: 1, songs }
}

pub fn song_entries(catalog: &Catalog) -> Vec<SearchableEntry> {
    catalog
        .songs
        .iter()
        .map(|song| SearchableEntry {
            kind: EntryKind::Song,
            reference: song.id.clone(),
            label: song.display_label(),
            text: normalize(&format!(
                "{} {} {}",
                song.title(),
                song.artist(),
                song.labels().join(" ")
            )),
        })
        .collect()
}

pub fn song_entries_from_index(catalog: &Catalog, index: &CompactIndex) -> Vec<SearchableEntry> {
    let by_id: HashMap<&str, &CatalogItem> = catalog
        .songs
        .iter()
        .map(|song| (song.id.as_str(), song))
        .collect();

    index
        .songs
        .iter()
        .map(|entry| {
            let label = match by_id.get(entry.id.as_str()) {
                Some(song) => song.display_label(),
                None => format!("{} — {}", entry.t, entry.a),
            };
            SearchableEntry {
                kind: EntryKind::Song,
                reference: entry.id.clone(),
                label,
                text: normalize(&format!("{} {} {}", entry.t, entry.a, entry.c)),
            }
        })
        .collect()
}

pub fn artist_entries(catalog: &Catalog) -> Vec<SearchableEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for song in &catalog.songs {
        let artist = song.artist().trim();
        if artist.is_empty() || !seen.insert(artist) {
            continue;
        }
        entries.push(SearchableEntry {
            kind: EntryKind::Artist,
            reference: artist.to_string(),
            label: artist.to_string(),
            text: normalize(artist),
        });
    }
    entries
}
