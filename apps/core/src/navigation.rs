use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::model::{Catalog, EntryKind, Selection};

/// Where the host should scroll to: the section to expand and the anchor in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTarget {
    pub kind: EntryKind,
    pub section: String,
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationError {
    message: String,
}

impl NavigationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for NavigationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for NavigationError {}

pub trait Navigator {
    fn navigate(&mut self, target: &NavigationTarget) -> Result<(), NavigationError>;
}

pub fn resolve_target(catalog: &Catalog, selection: &Selection) -> Option<NavigationTarget> {
    match selection.kind {
        EntryKind::Song => {
            let song = catalog.song(&selection.reference)?;
            Some(NavigationTarget {
                kind: EntryKind::Song,
                section: song.primary_section().to_string(),
                anchor: song.id.clone(),
            })
        }
        EntryKind::Artist => {
            let first_song = catalog
                .songs
                .iter()
                .find(|song| song.artist().trim() == selection.reference)?;
            Some(NavigationTarget {
                kind: EntryKind::Artist,
                section: first_song.primary_section().to_string(),
                anchor: selection.reference.clone(),
            })
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    targets: Vec<NavigationTarget>,
}

impl RecordingNavigator {
    pub fn targets(&self) -> &[NavigationTarget] {
        &self.targets
    }

    pub fn take_targets(&mut self) -> Vec<NavigationTarget> {
        std::mem::take(&mut self.targets)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, target: &NavigationTarget) -> Result<(), NavigationError> {
        self.targets.push(target.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&mut self, target: &NavigationTarget) -> Result<(), NavigationError> {
        log::info!(
            "navigate kind={:?} section={} anchor={}",
            target.kind,
            target.section,
            target.anchor
        );
        Ok(())
    }
}
