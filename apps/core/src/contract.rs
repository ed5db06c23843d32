use serde::{Deserialize, Serialize};

use crate::model::{EntryKind, Hit, Selection};
use crate::navigation::NavigationTarget;
use crate::selection::SelectionEvent;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputRequest {
    pub query: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRequest {
    QueryCleared,
    Cancel,
    MoveNext,
    MovePrevious,
    Confirm,
    PointerDown,
    Activate { index: usize },
    FocusLost,
    Dismiss,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionDto {
    pub kind: EntryKind,
    pub reference: String,
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub suggestions: Vec<SuggestionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionResponse {
    pub open: bool,
    pub active_index: Option<usize>,
    pub pass_pending: bool,
    pub suggestions: Vec<SuggestionDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<Selection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<NavigationTarget>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum CoreRequest {
    Search(SearchRequest),
    Input(InputRequest),
    Flush,
    Event(EventRequest),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum CoreResponse {
    Search(SearchResponse),
    Selection(SelectionResponse),
}

impl From<&Hit> for SuggestionDto {
    fn from(value: &Hit) -> Self {
        Self {
            kind: value.entry.kind,
            reference: value.entry.reference.clone(),
            label: value.entry.label.clone(),
            score: value.score,
        }
    }
}

impl From<EventRequest> for SelectionEvent {
    fn from(value: EventRequest) -> Self {
        match value {
            EventRequest::QueryCleared => Self::QueryCleared,
            EventRequest::Cancel => Self::Cancel,
            EventRequest::MoveNext => Self::MoveNext,
            EventRequest::MovePrevious => Self::MovePrevious,
            EventRequest::Confirm => Self::Confirm,
            EventRequest::PointerDown => Self::PointerDown,
            EventRequest::Activate { index } => Self::Activate(index),
            EventRequest::FocusLost => Self::FocusLost,
            EventRequest::Dismiss => Self::Dismiss,
        }
    }
}
