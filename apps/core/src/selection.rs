use crate::model::{Hit, Selection};

/// Inputs the suggestion surface reacts to, independent of any input device.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// A debounced search pass finished with this list.
    Results(Vec<Hit>),
    QueryCleared,
    Cancel,
    MoveNext,
    MovePrevious,
    Confirm,
    /// Pointer pressed on the list; the next focus loss is ignored once.
    PointerDown,
    /// Pointer released on the entry at this index.
    Activate(usize),
    FocusLost,
    Dismiss,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionAction {
    Ignored,
    Opened,
    Highlighted(usize),
    Closed,
    Confirmed(Selection),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    results: Vec<Hit>,
    active_index: Option<usize>,
    suppress_close: bool,
}

impl SelectionState {
    pub fn is_open(&self) -> bool {
        self.active_index.is_some()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn results(&self) -> &[Hit] {
        &self.results
    }

    pub fn active_hit(&self) -> Option<&Hit> {
        self.active_index.and_then(|index| self.results.get(index))
    }

    pub fn suppress_close_pending(&self) -> bool {
        self.suppress_close
    }

    pub fn handle(&mut self, event: SelectionEvent) -> SelectionAction {
        match event {
            SelectionEvent::Results(results) => self.on_results(results),
            SelectionEvent::QueryCleared | SelectionEvent::Cancel | SelectionEvent::Dismiss => {
                self.close()
            }
            SelectionEvent::MoveNext => self.move_by(1),
            SelectionEvent::MovePrevious => self.move_by(-1),
            SelectionEvent::Confirm => self.confirm(),
            SelectionEvent::PointerDown => self.on_pointer_down(),
            SelectionEvent::Activate(index) => self.activate(index),
            SelectionEvent::FocusLost => self.on_focus_lost(),
        }
    }

    pub fn on_results(&mut self, results: Vec<Hit>) -> SelectionAction {
        if results.is_empty() {
            return self.close();
        }
        self.results = results;
        self.active_index = Some(0);
        SelectionAction::Opened
    }

    pub fn close(&mut self) -> SelectionAction {
        let was_open = self.is_open();
        self.results.clear();
        self.active_index = None;
        if was_open {
            SelectionAction::Closed
        } else {
            SelectionAction::Ignored
        }
    }

    pub fn move_by(&mut self, direction: i32) -> SelectionAction {
        let Some(current) = self.active_index else {
            return SelectionAction::Ignored;
        };
        let next = next_selection_index(current, self.results.len(), direction);
        self.active_index = Some(next);
        SelectionAction::Highlighted(next)
    }

    pub fn confirm(&mut self) -> SelectionAction {
        let Some(selection) = self.active_hit().map(Hit::selection) else {
            return SelectionAction::Ignored;
        };
        self.close();
        SelectionAction::Confirmed(selection)
    }

    pub fn activate(&mut self, index: usize) -> SelectionAction {
        if !self.is_open() || index >= self.results.len() {
            return SelectionAction::Ignored;
        }
        self.active_index = Some(index);
        self.confirm()
    }

    pub fn on_pointer_down(&mut self) -> SelectionAction {
        if self.is_open() {
            self.suppress_close = true;
        }
        SelectionAction::Ignored
    }

    pub fn on_focus_lost(&mut self) -> SelectionAction {
        if self.suppress_close {
            self.suppress_close = false;
            return SelectionAction::Ignored;
        }
        self.close()
    }
}

fn next_selection_index(current: usize, len: usize, direction: i32) -> usize {
    if len == 0 {
        return 0;
    }

    let max = len - 1;
    if direction < 0 {
        current.saturating_sub(1).min(max)
    } else if direction > 0 {
        (current + 1).min(max)
    } else {
        current.min(max)
    }
}
