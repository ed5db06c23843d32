use songfind_core::model::{EntryKind, Hit, SearchableEntry, Selection};
use songfind_core::selection::{SelectionAction, SelectionEvent, SelectionState};

fn hit(kind: EntryKind, reference: &str) -> Hit {
    Hit {
        entry: SearchableEntry {
            kind,
            reference: reference.to_string(),
            label: reference.to_string(),
            text: reference.to_lowercase(),
        },
        score: 0.5,
    }
}

fn three_hits() -> Vec<Hit> {
    vec![
        hit(EntryKind::Artist, "Prince"),
        hit(EntryKind::Song, "song:purple-rain"),
        hit(EntryKind::Song, "song:november-rain"),
    ]
}

#[test]
fn results_open_at_first_entry_and_moves_clamp() {
    let mut state = SelectionState::default();

    assert_eq!(
        state.handle(SelectionEvent::Results(three_hits())),
        SelectionAction::Opened
    );
    assert_eq!(state.active_index(), Some(0));

    for _ in 0..3 {
        state.handle(SelectionEvent::MoveNext);
    }
    assert_eq!(state.active_index(), Some(2));

    let confirmed = state.handle(SelectionEvent::Confirm);
    assert_eq!(
        confirmed,
        SelectionAction::Confirmed(Selection {
            kind: EntryKind::Song,
            reference: "song:november-rain".into(),
        })
    );
    assert!(!state.is_open());
    assert!(state.results().is_empty());
}

#[test]
fn move_previous_holds_at_first_entry() {
    let mut state = SelectionState::default();
    state.handle(SelectionEvent::Results(three_hits()));

    assert_eq!(
        state.handle(SelectionEvent::MovePrevious),
        SelectionAction::Highlighted(0)
    );
    state.handle(SelectionEvent::MoveNext);
    assert_eq!(
        state.handle(SelectionEvent::MovePrevious),
        SelectionAction::Highlighted(0)
    );
}

#[test]
fn empty_results_close_the_surface() {
    let mut state = SelectionState::default();
    state.handle(SelectionEvent::Results(three_hits()));

    assert_eq!(
        state.handle(SelectionEvent::Results(Vec::new())),
        SelectionAction::Closed
    );
    assert!(!state.is_open());
    assert_eq!(state.active_index(), None);
}

#[test]
fn new_results_replace_list_and_reset_index() {
    let mut state = SelectionState::default();
    state.handle(SelectionEvent::Results(three_hits()));
    state.handle(SelectionEvent::MoveNext);

    state.handle(SelectionEvent::Results(vec![hit(EntryKind::Artist, "Adele")]));

    assert_eq!(state.active_index(), Some(0));
    assert_eq!(state.results().len(), 1);
}

#[test]
fn cancel_dismiss_and_cleared_query_always_close() {
    for event in [
        SelectionEvent::Cancel,
        SelectionEvent::Dismiss,
        SelectionEvent::QueryCleared,
    ] {
        let mut state = SelectionState::default();
        state.handle(SelectionEvent::Results(three_hits()));
        assert_eq!(state.handle(event.clone()), SelectionAction::Closed);
        assert!(!state.is_open());

        assert_eq!(state.handle(event), SelectionAction::Ignored);
    }
}

#[test]
fn focus_loss_closes_without_pointer_interaction() {
    let mut state = SelectionState::default();
    state.handle(SelectionEvent::Results(three_hits()));

    assert_eq!(state.handle(SelectionEvent::FocusLost), SelectionAction::Closed);
}

#[test]
fn pointer_confirm_survives_focus_loss() {
    let mut state = SelectionState::default();
    state.handle(SelectionEvent::Results(three_hits()));

    state.handle(SelectionEvent::PointerDown);
    assert_eq!(state.handle(SelectionEvent::FocusLost), SelectionAction::Ignored);
    assert!(state.is_open());

    let action = state.handle(SelectionEvent::Activate(1));
    assert_eq!(
        action,
        SelectionAction::Confirmed(Selection {
            kind: EntryKind::Song,
            reference: "song:purple-rain".into(),
        })
    );
    assert!(!state.is_open());
}

#[test]
fn activate_out_of_range_is_ignored() {
    let mut state = SelectionState::default();
    state.handle(SelectionEvent::Results(three_hits()));

    assert_eq!(state.handle(SelectionEvent::Activate(3)), SelectionAction::Ignored);
    assert_eq!(state.active_index(), Some(0));
}
