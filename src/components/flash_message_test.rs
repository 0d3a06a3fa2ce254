use leptos::prelude::{GetUntracked, RwSignal};

use super::*;

#[test]
fn flash_fills_the_slot() {
    let slot = RwSignal::new(None::<String>);
    let gate = Debouncer::new();
    flash(slot, &gate, "something went wrong");
    assert_eq!(slot.get_untracked().as_deref(), Some("something went wrong"));
}

#[test]
fn newer_flash_supersedes_the_older_dismissal() {
    let slot = RwSignal::new(None::<String>);
    let gate = Debouncer::new();
    flash(slot, &gate, "first");
    flash(slot, &gate, "second");
    // The dismissal armed by the first flash is stale; only the second one
    // may clear the slot.
    assert!(!gate.is_current(1));
    assert!(gate.is_current(2));
    assert_eq!(slot.get_untracked().as_deref(), Some("second"));
}
