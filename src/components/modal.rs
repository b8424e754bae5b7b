//! Modal Lifecycle
//!
//! Concerns shared by the create/edit modals: closing on Escape, locking
//! body scroll while open, and the submit button caption. Call
//! [`use_modal_lifecycle`] from a component that is only mounted while its
//! modal is open; cleanup runs when it unmounts.

use leptos::ev;
use leptos::prelude::*;

pub fn use_modal_lifecycle(on_close: Callback<()>) {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    if let Some(body) = document().body() {
        let _ = body.style().set_property("overflow", "hidden");
    }
    on_cleanup(|| {
        if let Some(body) = document().body() {
            let _ = body.style().set_property("overflow", "unset");
        }
    });
}

/// Caption for the modal submit button.
pub fn submit_label(is_submitting: bool, is_editing: bool) -> &'static str {
    match (is_submitting, is_editing) {
        (true, true) => "Saving...",
        (true, false) => "Creating...",
        (false, true) => "Save",
        (false, false) => "Create",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(false, false), "Create");
        assert_eq!(submit_label(false, true), "Save");
        assert_eq!(submit_label(true, false), "Creating...");
        assert_eq!(submit_label(true, true), "Saving...");
    }
}
