//! Status Filter Component
//!
//! Select over a status enum's encoded values. Works on encoded strings so
//! one component serves both entities; the page decodes the selection.

use leptos::prelude::*;

#[component]
pub fn StatusFilter(
    /// (encoded value, label) pairs in display order
    options: Vec<(&'static str, &'static str)>,
    /// Currently selected encoded value, empty when unset
    selected: Signal<String>,
    /// Fires with the encoded value, empty string for "all"
    #[prop(into)] on_select: Callback<String>,
    #[prop(default = "All statuses")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <select
            class="status-filter"
            prop:value=move || selected.get()
            on:change=move |ev| on_select.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {options
                .into_iter()
                .map(|(value, label)| view! { <option value=value>{label}</option> })
                .collect_view()}
        </select>
    }
}
