//! Dropdown Filter Component
//!
//! Labeled select for non-status filters (user type, project name).

use leptos::prelude::*;

#[component]
pub fn DropdownFilter(
    label: &'static str,
    /// (value, label) pairs
    options: Signal<Vec<(String, String)>>,
    /// Currently selected value, empty when unset
    selected: Signal<String>,
    /// Fires with the selected value, empty string for "all"
    #[prop(into)] on_select: Callback<String>,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="dropdown-filter">
            <span class="dropdown-filter-label">{label}</span>
            <select
                prop:value=move || selected.get()
                on:change=move |ev| on_select.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(value, label)| {
                            view! { <option value=value.clone()>{label}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
