//! Search Input Component

use leptos::prelude::*;

/// Controlled search box; the owning page decides when the value reaches
/// the controller (search changes are debounced there).
#[component]
pub fn SearchInput(
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(default = "Search...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
