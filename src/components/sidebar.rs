//! Sidebar Navigation

use leptos::prelude::*;

use crate::routes::{use_navigator, Route};
use crate::store::{self, use_session, SessionStateStoreFields};

#[component]
pub fn Sidebar(route: Signal<Route>) -> impl IntoView {
    let navigator = use_navigator();
    let session = use_session();

    let link_class = move |target: Route| {
        if route.get() == target {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let user_name = move || {
        session
            .user()
            .get()
            .map(|u| u.name)
            .unwrap_or_default()
    };

    let logout = move |_| {
        store::clear_auth(&session);
        navigator.go(Route::Login);
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"Admin"</div>
            <nav class="sidebar-nav">
                <button
                    type="button"
                    class=move || link_class(Route::Projects)
                    on:click=move |_| navigator.go(Route::Projects)
                >
                    "Projects"
                </button>
                <button
                    type="button"
                    class=move || link_class(Route::Range)
                    on:click=move |_| navigator.go(Route::Range)
                >
                    "Range"
                </button>
            </nav>
            <div class="sidebar-footer">
                <span class="sidebar-user">{user_name}</span>
                <button type="button" class="logout-button" on:click=logout>
                    "Log out"
                </button>
            </div>
        </aside>
    }
}
