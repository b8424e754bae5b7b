//! Application Root
//!
//! Composition root: builds the session store and app context, owns the
//! route signal, and gates dashboard pages behind authentication.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Sidebar;
use crate::context::AppContext;
use crate::pages::{
    ForgotPasswordPage, LoginPage, ProjectsPage, RangePage, ResetPasswordPage, VerifyCodePage,
};
use crate::routes::{Navigator, Route};
use crate::store::{self, SessionStateStoreFields};
use crate::url_state;

#[component]
pub fn App() -> impl IntoView {
    let session = Store::new(store::load_session());
    provide_context(session);
    provide_context(AppContext::new());

    let (route, set_route) = signal(Route::from_path(&url_state::pathname()));
    provide_context(Navigator::new(set_route));

    // Back/forward navigation
    let popstate = window_event_listener(ev::popstate, move |_| {
        set_route.set(Route::from_path(&url_state::pathname()));
    });
    on_cleanup(move || popstate.remove());

    // An authenticated session never shows the auth pages; normalize the
    // route and URL so the sidebar reflects the page actually rendered.
    Effect::new(move |_| {
        if route.get().is_auth_page() && session.is_authenticated().get() {
            url_state::replace_url(Route::Projects.path());
            set_route.set(Route::Projects);
        }
    });

    view! {
        {move || {
            let current = route.get();
            let authenticated = session.is_authenticated().get();
            match (current, authenticated) {
                (Route::Login, false) => auth_layout(view! { <LoginPage /> }),
                (Route::ForgotPassword, false) => auth_layout(view! { <ForgotPasswordPage /> }),
                (Route::VerifyCode, false) => auth_layout(view! { <VerifyCodePage /> }),
                (Route::ResetPassword, false) => auth_layout(view! { <ResetPasswordPage /> }),
                // No session: everything else lands on login
                (_, false) => auth_layout(view! { <LoginPage /> }),
                (Route::Range, true) => main_layout(route.into(), view! { <RangePage /> }),
                // Authenticated users skip the auth pages
                (_, true) => main_layout(route.into(), view! { <ProjectsPage /> }),
            }
        }}
    }
}

fn auth_layout(page: impl IntoView) -> AnyView {
    view! { <div class="auth-layout">{page}</div> }.into_any()
}

fn main_layout(route: Signal<Route>, page: impl IntoView) -> AnyView {
    view! {
        <div class="app-layout">
            <Sidebar route=route />
            <main class="main-content">{page}</main>
        </div>
    }
    .into_any()
}
