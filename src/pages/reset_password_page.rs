//! Reset Password Page
//!
//! Final step of the reset flow: set a new password using the short-lived
//! token from code verification (carried as a query parameter).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::routes::{use_navigator, Route};
use crate::url_state;

const MIN_PASSWORD_LEN: usize = 8;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigator = use_navigator();

    let token = url_state::query_param("token");
    let token_missing = token.is_none();
    Effect::new(move |_| {
        if token_missing {
            navigator.go(Route::ForgotPassword);
        }
    });
    let token = token.unwrap_or_default();

    let (password, set_password) = signal(String::new());
    let (password_error, set_password_error) = signal(None::<&'static str>);
    let (form_error, set_form_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let password_value = password.get_untracked();
        if password_value.len() < MIN_PASSWORD_LEN {
            set_password_error.set(Some("Password must be at least 8 characters"));
            return;
        }
        set_password_error.set(None);
        set_form_error.set(None);
        set_submitting.set(true);

        let token_value = token.clone();
        spawn_local(async move {
            let result = api::reset_password(password_value, &token_value).await;
            // try_set returns the value back if the page unmounted mid-flight
            if set_submitting.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(_) => navigator.go(Route::Login),
                Err(err) => {
                    set_form_error.set(Some(err.user_message("Failed to reset password")));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Reset password"</h1>
            <form class="auth-form" on:submit=submit>
                <div class="field">
                    <input
                        type="password"
                        placeholder="New password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    {move || {
                        password_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })
                    }}
                </div>

                {move || form_error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                <div class="auth-buttons">
                    <button
                        type="button"
                        class="secondary"
                        on:click=move |_| navigator.go(Route::Login)
                    >
                        "Back to sign in"
                    </button>
                    <button type="submit" class="primary" disabled=move || submitting.get()>
                        "Reset password"
                    </button>
                </div>
            </form>
        </div>
    }
}
