//! Verify Code Page
//!
//! Second step of the reset flow: exchange the emailed code for a reset
//! token. The email arrives as a query parameter; without it the page
//! bounces back to forgot-password.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::routes::{use_navigator, Route};
use crate::url_state;

#[component]
pub fn VerifyCodePage() -> impl IntoView {
    let navigator = use_navigator();

    let email = url_state::query_param("email");
    let email_missing = email.is_none();
    Effect::new(move |_| {
        if email_missing {
            navigator.go(Route::ForgotPassword);
        }
    });
    let email = email.unwrap_or_default();

    let (code, set_code) = signal(String::new());
    let (code_error, set_code_error) = signal(None::<&'static str>);
    let (form_error, set_form_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let code_value = code.get_untracked().trim().to_string();
        if code_value.is_empty() {
            set_code_error.set(Some("Code is required"));
            return;
        }
        set_code_error.set(None);
        set_form_error.set(None);
        set_submitting.set(true);

        let email_value = email.clone();
        spawn_local(async move {
            let result = api::verify_reset_code(&email_value, &code_value).await;
            // try_set returns the value back if the page unmounted mid-flight
            if set_submitting.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(response) => {
                    navigator.go_with(Route::ResetPassword, &[("token", response.reset_token)]);
                }
                Err(err) => {
                    set_form_error.set(Some(err.user_message("Failed to verify code")));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Verify code"</h1>
            <p>"Enter the verification code we sent to your email."</p>
            <form class="auth-form" on:submit=submit>
                <div class="field">
                    <input
                        type="text"
                        placeholder="Verification code"
                        prop:value=move || code.get()
                        on:input=move |ev| set_code.set(event_target_value(&ev))
                    />
                    {move || code_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                {move || form_error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                <div class="auth-buttons">
                    <button
                        type="button"
                        class="secondary"
                        on:click=move |_| navigator.go(Route::ForgotPassword)
                    >
                        "Back"
                    </button>
                    <button type="submit" class="primary" disabled=move || submitting.get()>
                        "Verify"
                    </button>
                </div>
            </form>
        </div>
    }
}
