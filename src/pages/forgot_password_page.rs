//! Forgot Password Page
//!
//! First step of the reset flow: request a verification code, then carry
//! the email to the verify-code page as a query parameter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::routes::{use_navigator, Route};
use crate::validate::is_valid_email;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let navigator = use_navigator();

    let (email, set_email) = signal(String::new());
    let (email_error, set_email_error) = signal(None::<&'static str>);
    let (form_error, set_form_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let email_value = email.get_untracked().trim().to_string();
        if !is_valid_email(&email_value) {
            set_email_error.set(Some("Invalid email"));
            return;
        }
        set_email_error.set(None);
        set_form_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let result = api::forgot_password(&email_value).await;
            // try_set returns the value back if the page unmounted mid-flight
            if set_submitting.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(_) => {
                    navigator.go_with(Route::VerifyCode, &[("email", email_value)]);
                }
                Err(err) => {
                    set_form_error.set(Some(err.user_message("Failed to send reset code")));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Forgot password"</h1>
            <p>"Enter your email and we will send you a verification code."</p>
            <form class="auth-form" on:submit=submit>
                <div class="field">
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    {move || email_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                {move || form_error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                <div class="auth-buttons">
                    <button
                        type="button"
                        class="secondary"
                        on:click=move |_| navigator.go(Route::Login)
                    >
                        "Back"
                    </button>
                    <button type="submit" class="primary" disabled=move || submitting.get()>
                        "Send code"
                    </button>
                </div>
            </form>
        </div>
    }
}
