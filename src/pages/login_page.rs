//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, LoginRequest};
use crate::routes::{use_navigator, Route};
use crate::store::{self, use_session};
use crate::validate::is_valid_email;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigator = use_navigator();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal(None::<&'static str>);
    let (password_error, set_password_error) = signal(None::<&'static str>);
    let (form_error, set_form_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();

        let mut valid = true;
        if !is_valid_email(&email_value) {
            set_email_error.set(Some("Invalid email"));
            valid = false;
        } else {
            set_email_error.set(None);
        }
        if password_value.is_empty() {
            set_password_error.set(Some("Invalid password"));
            valid = false;
        } else {
            set_password_error.set(None);
        }
        if !valid {
            return;
        }

        set_form_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let request = LoginRequest {
                email: email_value,
                password: password_value,
            };
            let result = api::login(&request).await;
            // try_set returns the value back if the page unmounted mid-flight
            if set_submitting.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(response) => {
                    store::set_auth(&session, response.access_token, response.user);
                    navigator.go(Route::Projects);
                }
                Err(err) => {
                    set_form_error.set(Some(
                        err.user_message("Failed to login. Please check your credentials."),
                    ));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Sign in"</h1>
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
                <div class="field">
                    <input
                        type="password"
                        placeholder="Password"
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
                        on:click=move |_| navigator.go(Route::ForgotPassword)
                    >
                        "Forgot password"
                    </button>
                    <button type="submit" class="primary" disabled=move || submitting.get()>
                        "Sign in"
                    </button>
                </div>
            </form>
        </div>
    }
}
