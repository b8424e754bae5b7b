//! User Create/Edit Modal
//!
//! Create mode captures a password and role for the new account; edit mode
//! updates name, email, status and user type. Field validation is inline
//! and blocks submission.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateUserParams, UpdateUserParams};
use crate::components::modal::{submit_label, use_modal_lifecycle};
use crate::context::use_app_context;
use crate::models::{UserRange, UserRole, UserStatus, USER_ROLES, USER_STATUS_ORDER};
use crate::query::QueryCodec;
use crate::store::{self, use_session};
use crate::validate::{is_valid_email, required_trimmed};

#[component]
pub fn UserModal(user: Option<UserRange>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let is_editing = user.is_some();

    let (name, set_name) = signal(user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let (email, set_email) = signal(user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let (password, set_password) = signal(String::new());
    let (status, set_status) = signal(
        user.as_ref().map(|u| u.status).unwrap_or(UserStatus::Green),
    );
    let (user_type, set_user_type) = signal(
        user.as_ref().map(|u| u.user_type).unwrap_or(UserRole::Employee),
    );

    let (name_error, set_name_error) = signal(None::<&'static str>);
    let (email_error, set_email_error) = signal(None::<&'static str>);
    let (password_error, set_password_error) = signal(None::<&'static str>);
    let (form_error, set_form_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    use_modal_lifecycle(on_close);

    let user_id = user.map(|u| u.id);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let mut valid = true;

        let trimmed_name = required_trimmed(&name.get_untracked());
        if trimmed_name.is_none() {
            set_name_error.set(Some("Name is required"));
            valid = false;
        } else {
            set_name_error.set(None);
        }

        let trimmed_email = required_trimmed(&email.get_untracked());
        match &trimmed_email {
            None => {
                set_email_error.set(Some("Email is required"));
                valid = false;
            }
            Some(value) if !is_valid_email(value) => {
                set_email_error.set(Some("Invalid email address"));
                valid = false;
            }
            Some(_) => set_email_error.set(None),
        }

        let password_value = password.get_untracked();
        if !is_editing && password_value.is_empty() {
            set_password_error.set(Some("Password is required"));
            valid = false;
        } else {
            set_password_error.set(None);
        }

        if !valid {
            return;
        }
        let (Some(trimmed_name), Some(trimmed_email)) = (trimmed_name, trimmed_email) else {
            return;
        };

        set_form_error.set(None);
        set_submitting.set(true);

        let token = store::access_token(&session);
        let status_value = status.get_untracked();
        let role_value = user_type.get_untracked();
        let user_id = user_id.clone();

        spawn_local(async move {
            let result = match &user_id {
                Some(id) => {
                    let params = UpdateUserParams::new(
                        &trimmed_name,
                        &trimmed_email,
                        status_value,
                        role_value,
                    );
                    api::update_user(&token, id, &params).await.map(|_| ())
                }
                None => {
                    let params = CreateUserParams::new(
                        &trimmed_name,
                        &trimmed_email,
                        password_value,
                        role_value,
                        Some(status_value),
                    );
                    api::create_user(&token, &params).await.map(|_| ())
                }
            };
            // try_set returns the value back if the modal unmounted mid-flight
            if set_submitting.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(()) => {
                    ctx.invalidate_users();
                    on_close.run(());
                }
                Err(err) => {
                    let fallback = if user_id.is_some() {
                        "Failed to update user"
                    } else {
                        "Failed to create user"
                    };
                    set_form_error.set(Some(err.user_message(fallback)));
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())></div>
        <div class="modal">
            <div class="modal-header">
                <h2>{if is_editing { "Edit user" } else { "Create user" }}</h2>
                <button
                    type="button"
                    class="modal-close"
                    aria-label="Close modal"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
            </div>

            <form class="modal-form" on:submit=submit>
                <div class="field">
                    <label for="user-name">"Name"</label>
                    <input
                        id="user-name"
                        type="text"
                        placeholder="User name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    {move || name_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                <div class="field">
                    <label for="user-email">"Email"</label>
                    <input
                        id="user-email"
                        type="email"
                        placeholder="user@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    {move || email_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                {(!is_editing)
                    .then(|| {
                        view! {
                            <div class="field">
                                <label for="user-password">"Password"</label>
                                <input
                                    id="user-password"
                                    type="password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                />
                                {move || {
                                    password_error
                                        .get()
                                        .map(|msg| view! { <div class="field-error">{msg}</div> })
                                }}
                            </div>
                        }
                    })}

                <div class="field">
                    <label>"Status"</label>
                    <div class="status-grid">
                        {USER_STATUS_ORDER
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if status.get() == option {
                                                "status-button active"
                                            } else {
                                                "status-button"
                                            }
                                        }
                                        on:click=move |_| set_status.set(option)
                                    >
                                        {option.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="field">
                    <label for="user-type">"User type"</label>
                    <select
                        id="user-type"
                        prop:value=move || user_type.get().as_str().to_string()
                        on:change=move |ev| {
                            set_user_type
                                .set(UserRole::decode(Some(&event_target_value(&ev))));
                        }
                    >
                        {USER_ROLES
                            .into_iter()
                            .map(|role| {
                                view! { <option value=role.as_str()>{role.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>

                {move || form_error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                <button type="submit" class="submit-button" disabled=move || submitting.get()>
                    {move || submit_label(submitting.get(), is_editing)}
                </button>
            </form>
        </div>
    }
}
