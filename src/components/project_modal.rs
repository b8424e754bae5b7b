//! Project Create/Edit Modal
//!
//! One form for both modes: `project = None` creates, `Some` edits with
//! pre-filled fields. Validation runs before any network call; a failed
//! submit keeps the form populated with the error shown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ProjectPayload};
use crate::components::modal::{submit_label, use_modal_lifecycle};
use crate::context::use_app_context;
use crate::models::{Project, ProjectStatus, PROJECT_STATUS_ORDER};
use crate::store::{self, use_session};
use crate::validate::required_trimmed;

#[component]
pub fn ProjectModal(project: Option<Project>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let is_editing = project.is_some();

    let (name, set_name) = signal(
        project.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
    );
    let (description, set_description) = signal(
        project
            .as_ref()
            .and_then(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let (status, set_status) = signal(
        project
            .as_ref()
            .map(|p| p.status)
            .unwrap_or(ProjectStatus::Planned),
    );
    let (name_error, set_name_error) = signal(None::<&'static str>);
    let (form_error, set_form_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    use_modal_lifecycle(on_close);

    let project_id = project.map(|p| p.id);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let Some(trimmed_name) = required_trimmed(&name.get_untracked()) else {
            set_name_error.set(Some("Project name is required"));
            return;
        };
        set_name_error.set(None);
        set_form_error.set(None);
        set_submitting.set(true);

        let payload = ProjectPayload::new(
            &trimmed_name,
            &description.get_untracked(),
            status.get_untracked(),
        );
        let token = store::access_token(&session);
        let project_id = project_id.clone();

        spawn_local(async move {
            let result = match &project_id {
                Some(id) => api::update_project(&token, id, &payload).await,
                None => api::create_project(&token, &payload).await,
            };
            // try_set returns the value back if the modal unmounted mid-flight
            if set_submitting.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(_) => {
                    ctx.invalidate_projects();
                    on_close.run(());
                }
                Err(err) => {
                    let fallback = if project_id.is_some() {
                        "Failed to update project"
                    } else {
                        "Failed to create project"
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
                <h2>{if is_editing { "Edit project" } else { "Create project" }}</h2>
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
                    <label for="project-name">"Project name"</label>
                    <input
                        id="project-name"
                        type="text"
                        placeholder="Project name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    {move || name_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                <div class="field">
                    <label for="project-description">"Description"</label>
                    <textarea
                        id="project-description"
                        placeholder="Description"
                        rows=4
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="field">
                    <label>"Status"</label>
                    <div class="status-grid">
                        {PROJECT_STATUS_ORDER
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

                {move || form_error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                <button type="submit" class="submit-button" disabled=move || submitting.get()>
                    {move || submit_label(submitting.get(), is_editing)}
                </button>
            </form>
        </div>
    }
}
