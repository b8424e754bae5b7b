//! User Table Component
//!
//! Range table: name/email, derived main and other projects, user type,
//! status. Name and Status headers sort.

use leptos::prelude::*;

use crate::models::{SortDirection, SortField, UserRange};

fn sort_arrow(
    column: SortField,
    sort_field: Signal<SortField>,
    sort_direction: Signal<SortDirection>,
) -> impl Fn() -> &'static str {
    move || {
        if sort_field.get() != column {
            ""
        } else if sort_direction.get() == SortDirection::Asc {
            " ▲"
        } else {
            " ▼"
        }
    }
}

#[component]
pub fn UserTable(
    users: Signal<Vec<UserRange>>,
    sort_field: Signal<SortField>,
    sort_direction: Signal<SortDirection>,
    #[prop(into)] on_sort: Callback<SortField>,
    #[prop(into)] on_edit: Callback<UserRange>,
) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>
                        <button
                            type="button"
                            class="sort-header"
                            on:click=move |_| on_sort.run(SortField::Name)
                        >
                            "Name" {sort_arrow(SortField::Name, sort_field, sort_direction)}
                        </button>
                    </th>
                    <th>"Email"</th>
                    <th>"Main project"</th>
                    <th>"Other projects"</th>
                    <th>"User type"</th>
                    <th>
                        <button
                            type="button"
                            class="sort-header"
                            on:click=move |_| on_sort.run(SortField::Status)
                        >
                            "Status" {sort_arrow(SortField::Status, sort_field, sort_direction)}
                        </button>
                    </th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    users
                        .get()
                        .into_iter()
                        .map(|user| {
                            let edit_target = user.clone();
                            let status = user.status;
                            view! {
                                <tr>
                                    <td class="cell-name">{user.name.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{user.main_project.clone().unwrap_or_else(|| "—".to_string())}</td>
                                    <td>{user.other_projects.join(", ")}</td>
                                    <td>{user.user_type.label()}</td>
                                    <td>
                                        <span class=format!(
                                            "status-pill status-{}",
                                            status.as_str().to_lowercase(),
                                        )>{status.label()}</span>
                                    </td>
                                    <td>
                                        <button
                                            type="button"
                                            class="edit-button"
                                            on:click=move |_| on_edit.run(edit_target.clone())
                                        >
                                            "Edit"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
