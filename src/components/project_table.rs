//! Project Table Component
//!
//! Table with sortable Name/Status headers and an edit action per row.

use leptos::prelude::*;

use crate::models::{Project, SortDirection, SortField};

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
pub fn ProjectTable(
    projects: Signal<Vec<Project>>,
    sort_field: Signal<SortField>,
    sort_direction: Signal<SortDirection>,
    #[prop(into)] on_sort: Callback<SortField>,
    #[prop(into)] on_edit: Callback<Project>,
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
                    <th>"Description"</th>
                    <th>
                        <button
                            type="button"
                            class="sort-header"
                            on:click=move |_| on_sort.run(SortField::Status)
                        >
                            "Status" {sort_arrow(SortField::Status, sort_field, sort_direction)}
                        </button>
                    </th>
                    <th>"Created"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    projects
                        .get()
                        .into_iter()
                        .map(|project| {
                            let edit_target = project.clone();
                            let status = project.status;
                            view! {
                                <tr>
                                    <td class="cell-name">{project.name.clone()}</td>
                                    <td>{project.description.clone().unwrap_or_default()}</td>
                                    <td>
                                        <span class=format!(
                                            "status-pill status-{}",
                                            status.as_str().to_lowercase(),
                                        )>{status.label()}</span>
                                    </td>
                                    <td>{project.created_at.chars().take(10).collect::<String>()}</td>
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
