//! Projects Page
//!
//! Binds the list controller to the projects gateway: debounced search,
//! status filter, sortable table, pagination, create/edit modal. The
//! controller state is mirrored into the URL on every change, and each
//! fetch result is applied only if the state that produced it is still
//! current.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ListProjectsParams};
use crate::components::{
    Debouncer, Pagination, ProjectModal, ProjectTable, SearchInput, StatusFilter,
    SEARCH_DEBOUNCE_MS,
};
use crate::context::use_app_context;
use crate::controller::{response_is_current, ListQuery, ProjectFilters};
use crate::models::{Project, ProjectStatus, PROJECT_STATUS_ORDER};
use crate::pagination::total_pages;
use crate::query::QueryCodec;
use crate::routes::{use_navigator, Route};
use crate::store::{self, use_session};
use crate::url_state;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let navigator = use_navigator();

    let initial = ListQuery::<ProjectFilters>::from_query(&url_state::query_param);
    let (search_input, set_search_input) = signal(initial.search.clone());
    let (query, set_query) = signal(initial);

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (total, set_total) = signal(0u64);
    let (loading, set_loading) = signal(false);
    let (load_error, set_load_error) = signal(None::<String>);

    let (modal_project, set_modal_project) = signal(None::<Project>);
    let (create_open, set_create_open) = signal(false);

    let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);

    // Mirror controller state into the address bar
    Effect::new(move |_| {
        url_state::replace_query(&query.get().to_query_pairs());
    });

    // One request per (state, invalidation version); a stale result is
    // dropped when the tuple it was issued for is no longer current. The
    // reads after the await are fallible: the page may have unmounted
    // while the request was in flight.
    Effect::new(move |_| {
        let current = query.get();
        let version = ctx.projects_version.get();
        let params = ListProjectsParams::from_query(&current, &current.search);
        let token = store::access_token(&session);

        set_loading.set(true);
        spawn_local(async move {
            let result = api::list_projects(&token, &params).await;
            if !response_is_current(
                query.try_get_untracked(),
                &current,
                ctx.projects_version.try_get_untracked(),
                version,
            ) {
                return;
            }
            set_loading.set(false);
            match result {
                Ok(page) => {
                    set_total.set(page.total);
                    set_projects.set(page.data);
                    set_load_error.set(None);
                }
                Err(err) => {
                    if err.is_unauthorized() {
                        store::clear_auth(&session);
                        navigator.go(Route::Login);
                        return;
                    }
                    leptos::logging::error!("projects list fetch failed: {err}");
                    set_projects.set(Vec::new());
                    set_total.set(0);
                    set_load_error.set(Some(err.user_message("Failed to load projects")));
                }
            }
        });
    });

    let handle_search = move |value: String| {
        set_search_input.set(value.clone());
        debouncer.schedule(move || set_query.update(|q| q.set_search(value)));
    };

    let handle_status = move |raw: String| {
        let status = ProjectStatus::decode_opt(Some(&raw));
        set_query.update(|q| q.update_filters(|f| f.status = status));
    };

    let handle_clear = move |_| {
        debouncer.cancel();
        set_search_input.set(String::new());
        set_query.update(|q| q.clear_all());
    };

    let status_options: Vec<(&'static str, &'static str)> = PROJECT_STATUS_ORDER
        .iter()
        .map(|s| (s.as_str(), s.label()))
        .collect();

    let page_count = Signal::derive(move || total_pages(total.get()));
    let selected_status = Signal::derive(move || {
        query
            .get()
            .filters
            .status
            .map(|s| s.as_str().to_string())
            .unwrap_or_default()
    });

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Projects"</h1>
                <div class="statistics">
                    <span class="statistics-number">{move || total.get()}</span>
                    <span class="statistics-label">"All projects"</span>
                </div>
            </header>

            <section class="filter-bar">
                <SearchInput
                    value=search_input.into()
                    on_change=handle_search
                    placeholder="Search projects..."
                />
                <StatusFilter
                    options=status_options
                    selected=selected_status
                    on_select=handle_status
                />
                <button type="button" class="clear-filters" on:click=handle_clear>
                    "Clear filters"
                </button>
                <button
                    type="button"
                    class="create-button"
                    on:click=move |_| set_create_open.set(true)
                >
                    "Add project"
                </button>
            </section>

            {move || loading.get().then(|| view! { <div class="loader">"Loading..."</div> })}
            {move || load_error.get().map(|msg| view! { <div class="page-error">{msg}</div> })}

            <ProjectTable
                projects=projects.into()
                sort_field=Signal::derive(move || query.get().sort_field)
                sort_direction=Signal::derive(move || query.get().sort_direction)
                on_sort=move |field| set_query.update(|q| q.toggle_sort(field))
                on_edit=move |project| {
                    set_create_open.set(false);
                    set_modal_project.set(Some(project));
                }
            />

            <Pagination
                current_page=Signal::derive(move || query.get().page)
                total_pages=page_count
                on_page_change=move |page| set_query.update(|q| q.set_page(page))
            />

            {move || {
                modal_project
                    .get()
                    .map(|project| {
                        view! {
                            <ProjectModal
                                project=Some(project)
                                on_close=move |_| set_modal_project.set(None)
                            />
                        }
                    })
            }}
            {move || {
                create_open
                    .get()
                    .then(|| {
                        view! {
                            <ProjectModal
                                project=None
                                on_close=move |_| set_create_open.set(false)
                            />
                        }
                    })
            }}
        </div>
    }
}
