//! Range Page
//!
//! Users list with the same controller/fetch wiring as the projects page,
//! plus user-type and project filters and the per-status header counters.
//! Wire users are flattened into [`UserRange`] view-models as they arrive.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ListUsersParams};
use crate::components::{
    Debouncer, DropdownFilter, Pagination, SearchInput, StatusFilter, UserModal, UserStatistics,
    UserTable, SEARCH_DEBOUNCE_MS,
};
use crate::context::use_app_context;
use crate::controller::{response_is_current, ListQuery, UserFilters};
use crate::models::{UserRange, UserRole, UserStatus, USER_ROLES, USER_STATUS_ORDER};
use crate::pagination::total_pages;
use crate::query::QueryCodec;
use crate::routes::{use_navigator, Route};
use crate::store::{self, use_session};
use crate::url_state;

/// Page size for the project-filter dropdown source list
const PROJECT_OPTIONS_TAKE: u32 = 100;

#[component]
pub fn RangePage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let navigator = use_navigator();

    let initial = ListQuery::<UserFilters>::from_query(&url_state::query_param);
    let (search_input, set_search_input) = signal(initial.search.clone());
    let (query, set_query) = signal(initial);

    let (users, set_users) = signal(Vec::<UserRange>::new());
    let (total, set_total) = signal(0u64);
    let (loading, set_loading) = signal(false);
    let (load_error, set_load_error) = signal(None::<String>);
    let (project_options, set_project_options) = signal(Vec::<(String, String)>::new());

    let (modal_user, set_modal_user) = signal(None::<UserRange>);
    let (create_open, set_create_open) = signal(false);

    let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);

    // Mirror controller state into the address bar
    Effect::new(move |_| {
        url_state::replace_query(&query.get().to_query_pairs());
    });

    // Project names for the project filter dropdown
    Effect::new(move |_| {
        let _ = ctx.projects_version.get();
        let token = store::access_token(&session);
        spawn_local(async move {
            match api::list_all_projects(&token, PROJECT_OPTIONS_TAKE).await {
                Ok(page) => {
                    let options: Vec<(String, String)> = page
                        .data
                        .into_iter()
                        .map(|p| (p.name.clone(), p.name))
                        .collect();
                    // The page may have unmounted while the request ran
                    let _ = set_project_options.try_set(options);
                }
                Err(err) => {
                    leptos::logging::error!("project options fetch failed: {err}");
                }
            }
        });
    });

    // Users list; stale results are dropped by parameter-tuple comparison.
    // The reads after the await are fallible: the page may have unmounted
    // while the request was in flight.
    Effect::new(move |_| {
        let current = query.get();
        let version = ctx.users_version.get();
        let params = ListUsersParams::from_query(&current, &current.search);
        let token = store::access_token(&session);

        set_loading.set(true);
        spawn_local(async move {
            let result = api::list_users(&token, &params).await;
            if !response_is_current(
                query.try_get_untracked(),
                &current,
                ctx.users_version.try_get_untracked(),
                version,
            ) {
                return;
            }
            set_loading.set(false);
            match result {
                Ok(page) => {
                    set_total.set(page.total);
                    set_users.set(page.data.into_iter().map(UserRange::from_api).collect());
                    set_load_error.set(None);
                }
                Err(err) => {
                    if err.is_unauthorized() {
                        store::clear_auth(&session);
                        navigator.go(Route::Login);
                        return;
                    }
                    leptos::logging::error!("users list fetch failed: {err}");
                    set_users.set(Vec::new());
                    set_total.set(0);
                    set_load_error.set(Some(err.user_message("Failed to load users")));
                }
            }
        });
    });

    let handle_search = move |value: String| {
        set_search_input.set(value.clone());
        debouncer.schedule(move || set_query.update(|q| q.set_search(value)));
    };

    let handle_status = move |raw: String| {
        let status = UserStatus::decode_opt(Some(&raw));
        set_query.update(|q| q.update_filters(|f| f.status = status));
    };

    let handle_user_type = move |raw: String| {
        let role = UserRole::decode_opt(Some(&raw));
        set_query.update(|q| q.update_filters(|f| f.user_type = role));
    };

    let handle_project = move |raw: String| {
        let project = (!raw.is_empty()).then_some(raw);
        set_query.update(|q| q.update_filters(|f| f.project = project));
    };

    let handle_clear = move |_| {
        debouncer.cancel();
        set_search_input.set(String::new());
        set_query.update(|q| q.clear_all());
    };

    let status_options: Vec<(&'static str, &'static str)> = USER_STATUS_ORDER
        .iter()
        .map(|s| (s.as_str(), s.label()))
        .collect();
    let user_type_options = Signal::derive(move || {
        USER_ROLES
            .iter()
            .map(|r| (r.as_str().to_string(), r.label().to_string()))
            .collect::<Vec<_>>()
    });

    let page_count = Signal::derive(move || total_pages(total.get()));
    let selected_status = Signal::derive(move || {
        query
            .get()
            .filters
            .status
            .map(|s| s.as_str().to_string())
            .unwrap_or_default()
    });
    let selected_user_type = Signal::derive(move || {
        query
            .get()
            .filters
            .user_type
            .map(|r| r.as_str().to_string())
            .unwrap_or_default()
    });
    let selected_project =
        Signal::derive(move || query.get().filters.project.unwrap_or_default());

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Range"</h1>
                <UserStatistics users=users.into() total_users=total.into() />
            </header>

            <section class="filter-bar">
                <SearchInput
                    value=search_input.into()
                    on_change=handle_search
                    placeholder="Search users..."
                />
                <StatusFilter
                    options=status_options
                    selected=selected_status
                    on_select=handle_status
                />
                <DropdownFilter
                    label="User types"
                    options=user_type_options
                    selected=selected_user_type
                    on_select=handle_user_type
                    placeholder="All user types"
                />
                <DropdownFilter
                    label="Projects"
                    options=project_options.into()
                    selected=selected_project
                    on_select=handle_project
                    placeholder="All projects"
                />
                <button type="button" class="clear-filters" on:click=handle_clear>
                    "Clear filters"
                </button>
                <button
                    type="button"
                    class="create-button"
                    on:click=move |_| set_create_open.set(true)
                >
                    "Add user"
                </button>
            </section>

            {move || loading.get().then(|| view! { <div class="loader">"Loading..."</div> })}
            {move || load_error.get().map(|msg| view! { <div class="page-error">{msg}</div> })}

            <UserTable
                users=users.into()
                sort_field=Signal::derive(move || query.get().sort_field)
                sort_direction=Signal::derive(move || query.get().sort_direction)
                on_sort=move |field| set_query.update(|q| q.toggle_sort(field))
                on_edit=move |user| {
                    set_create_open.set(false);
                    set_modal_user.set(Some(user));
                }
            />

            <Pagination
                current_page=Signal::derive(move || query.get().page)
                total_pages=page_count
                on_page_change=move |page| set_query.update(|q| q.set_page(page))
            />

            {move || {
                modal_user
                    .get()
                    .map(|user| {
                        view! {
                            <UserModal user=Some(user) on_close=move |_| set_modal_user.set(None) />
                        }
                    })
            }}
            {move || {
                create_open
                    .get()
                    .then(|| {
                        view! {
                            <UserModal user=None on_close=move |_| set_create_open.set(false) />
                        }
                    })
            }}
        </div>
    }
}
