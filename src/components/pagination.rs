//! Pagination Component
//!
//! Prev/next arrows plus the windowed page buttons from
//! [`crate::pagination::visible_pages`]. Hidden entirely for one page or
//! fewer.

use leptos::prelude::*;

use crate::pagination::{visible_pages, PageItem};

#[component]
pub fn Pagination(
    current_page: Signal<u32>,
    total_pages: Signal<u32>,
    #[prop(into)] on_page_change: Callback<u32>,
) -> impl IntoView {
    move || {
        let total = total_pages.get();
        if total <= 1 {
            return None;
        }
        let current = current_page.get();

        let buttons = visible_pages(current, total)
            .into_iter()
            .map(|item| match item {
                PageItem::Ellipsis => view! {
                    <span class="pagination-ellipsis">"..."</span>
                }
                .into_any(),
                PageItem::Page(page) => {
                    let class = if page == current {
                        "pagination-button active"
                    } else {
                        "pagination-button"
                    };
                    view! {
                        <button
                            type="button"
                            class=class
                            on:click=move |_| on_page_change.run(page)
                        >
                            {page}
                        </button>
                    }
                    .into_any()
                }
            })
            .collect_view();

        Some(view! {
            <div class="pagination">
                <button
                    type="button"
                    class="pagination-button"
                    aria-label="Previous page"
                    disabled=current == 1
                    on:click=move |_| on_page_change.run(current - 1)
                >
                    "<"
                </button>
                {buttons}
                <button
                    type="button"
                    class="pagination-button"
                    aria-label="Next page"
                    disabled=current == total
                    on:click=move |_| on_page_change.run(current + 1)
                >
                    ">"
                </button>
            </div>
        })
    }
}
