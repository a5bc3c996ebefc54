//! First / Prev / numbered window / Next / Last navigation for paged lists.

#[cfg(test)]
#[path = "pagination_nav_test.rs"]
mod pagination_nav_test;

use leptos::prelude::*;
use reviews::Pagination;

fn page_href(base: &str, page: u32) -> String {
    format!("{base}?page={page}")
}

/// Navigation bar for `pagination`, linking back to `base`.
///
/// Links are plain anchors so each page is a fresh server-rendered load.
#[component]
pub fn PaginationNav(pagination: Pagination, base: &'static str) -> impl IntoView {
    let current = pagination.page;
    let window = pagination
        .window()
        .map(|n| {
            let class = if n == current { "pager__page pager__page--current" } else { "pager__page" };
            view! { <a class=class href=page_href(base, n)>{n}</a> }
        })
        .collect_view();

    view! {
        <nav class="pager">
            <a class="pager__edge" href=page_href(base, 1)>"First"</a>
            <a class="pager__step" href=page_href(base, pagination.prev_page())>"Prev"</a>
            {window}
            <a class="pager__step" href=page_href(base, pagination.next_page())>"Next"</a>
            <a class="pager__edge" href=page_href(base, pagination.last_page())>"Last"</a>
            <form class="pager__jump" method="get" action=base>
                <input
                    class="pager__jump-input"
                    type="number"
                    name="page"
                    min="1"
                    max=pagination.last_page().to_string()
                    value=current.to_string()
                />
                <button class="btn" type="submit">"Go"</button>
            </form>
            <span class="pager__summary">
                {format!("Page {} of {}", current, pagination.last_page())}
            </span>
        </nav>
    }
}
