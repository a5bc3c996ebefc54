//! The signed-in student's own course reviews, paged.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use reviews::ReviewSummary;

use crate::components::nav_bar::NavBar;
use crate::components::pagination_nav::PaginationNav;
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn CommentsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let query = use_query_map();
    let reviews = RwSignal::new(ListState::<ReviewSummary>::default());

    Effect::new(move || {
        let page = query.with(|q| q.get("page"));
        if auth.with(|a| a.student.is_none()) {
            return;
        }
        reviews.update(ListState::begin_load);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_comments(page.as_deref()).await;
            reviews.update(|s| s.finish_load(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = page;
    });

    let rows = move || {
        reviews.with(|s| {
            s.items()
                .iter()
                .map(|r| {
                    view! {
                        <tr class="review-row">
                            <td>{r.course_name.clone()}</td>
                            <td>{r.overall_score}</td>
                            <td>{r.easiness_score}</td>
                            <td>{r.interest_score}</td>
                            <td>{r.usefulness_score}</td>
                            <td>{r.teaching_score}</td>
                            <td class="review-row__comment">{r.comment.clone()}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <NavBar/>
        <main class="list-page">
            <h1>"My Comments"</h1>
            <Show when=move || reviews.with(|s| s.error.is_some())>
                <p class="list-page__error">{move || reviews.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || reviews.with(|s| !s.loading && s.page.is_some() && s.items().is_empty())>
                <p class="list-page__empty">"You have not commented on any course yet."</p>
            </Show>
            <table class="list-table">
                <thead>
                    <tr>
                        <th>"Course"</th>
                        <th>"Overall"</th>
                        <th>"Easiness"</th>
                        <th>"Interest"</th>
                        <th>"Usefulness"</th>
                        <th>"Teaching"</th>
                        <th>"Comment"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            {move || {
                reviews.with(|s| {
                    s.page.as_ref().map(|p| view! { <PaginationNav pagination=p.pagination base="/comments"/> })
                })
            }}
        </main>
    }
}
