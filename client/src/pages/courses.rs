//! Course list page with the "Add Comment" dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Lists the courses of the student's degree
//! programme one page at a time; each uncommented course opens the shared
//! comment dialog for that course.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use reviews::CourseSummary;

use crate::components::comment_modal::CommentModal;
use crate::components::nav_bar::NavBar;
use crate::components::pagination_nav::PaginationNav;
use crate::state::auth::AuthState;
use crate::state::comment::CommentDialog;
use crate::state::listing::ListState;
use crate::util::auth::install_unauth_redirect;

fn comment_button_label(is_commented: bool) -> &'static str {
    if is_commented { "Commented" } else { "Comment" }
}

#[component]
pub fn CoursesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let query = use_query_map();
    let courses = RwSignal::new(ListState::<CourseSummary>::default());
    let dialog = RwSignal::new(CommentDialog::default());

    Effect::new(move || {
        let page = query.with(|q| q.get("page"));
        if auth.with(|a| a.student.is_none()) {
            return;
        }
        courses.update(ListState::begin_load);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_courses(page.as_deref()).await;
            if let Err(e) = &result {
                leptos::logging::warn!("course list load failed: {e}");
            }
            courses.update(|s| s.finish_load(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = page;
    });

    let rows = move || {
        courses.with(|s| {
            s.items()
                .iter()
                .map(|course| {
                    let id = course.id;
                    let commented = course.is_commented;
                    view! {
                        <tr class="course-row">
                            <td class="course-row__id">{id}</td>
                            <td class="course-row__name">{course.name.clone()}</td>
                            <td class="course-row__action">
                                <button
                                    class="btn btn--primary btnAdd"
                                    disabled=commented
                                    on:click=move |_| dialog.update(|d| d.open(id))
                                >
                                    {comment_button_label(commented)}
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <NavBar/>
        <main class="list-page">
            <h1>"My Courses"</h1>
            <Show when=move || courses.with(|s| s.error.is_some())>
                <p class="list-page__error">{move || courses.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || courses.with(|s| s.loading)>
                <p class="list-page__loading">"Loading courses..."</p>
            </Show>
            <table class="list-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Course"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            {move || {
                courses.with(|s| {
                    s.page.as_ref().map(|p| view! { <PaginationNav pagination=p.pagination base="/courses"/> })
                })
            }}
        </main>
        <CommentModal dialog/>
    }
}
