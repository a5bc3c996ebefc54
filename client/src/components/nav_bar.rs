//! Top navigation: section links, the signed-in student, and logout.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.set(AuthState::default());
            crate::util::page::redirect("/login");
        });
    };

    let programme = move || {
        auth.with(|a| a.student.as_ref().map(|s| s.degree_programme.clone()).unwrap_or_default())
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/courses">"Rate My Course"</a>
            <a class="nav-bar__link" href="/courses">"My Courses"</a>
            <a class="nav-bar__link" href="/comments">"My Comments"</a>
            <a class="nav-bar__link" href="/profile">"My Profile"</a>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__student">{move || auth.with(AuthState::display_name)}</span>
            <span class="nav-bar__programme">{programme}</span>
            <button class="btn nav-bar__logout" on:click=on_logout>"Logout"</button>
        </header>
    }
}
