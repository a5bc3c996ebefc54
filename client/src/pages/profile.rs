//! Profile page: student details, the edit form, and password change.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use reviews::Gender;

use crate::components::nav_bar::NavBar;
use crate::state::auth::AuthState;
use crate::state::profile::{FieldLabels, ProfileState};
use crate::util::auth::install_unauth_redirect;

fn gender_options() -> Vec<(String, &'static str)> {
    Gender::CHOICES.into_iter().map(|g| (g.code().to_string(), g.label())).collect()
}

fn label_for(labels: &FieldLabels, field: &str) -> String {
    labels.get(field).cloned().unwrap_or_default()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let state = RwSignal::new(ProfileState::default());

    Effect::new(move || {
        if auth.with(|a| a.student.is_none()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_profile().await {
                Ok(profile) => state.update(|s| s.loaded(profile)),
                Err(e) => {
                    leptos::logging::warn!("profile load failed: {e}");
                    state.update(|s| s.notice = Some(e.to_string()));
                }
            }
        });
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = state.try_update(ProfileState::begin_save).unwrap_or_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_profile(&form).await;
            if let Ok(profile) = &result {
                let name = profile.name.clone();
                auth.update(|a| {
                    if let Some(s) = a.student.as_mut() {
                        s.name = name;
                    }
                });
            }
            state.update(|s| s.apply_saved(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = form;
    };

    let on_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = state.try_update(ProfileState::begin_password_change).unwrap_or_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::change_password(&form).await;
            state.update(|s| s.apply_password_changed(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = form;
    };

    let detail = move |pick: fn(&reviews::StudentProfile) -> String| {
        move || state.with(|s| s.profile.as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <NavBar/>
        <main class="list-page profile-page">
            <h1>"My Profile"</h1>
            <Show when=move || state.with(|s| s.notice.is_some())>
                <p class="profile-page__notice">{move || state.with(|s| s.notice.clone().unwrap_or_default())}</p>
            </Show>
            <table class="list-table profile-table">
                <tbody>
                    <tr><th>"Email"</th><td>{detail(|p| p.email.clone().unwrap_or_default())}</td></tr>
                    <tr><th>"Name"</th><td>{detail(|p| p.name.clone())}</td></tr>
                    <tr><th>"Gender"</th><td>{detail(|p| p.gender.label().to_owned())}</td></tr>
                    <tr><th>"Age"</th><td>{detail(|p| p.age.to_string())}</td></tr>
                    <tr><th>"Date of entry"</th><td>{detail(|p| p.entry_date.clone())}</td></tr>
                    <tr><th>"Degree programme"</th><td>{detail(|p| p.degree_programme.clone())}</td></tr>
                </tbody>
            </table>

            <Show
                when=move || state.with(|s| s.editing)
                fallback=move || view! {
                    <button class="btn btn--primary" on:click=move |_| state.update(ProfileState::begin_edit)>
                        "Edit profile"
                    </button>
                }
            >
                <form id="formEdit" class="comment-form" on:submit=on_save>
                    <div class="comment-form__row">
                        <label for="id_name">"Name"</label>
                        <input
                            id="id_name"
                            name="name"
                            class="comment-form__input"
                            prop:value=move || state.with(|s| s.edit.name.clone())
                            on:input=move |ev| state.update(|s| s.edit.name = event_target_value(&ev))
                        />
                        <span class="error-msg">{move || state.with(|s| label_for(&s.edit_errors, "name"))}</span>
                    </div>
                    <div class="comment-form__row">
                        <label for="id_gender">"Gender"</label>
                        <select
                            id="id_gender"
                            name="gender"
                            prop:value=move || state.with(|s| s.edit.gender.clone())
                            on:change=move |ev| state.update(|s| s.edit.gender = event_target_value(&ev))
                        >
                            {gender_options()
                                .into_iter()
                                .map(|(code, label)| view! { <option value=code>{label}</option> })
                                .collect_view()}
                        </select>
                        <span class="error-msg">{move || state.with(|s| label_for(&s.edit_errors, "gender"))}</span>
                    </div>
                    <div class="comment-form__row">
                        <label for="id_age">"Age"</label>
                        <input
                            id="id_age"
                            name="age"
                            type="number"
                            class="comment-form__input"
                            prop:value=move || state.with(|s| s.edit.age.clone())
                            on:input=move |ev| state.update(|s| s.edit.age = event_target_value(&ev))
                        />
                        <span class="error-msg">{move || state.with(|s| label_for(&s.edit_errors, "age"))}</span>
                    </div>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| state.update(ProfileState::cancel_edit)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">"Save"</button>
                    </div>
                </form>
            </Show>

            <h2>"Reset password"</h2>
            <form id="formReset" class="comment-form" on:submit=on_password>
                <div class="comment-form__row">
                    <label for="id_password">"Password"</label>
                    <input
                        id="id_password"
                        name="password"
                        type="password"
                        class="comment-form__input"
                        prop:value=move || state.with(|s| s.password.password.clone())
                        on:input=move |ev| state.update(|s| s.password.password = event_target_value(&ev))
                    />
                    <span class="error-msg">{move || state.with(|s| label_for(&s.password_errors, "password"))}</span>
                </div>
                <div class="comment-form__row">
                    <label for="id_confirm_password">"Confirm password"</label>
                    <input
                        id="id_confirm_password"
                        name="confirm_password"
                        type="password"
                        class="comment-form__input"
                        prop:value=move || state.with(|s| s.password.confirm_password.clone())
                        on:input=move |ev| state.update(|s| s.password.confirm_password = event_target_value(&ev))
                    />
                    <span class="error-msg">
                        {move || state.with(|s| label_for(&s.password_errors, "confirm_password"))}
                    </span>
                </div>
                <div class="dialog__actions">
                    <button class="btn btn--primary" type="submit">"Change password"</button>
                </div>
            </form>
        </main>
    }
}
