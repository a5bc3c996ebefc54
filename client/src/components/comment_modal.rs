//! "Add Comment" dialog for the course list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by the course page and driven entirely by the page's
//! `RwSignal<CommentDialog>`. Each input is followed by an `error-msg` label
//! that shows the first server message for that field.

use leptos::prelude::*;
use reviews::form::{FIELDS, SCORE_MAX, SCORE_MIN, field_label, is_score_field};

use crate::state::comment::CommentDialog;

/// Modal form posting one course review.
#[component]
pub fn CommentModal(dialog: RwSignal<CommentDialog>) -> impl IntoView {
    let on_close = move |_: leptos::ev::MouseEvent| dialog.update(CommentDialog::close);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = dialog.try_update(CommentDialog::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_comment(&request).await {
                Ok(response) => {
                    let outcome = dialog.try_update(|d| d.apply_response(&response));
                    if outcome == Some(crate::state::comment::SubmitOutcome::Reload) {
                        crate::util::page::reload();
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("comment submit for course {} failed: {e}", request.course_id);
                    dialog.update(|d| d.apply_failure(&e));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <Show when=move || dialog.with(|d| d.visible)>
            <div class="dialog-backdrop" on:click=on_close>
                <div
                    class="dialog dialog--comment"
                    role="dialog"
                    aria-labelledby="myModalLabel"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <h2 id="myModalLabel">{move || dialog.with(|d| d.title.clone())}</h2>
                    <form id="formAdd" class="comment-form" on:submit=on_submit>
                        {FIELDS.into_iter().map(|field| view! { <CommentField dialog field/> }).collect_view()}
                        {move || {
                            dialog.with(|d| {
                                d.unplaced_errors()
                                    .map(|(field, msg)| {
                                        view! {
                                            <p class="comment-form__extra-error">
                                                <span class="comment-form__extra-field">{field.to_owned()}</span>
                                                <span class="error-msg">{msg.to_owned()}</span>
                                            </p>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                        <Show when=move || dialog.with(|d| d.notice.is_some())>
                            <p class="comment-form__notice">
                                {move || dialog.with(|d| d.notice.clone().unwrap_or_default())}
                            </p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=on_close>"Close"</button>
                            <button class="btn btn--primary" type="submit">"Submit"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// One labelled input plus its inline error label.
#[component]
fn CommentField(dialog: RwSignal<CommentDialog>, field: &'static str) -> impl IntoView {
    let id = reviews::input_id(field);
    let value = move || dialog.with(|d| d.form.get(field).unwrap_or_default().to_owned());
    let on_input = move |ev: leptos::ev::Event| dialog.update(|d| d.set_field(field, event_target_value(&ev)));

    let input = if is_score_field(field) {
        view! {
            <input
                id=id.clone()
                name=field
                type="number"
                min=SCORE_MIN.to_string()
                max=SCORE_MAX.to_string()
                class="comment-form__input"
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    } else {
        view! {
            <textarea
                id=id.clone()
                name=field
                rows="10"
                class="comment-form__input comment-form__input--text"
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    };

    view! {
        <div class="comment-form__row">
            <label for=id>{field_label(field)}</label>
            {input}
            <span class="error-msg">
                {move || dialog.with(|d| d.error_for(field).unwrap_or_default().to_owned())}
            </span>
        </div>
    }
}
