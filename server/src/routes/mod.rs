//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API, the form endpoint used by the comment
//! dialog, and Leptos SSR rendering under a single Axum router.

pub mod auth;
pub mod comments;
pub mod courses;
pub mod student;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// `?page=N` on list endpoints. Kept as a raw string so malformed values fall
/// back to the first page instead of being rejected.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// API and form routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/login/", get(redirect_login_to_app))
        .route("/student-course/", get(redirect_courses_to_app))
        .route("/student-comment/", get(redirect_comments_to_app))
        .route("/student-info/", get(redirect_profile_to_app))
        .route("/student-edit/", get(redirect_profile_to_app))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/student", get(student::profile).post(student::update_profile))
        .route("/api/student/password", post(student::change_password))
        .route("/api/courses", get(courses::list_courses))
        .route("/api/comments", get(comments::list_comments))
        .route(reviews::ADD_COMMENT_PATH, post(comments::add_comment))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

async fn redirect_login_to_app() -> Redirect {
    Redirect::temporary("/login")
}

async fn redirect_courses_to_app() -> Redirect {
    Redirect::temporary("/courses")
}

async fn redirect_comments_to_app() -> Redirect {
    Redirect::temporary("/comments")
}

async fn redirect_profile_to_app() -> Redirect {
    Redirect::temporary("/profile")
}

/// API routes + Leptos SSR pages + compiled WASM/CSS under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` / `LEPTOS_*` settings).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
