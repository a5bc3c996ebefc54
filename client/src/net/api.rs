//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/[`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed outcome instead of panicking; callers fold
//! [`ApiError`] into their own state so failures show up on screen.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reviews::{
    CommentResponse, CourseSummary, FieldErrors, Paged, PasswordForm, ProfileForm, ReviewSummary, StudentProfile,
    StudentSummary,
};

use crate::state::comment::SubmitRequest;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Server refused with a human-readable reason.
    #[error("{0}")]
    Rejected(String),
    /// Form rejected (`422`); messages keyed by field.
    #[error("{} field(s) need attention", .0.len())]
    Invalid(FieldErrors),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

#[cfg(any(test, feature = "hydrate"))]
fn paged_endpoint(base: &str, page: Option<&str>) -> String {
    match page.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => format!("{base}?page={}", sanitize_page(p)),
        None => base.to_owned(),
    }
}

/// Numeric page values pass through; anything else becomes page 1.
#[cfg(any(test, feature = "hydrate"))]
fn sanitize_page(page: &str) -> &str {
    if page.bytes().all(|b| b.is_ascii_digit()) { page } else { "1" }
}

#[cfg(any(test, feature = "hydrate"))]
fn courses_endpoint(page: Option<&str>) -> String {
    paged_endpoint("/api/courses", page)
}

#[cfg(any(test, feature = "hydrate"))]
fn comments_endpoint(page: Option<&str>) -> String {
    paged_endpoint("/api/comments", page)
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Prefer the server's `{"error": ..}` text over a bare status code.
#[cfg(any(test, feature = "hydrate"))]
fn rejection(status: u16, body: Option<&str>) -> ApiError {
    body.and_then(|b| serde_json::from_str::<ErrorBody>(b).ok())
        .map_or(ApiError::Status(status), |b| ApiError::Rejected(b.error))
}

/// Map a non-OK status and its body: `422` carries field errors, other
/// statuses may carry an `{"error": ..}` message.
#[cfg(any(test, feature = "hydrate"))]
fn failure(status: u16, body: Option<&str>) -> ApiError {
    if status == 422 {
        if let Some(errors) = body.and_then(|b| serde_json::from_str::<FieldErrors>(b).ok()) {
            return ApiError::Invalid(errors);
        }
    }
    rejection(status, body)
}

/// POST `payload` as JSON. `None` when the server answers `204`.
#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(url: &str, payload: &impl serde::Serialize) -> Result<Option<T>, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.ok();
        return Err(failure(resp.status(), body.as_deref()));
    }
    if resp.status() == 204 {
        return Ok(None);
    }
    resp.json::<T>().await.map(Some).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Post the comment dialog's form to `/student/addcomment/?uid=<id>`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request cannot be sent, the server answers
/// with a non-OK status, or the body is not the expected JSON envelope.
/// Validation failures are not errors: they arrive as `status: false`.
pub async fn submit_comment(request: &SubmitRequest) -> Result<CommentResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&request.url())
            .header("Content-Type", FORM_CONTENT_TYPE)
            .header("Accept", "application/json")
            .body(request.body.clone())
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<CommentResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in student from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_student() -> Option<StudentSummary> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<StudentSummary>("/api/auth/me").await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log in via `POST /api/auth/login`; the server sets the session cookie.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the server's message for bad
/// credentials, or another variant for transport failures.
pub async fn login(email: &str, password: &str) -> Result<StudentSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.ok();
            return Err(rejection(resp.status(), body.as_deref()));
        }
        resp.json::<StudentSummary>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Log out the current student by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch one page of the student's courses.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-OK status, or bad JSON.
pub async fn fetch_courses(page: Option<&str>) -> Result<Paged<CourseSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&courses_endpoint(page)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of the student's own reviews.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-OK status, or bad JSON.
pub async fn fetch_comments(page: Option<&str>) -> Result<Paged<ReviewSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&comments_endpoint(page)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the current student's profile.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-OK status, or bad JSON.
pub async fn fetch_profile() -> Result<StudentProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/student").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Save name, gender and age; returns the refreshed profile.
///
/// # Errors
///
/// Returns [`ApiError::Invalid`] with per-field messages when the server
/// rejects the form, or another variant for transport failures.
pub async fn update_profile(form: &ProfileForm) -> Result<StudentProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json::<StudentProfile>("/api/student", form)
            .await?
            .ok_or_else(|| ApiError::Decode("empty profile response".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Unavailable)
    }
}

/// Change the current student's password.
///
/// # Errors
///
/// Returns [`ApiError::Invalid`] with per-field messages when the server
/// rejects the form, or another variant for transport failures.
pub async fn change_password(form: &PasswordForm) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json::<serde_json::Value>("/api/student/password", form).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Unavailable)
    }
}
