use super::*;

// =============================================================================
// auth_error_to_status
// =============================================================================

#[test]
fn input_errors_map_to_bad_request() {
    assert_eq!(auth_error_to_status(&AuthError::InvalidEmail), StatusCode::BAD_REQUEST);
    assert_eq!(auth_error_to_status(&AuthError::MissingPassword), StatusCode::BAD_REQUEST);
}

#[test]
fn bad_credentials_map_to_unauthorized() {
    assert_eq!(auth_error_to_status(&AuthError::BadCredentials), StatusCode::UNAUTHORIZED);
}

#[test]
fn database_errors_map_to_internal() {
    let err = AuthError::Db(sqlx::Error::RowNotFound);
    assert_eq!(auth_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_and_scoped_to_root() {
    let cookie = session_cookie("abc".to_owned(), false, 24);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "abc");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(Duration::hours(24)));
}

#[test]
fn session_cookie_honours_secure_flag() {
    assert_eq!(session_cookie("t".to_owned(), true, 1).secure(), Some(true));
    assert_eq!(session_cookie("t".to_owned(), false, 1).secure(), Some(false));
}

#[test]
fn cleared_cookie_expires_immediately() {
    let cookie = cleared_cookie(false);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}
