//! Bearer-token authentication.
//!
//! Handlers call [`authenticate`] with the request headers and the server
//! secret to obtain the caller's user id. Ownership is decided separately by
//! `tubely_core::authorize_owner`.

pub mod jwt;

use axum::http::{header::AUTHORIZATION, HeaderMap};
use tubely_core::AppError;
use uuid::Uuid;

pub use jwt::{make_jwt, validate_jwt, JwtClaims, TOKEN_ISSUER};

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn get_bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid authorization header format".to_string()))?;

    let token = auth_header
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header format".to_string()))?
        .trim();

    if token.is_empty() {
        return Err(AppError::Unauthorized("Missing bearer token".to_string()));
    }

    Ok(token)
}

/// Resolve the authenticated user id for a request.
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<Uuid, AppError> {
    let token = get_bearer_token(headers)?;
    validate_jwt(token, secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(get_bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_header_is_unauthorized() {
        assert!(matches!(
            get_bearer_token(&HeaderMap::new()),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn non_bearer_scheme_is_unauthorized() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert!(matches!(
            get_bearer_token(&headers),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn empty_token_is_unauthorized() {
        let headers = headers_with("Bearer   ");
        assert!(matches!(
            get_bearer_token(&headers),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn authenticate_round_trips_user_id() {
        let secret = "s".repeat(32);
        let user_id = Uuid::new_v4();
        let token = make_jwt(user_id, &secret, chrono::Duration::hours(1)).unwrap();
        let headers = headers_with(&format!("Bearer {}", token));
        assert_eq!(authenticate(&headers, &secret).unwrap(), user_id);
    }
}
