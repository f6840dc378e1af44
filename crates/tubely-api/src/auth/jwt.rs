//! HS256 access tokens signed with the server secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use tubely_core::AppError;
use uuid::Uuid;

/// Issuer claim stamped on and required from every access token.
pub const TOKEN_ISSUER: &str = "tubely-access";

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // user_id
    pub iss: String,
    pub exp: i64, // expiration timestamp
    pub iat: i64, // issued at timestamp
}

/// Sign an access token for `user_id` that expires after `expires_in`.
pub fn make_jwt(user_id: Uuid, secret: &str, expires_in: Duration) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = JwtClaims {
        sub: user_id.to_string(),
        iss: TOKEN_ISSUER.to_string(),
        exp: (now + expires_in).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
}

/// Validate `token` against `secret` and return the user id in its subject.
pub fn validate_jwt(token: &str, secret: &str) -> Result<Uuid, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[TOKEN_ISSUER]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::Unauthorized("Token has expired".to_string()),
        ErrorKind::InvalidIssuer => AppError::Unauthorized("Invalid token issuer".to_string()),
        _ => AppError::Unauthorized("Invalid token".to_string()),
    })?;

    Uuid::parse_str(&data.claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid user ID in token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> String {
        "test-jwt-secret-at-least-32-characters".to_string()
    }

    #[test]
    fn valid_token_yields_subject() {
        let user_id = Uuid::new_v4();
        let token = make_jwt(user_id, &secret(), Duration::hours(1)).unwrap();
        assert_eq!(validate_jwt(&token, &secret()).unwrap(), user_id);
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = make_jwt(Uuid::new_v4(), &secret(), Duration::hours(-2)).unwrap();
        match validate_jwt(&token, &secret()) {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Token has expired"),
            other => panic!("Expected expired token error, got {:?}", other),
        }
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = make_jwt(Uuid::new_v4(), &secret(), Duration::hours(1)).unwrap();
        assert!(matches!(
            validate_jwt(&token, "another-secret-that-is-32-chars-long!"),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            validate_jwt("not-a-jwt", &secret()),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn non_uuid_subject_is_rejected() {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: "not-a-uuid".to_string(),
            iss: TOKEN_ISSUER.to_string(),
            exp: (now + Duration::hours(1)).timestamp(),
            iat: now.timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret().as_bytes()),
        )
        .unwrap();
        match validate_jwt(&token, &secret()) {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Invalid user ID in token"),
            other => panic!("Expected invalid subject error, got {:?}", other),
        }
    }
}
