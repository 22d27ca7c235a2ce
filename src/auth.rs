// ABOUTME: JWT-based user authentication and password hashing
// ABOUTME: Handles token generation, validation, and bcrypt credential checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! # Authentication
//!
//! JWT session tokens (HS256) plus bcrypt password hashing. Tokens carry the
//! user id and email and expire after a configurable number of hours
//! (default seven days).

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::User;

/// Bcrypt cost factor for password hashing
const BCRYPT_COST: u32 = 12;

/// JWT validation error with detailed information
#[derive(Debug, Clone)]
pub enum JwtValidationError {
    /// Token has expired
    TokenExpired {
        /// When the token expired
        expired_at: DateTime<Utc>,
    },
    /// Token signature is invalid
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is malformed (not proper JWT format)
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl std::fmt::Display for JwtValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenExpired { expired_at } => {
                write!(
                    f,
                    "JWT token expired at {}",
                    expired_at.format("%Y-%m-%d %H:%M:%S UTC")
                )
            }
            Self::TokenInvalid { reason } => {
                write!(f, "JWT token signature is invalid: {reason}")
            }
            Self::TokenMalformed { details } => {
                write!(f, "JWT token is malformed: {details}")
            }
        }
    }
}

impl std::error::Error for JwtValidationError {}

impl From<JwtValidationError> for AppError {
    fn from(error: JwtValidationError) -> Self {
        match &error {
            JwtValidationError::TokenExpired { .. } => Self::auth_expired(),
            JwtValidationError::TokenInvalid { .. } | JwtValidationError::TokenMalformed { .. } => {
                Self::auth_invalid(error.to_string())
            }
        }
    }
}

/// JWT claims for user authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Authenticated user context extracted from a valid token
#[derive(Debug, Clone)]
pub struct AuthResult {
    /// Authenticated user ID
    pub user_id: Uuid,
    /// User email from the token
    pub email: String,
}

/// Authentication manager for JWT tokens and passwords
#[derive(Clone)]
pub struct AuthManager {
    secret: Vec<u8>,
    token_expiry_hours: i64,
}

impl AuthManager {
    /// Create a new authentication manager
    #[must_use]
    pub fn new(secret: Vec<u8>, token_expiry_hours: i64) -> Self {
        Self {
            secret,
            token_expiry_hours,
        }
    }

    /// Generate a JWT token for a user
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails
    pub fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiry = now + Duration::hours(self.token_expiry_hours);

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
    }

    /// Validate a JWT token and return its claims
    ///
    /// # Errors
    ///
    /// Returns [`JwtValidationError`] distinguishing expired, invalid, and
    /// malformed tokens; all surface to the client as 401.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        match decode::<Claims>(token, &DecodingKey::from_secret(&self.secret), &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    // Best effort: decode claims without expiry validation to report when
                    let mut relaxed = Validation::new(Algorithm::HS256);
                    relaxed.validate_exp = false;
                    let expired_at = decode::<Claims>(
                        token,
                        &DecodingKey::from_secret(&self.secret),
                        &relaxed,
                    )
                    .ok()
                    .and_then(|data| DateTime::from_timestamp(data.claims.exp, 0))
                    .unwrap_or_else(Utc::now);
                    Err(JwtValidationError::TokenExpired { expired_at })
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::Base64(_)
                | jsonwebtoken::errors::ErrorKind::Json(_)
                | jsonwebtoken::errors::ErrorKind::Utf8(_) => {
                    Err(JwtValidationError::TokenMalformed {
                        details: e.to_string(),
                    })
                }
                _ => Err(JwtValidationError::TokenInvalid {
                    reason: e.to_string(),
                }),
            },
        }
    }

    /// Validate a token and build the authenticated user context
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the subject is not a UUID
    pub fn authenticate(&self, token: &str) -> AppResult<AuthResult> {
        let claims = self.validate_token(token)?;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::auth_invalid("Invalid token subject"))?;
        Ok(AuthResult {
            user_id,
            email: claims.email,
        })
    }
}

/// Hash a password with bcrypt
///
/// # Errors
///
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> AppResult<String> {
    bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a bcrypt hash
///
/// # Errors
///
/// Returns an error if the hash is malformed
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    bcrypt::verify(password, hash)
        .map_err(|e| AppError::internal(format!("Failed to verify password: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "demo@quickcal.ai".into(),
            password_hash: String::new(),
            created_at: Utc::now(),
        }
    }

    fn manager() -> AuthManager {
        AuthManager::new(b"test-secret".to_vec(), 24)
    }

    #[test]
    fn test_token_round_trip() {
        let manager = manager();
        let user = test_user();
        let token = manager.generate_token(&user).unwrap();
        let claims = manager.validate_token(&token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, user.email);
    }

    #[test]
    fn test_authenticate_extracts_user_id() {
        let manager = manager();
        let user = test_user();
        let token = manager.generate_token(&user).unwrap();
        let auth = manager.authenticate(&token).unwrap();
        assert_eq!(auth.user_id, user.id);
        assert_eq!(auth.email, user.email);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = manager().generate_token(&test_user()).unwrap();
        let other = AuthManager::new(b"different-secret".to_vec(), 24);
        assert!(matches!(
            other.validate_token(&token),
            Err(JwtValidationError::TokenInvalid { .. })
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let manager = AuthManager::new(b"test-secret".to_vec(), -1);
        let token = manager.generate_token(&test_user()).unwrap();
        assert!(matches!(
            manager.validate_token(&token),
            Err(JwtValidationError::TokenExpired { .. })
        ));
    }

    #[test]
    fn test_garbage_token_malformed() {
        assert!(matches!(
            manager().validate_token("not-a-jwt"),
            Err(JwtValidationError::TokenMalformed { .. })
        ));
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = hash_password("demo123").unwrap();
        assert!(verify_password("demo123", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }
}
