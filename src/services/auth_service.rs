//! Authentication service

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::JwtConfig,
    constants::token_types,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::UserWithRole,
    utils::crypto,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub name: String,
    pub role: String,
    pub token_type: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtConfig,
        email: &str,
        password: &str,
    ) -> AppResult<(UserWithRole, String, String, i64)> {
        // Inactive accounts are indistinguishable from unknown ones
        let user = UserRepository::find_active_with_role_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !crypto::verify_password(password, &user.password_hash) {
            return Err(AppError::InvalidCredentials);
        }

        let (access_token, expires_in) = Self::generate_access_token(&user, jwt)?;
        let refresh_token = Self::generate_refresh_token(&user, jwt)?;

        Ok((user, access_token, refresh_token, expires_in))
    }

    /// Exchange a refresh token for a fresh token pair
    pub async fn refresh(
        pool: &PgPool,
        jwt: &JwtConfig,
        refresh_token: &str,
    ) -> AppResult<(String, String, i64)> {
        let claims = Self::verify_token(refresh_token, &jwt.secret)?;

        if claims.token_type != token_types::REFRESH {
            return Err(AppError::InvalidToken);
        }

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;

        // Deactivated users cannot renew their access
        let user = UserRepository::find_active_with_role_by_id(pool, &user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        let (access_token, expires_in) = Self::generate_access_token(&user, jwt)?;
        let new_refresh_token = Self::generate_refresh_token(&user, jwt)?;

        Ok((access_token, new_refresh_token, expires_in))
    }

    /// Get the current user by ID
    pub async fn current_user(pool: &PgPool, user_id: &Uuid) -> AppResult<UserWithRole> {
        UserRepository::find_active_with_role_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Generate access token
    fn generate_access_token(user: &UserWithRole, jwt: &JwtConfig) -> AppResult<(String, i64)> {
        let expires_in = jwt.access_token_expiry_minutes * 60;
        let token = Self::generate_token(
            user,
            jwt,
            token_types::ACCESS,
            Duration::minutes(jwt.access_token_expiry_minutes),
        )?;

        Ok((token, expires_in))
    }

    /// Generate refresh token
    fn generate_refresh_token(user: &UserWithRole, jwt: &JwtConfig) -> AppResult<String> {
        Self::generate_token(
            user,
            jwt,
            token_types::REFRESH,
            Duration::days(jwt.refresh_token_expiry_days),
        )
    }

    fn generate_token(
        user: &UserWithRole,
        jwt: &JwtConfig,
        token_type: &str,
        validity: Duration,
    ) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            role: user.role_name.clone(),
            token_type: token_type.to_string(),
            exp: (now + validity).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::roles;

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry_minutes: 30,
            refresh_token_expiry_days: 7,
        }
    }

    fn sample_user() -> UserWithRole {
        let now = Utc::now();
        UserWithRole {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "user@example.com".to_string(),
            password_hash: String::new(),
            role_id: Uuid::new_v4(),
            role_name: roles::USER.to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_access_token_roundtrip() {
        let jwt = jwt_config();
        let user = sample_user();

        let (token, expires_in) = AuthService::generate_access_token(&user, &jwt).unwrap();
        assert_eq!(expires_in, 30 * 60);

        let claims = AuthService::verify_token(&token, &jwt.secret).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.role, roles::USER);
        assert_eq!(claims.token_type, token_types::ACCESS);
    }

    #[test]
    fn test_refresh_token_is_typed() {
        let jwt = jwt_config();
        let user = sample_user();

        let token = AuthService::generate_refresh_token(&user, &jwt).unwrap();
        let claims = AuthService::verify_token(&token, &jwt.secret).unwrap();

        assert_eq!(claims.token_type, token_types::REFRESH);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let jwt = jwt_config();
        let user = sample_user();

        let (token, _) = AuthService::generate_access_token(&user, &jwt).unwrap();
        assert!(AuthService::verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let jwt = jwt_config();
        let user = sample_user();
        let now = Utc::now();

        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            role: user.role_name.clone(),
            token_type: token_types::ACCESS.to_string(),
            exp: (now - Duration::minutes(5)).timestamp(),
            iat: (now - Duration::minutes(35)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt.secret.as_bytes()),
        )
        .unwrap();

        match AuthService::verify_token(&token, &jwt.secret) {
            Err(AppError::TokenExpired) => {}
            other => panic!("expected TokenExpired, got {other:?}"),
        }
    }
}
