//! Authentication service

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use crate::{
    db::repositories::{NewUser, UserRepository},
    error::{AppError, AppResult},
    handlers::auth::request::RegisterRequest,
    models::User,
};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    pub async fn register(pool: &PgPool, payload: &RegisterRequest) -> AppResult<User> {
        let email = payload.email.trim().to_lowercase();

        // Check if email exists
        if UserRepository::find_by_email(pool, &email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let password_hash = Self::hash_password(&payload.password)?;

        let user = UserRepository::create(
            pool,
            &NewUser {
                username: payload.username.trim(),
                email: &email,
                password_hash: &password_hash,
                school: payload.school.trim(),
                student_id: payload.student_id.trim(),
                phone: payload.phone.trim(),
            },
        )
        .await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Login with email and password
    pub async fn login(pool: &PgPool, email: &str, password: &str) -> AppResult<User> {
        let user = UserRepository::find_by_email(pool, &email.trim().to_lowercase())
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Hash password using Argon2
    fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = AuthService::hash_password("Secret123").unwrap();
        assert_ne!(hash, "Secret123");
        assert!(AuthService::verify_password("Secret123", &hash).unwrap());
        assert!(!AuthService::verify_password("secret123", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_internal_error() {
        let err = AuthService::verify_password("Secret123", "not-a-hash").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
