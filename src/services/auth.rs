//! Authentication service: registration, login, password hashing, tokens

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::visitor::{LoginRequest, RegisterVisitor, Role, SessionClaims, Visitor},
    repository::Repository,
};

/// Hash a password using Argon2 with a fresh random salt
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored argon2 hash
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new visitor. The password confirmation must match and the
    /// email must not already be registered.
    pub async fn register(&self, reg: RegisterVisitor) -> AppResult<Visitor> {
        if reg.password != reg.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        if self.repository.visitors.email_exists(&reg.email).await? {
            return Err(AppError::Conflict(
                "Email or Aadhar ID is already registered".to_string(),
            ));
        }

        let password_hash = hash_password(&reg.password)?;

        self.repository.visitors.create(&reg, &password_hash).await
    }

    /// Authenticate against the role-selected table and issue a session token.
    /// A missing account and a failed password check produce the same message
    /// so login attempts cannot probe for registered emails.
    pub async fn login(&self, req: &LoginRequest) -> AppResult<(String, SessionClaims)> {
        let invalid = || AppError::Authentication("Invalid email or password".to_string());

        let (id, name, email, password_hash, role) = match req.role {
            Role::Admin => {
                let admin = self
                    .repository
                    .visitors
                    .get_admin_by_email(&req.email)
                    .await?
                    .ok_or_else(invalid)?;
                (
                    admin.id,
                    "Administrator".to_string(),
                    admin.email,
                    admin.password,
                    Role::Admin,
                )
            }
            Role::Visitor => {
                let visitor = self
                    .repository
                    .visitors
                    .get_by_email(&req.email)
                    .await?
                    .ok_or_else(invalid)?;
                (
                    visitor.id,
                    visitor.name,
                    visitor.email,
                    visitor.password,
                    Role::Visitor,
                )
            }
        };

        if !verify_password(&password_hash, &req.password)? {
            return Err(invalid());
        }

        let claims = self.session_claims(id, name, email, role);
        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        Ok((token, claims))
    }

    /// Get the full profile of an authenticated visitor
    pub async fn get_visitor(&self, id: i32) -> AppResult<Visitor> {
        self.repository.visitors.get_by_id(id).await
    }

    /// List registered visitors (admin view)
    pub async fn list_visitors(&self) -> AppResult<Vec<Visitor>> {
        self.repository.visitors.list().await
    }

    fn session_claims(&self, id: i32, name: String, email: String, role: Role) -> SessionClaims {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        SessionClaims {
            id,
            name,
            email,
            role,
            exp,
            iat: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hash = hash_password("secret1").unwrap();
        assert_ne!(hash, "secret1");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&hash, "secret1").unwrap());
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hash = hash_password("secret1").unwrap();
        assert!(!verify_password(&hash, "secret2").unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("secret1").unwrap();
        let second = hash_password("secret1").unwrap();
        assert_ne!(first, second);
    }
}
