//! Visitor and admin models, session claims and auth request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Login role branch: visitors and admins live in separate tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Visitor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Visitor => "visitor",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "visitor" => Ok(Role::Visitor),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Internal row structure for visitor queries (interests as delimited text)
#[derive(Debug, Clone, FromRow)]
pub struct VisitorRow {
    id: i32,
    name: String,
    aadhar_id: String,
    email: String,
    age: i32,
    gender: String,
    phone: String,
    address: String,
    city: String,
    pin: String,
    interests: String,
    password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<VisitorRow> for Visitor {
    fn from(row: VisitorRow) -> Self {
        Visitor {
            id: row.id,
            name: row.name,
            aadhar_id: row.aadhar_id,
            email: row.email,
            age: row.age,
            gender: row.gender,
            phone: row.phone,
            address: row.address,
            city: row.city,
            pin: row.pin,
            interests: row
                .interests
                .split(',')
                .filter(|s| !s.is_empty())
                .map(|s| s.trim().to_string())
                .collect(),
            password: row.password,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Full visitor model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Visitor {
    pub id: i32,
    pub name: String,
    pub aadhar_id: String,
    pub email: String,
    pub age: i32,
    pub gender: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub pin: String,
    pub interests: Vec<String>,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin account, used only for login role branching
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Admin {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterVisitor {
    #[validate(length(min = 3, max = 100, message = "Name must be 3-100 characters"))]
    pub name: String,
    #[validate(length(equal = 12, message = "Aadhar ID must be exactly 12 characters"))]
    pub aadhar_id: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(range(min = 1, max = 100, message = "Age must be between 1 and 100"))]
    pub age: i32,
    #[validate(length(min = 1, message = "Gender is required"))]
    pub gender: String,
    #[validate(length(equal = 10, message = "Phone number must be exactly 10 characters"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(equal = 6, message = "PIN must be exactly 6 characters"))]
    pub pin: String,
    #[validate(length(min = 1, message = "At least one interest is required"))]
    pub interests: Vec<String>,
    #[validate(length(min = 6, max = 100, message = "Password must be 6-100 characters"))]
    pub password: String,
    #[validate(length(min = 6, max = 100, message = "Confirm password must be 6-100 characters"))]
    pub confirm_password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, max = 100, message = "Password must be 6-100 characters"))]
    pub password: String,
    pub role: Role,
}

/// Login response body; the token is also set as the session cookie
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// JWT claims for an authenticated session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl SessionClaims {
    /// Create a new signed session token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and verify a session token (signature + expiry)
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Require admin privileges
    pub fn require_admin(&self) -> Result<(), crate::error::AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(crate::error::AppError::Authorization(
                "Administrator privileges required".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(exp_offset: i64) -> SessionClaims {
        let now = Utc::now().timestamp();
        SessionClaims {
            id: 7,
            name: "Asha".to_string(),
            email: "a@x.com".to_string(),
            role: Role::Visitor,
            exp: now + exp_offset,
            iat: now,
        }
    }

    #[test]
    fn test_token_round_trip() {
        let claims = claims(3600);
        let token = claims.create_token("test-secret").unwrap();
        let decoded = SessionClaims::from_token(&token, "test-secret").unwrap();
        assert_eq!(decoded.id, 7);
        assert_eq!(decoded.name, "Asha");
        assert_eq!(decoded.email, "a@x.com");
        assert_eq!(decoded.role, Role::Visitor);
    }

    #[test]
    fn test_expired_token_rejected() {
        let claims = claims(-3600);
        let token = claims.create_token("test-secret").unwrap();
        assert!(SessionClaims::from_token(&token, "test-secret").is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = claims(3600).create_token("test-secret").unwrap();
        assert!(SessionClaims::from_token(&token, "other-secret").is_err());
    }
}
