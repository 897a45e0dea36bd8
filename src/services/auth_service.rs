//! Authentication service - Registration, login, and password reset.
//!
//! Uses the domain Password value object for hashing and the ResetToken
//! value object for the password-reset flow. Tokens are HMAC-signed JWTs
//! carrying the user id and role claims.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{
    Config, REGISTRABLE_ROLES, RESET_TOKEN_TTL_MINUTES, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER,
};
use crate::domain::{NewUser, Password, RegisterInput, ResetToken, User};
use crate::errors::{AppError, AppResult};
use crate::infra::{Mailer, Repositories};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user account
    async fn register(&self, input: RegisterInput) -> AppResult<User>;

    /// Login and return JWT token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;

    /// Issue a password-reset token and email it to the account.
    /// Succeeds silently for unknown emails to avoid leaking account
    /// existence.
    async fn request_password_reset(&self, email: String) -> AppResult<()>;

    /// Consume a reset token and store the new password
    async fn reset_password(&self, token: String, new_password: String) -> AppResult<()>;
}

/// Generate JWT token for a user (shared helper to avoid duplication)
fn generate_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

/// Verify JWT token and extract claims (shared helper)
fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService.
pub struct Authenticator<R: Repositories> {
    repos: Arc<R>,
    config: Config,
    mailer: Arc<Mailer>,
}

impl<R: Repositories> Authenticator<R> {
    /// Create new auth service instance
    pub fn new(repos: Arc<R>, config: Config, mailer: Arc<Mailer>) -> Self {
        Self {
            repos,
            config,
            mailer,
        }
    }
}

#[async_trait]
impl<R: Repositories> AuthService for Authenticator<R> {
    async fn register(&self, input: RegisterInput) -> AppResult<User> {
        // Admins are provisioned by existing admins, never self-registered
        if !REGISTRABLE_ROLES.contains(&input.role.as_str()) {
            return Err(AppError::validation(
                "Role must be employer or job_seeker",
            ));
        }

        // Email format is validated by the handler's ValidatedJson extractor
        if self.repos.users().find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&input.password)?.into_string();
        self.repos
            .users()
            .create(NewUser {
                name: input.name,
                email: input.email,
                password_hash,
                role: input.role,
                date_of_birth: input.date_of_birth,
                gender: input.gender,
                address: input.address,
            })
            .await
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user_result = self.repos.users().find_by_email(&email).await?;

        // SECURITY: Perform password verification even if user doesn't exist
        // to prevent timing attacks that could enumerate valid emails.
        // We use a dummy hash that will always fail verification.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let (password_hash, account_usable) = match &user_result {
            Some(user) => (user.password_hash.as_str(), user.is_active),
            None => (dummy_hash, false),
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        // Deactivated accounts fail the same way as bad credentials
        if !account_usable || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // Safe to unwrap since account_usable implies the user exists
        generate_token(user_result.as_ref().unwrap(), &self.config)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }

    async fn request_password_reset(&self, email: String) -> AppResult<()> {
        let user = match self.repos.users().find_by_email(&email).await? {
            Some(user) if user.is_active => user,
            // No account-existence leak: unknown or deactivated emails
            // get the same success-shaped outcome
            _ => {
                tracing::debug!("Password reset requested for unknown email");
                return Ok(());
            }
        };

        // A new request supersedes any outstanding tokens
        self.repos
            .password_resets()
            .invalidate_for_user(user.id)
            .await?;

        let token = ResetToken::generate();
        let expires_at = Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES);

        self.repos
            .password_resets()
            .create(user.id, token.digest().to_string(), expires_at)
            .await?;

        let body = format!(
            "Hello {},\n\n\
             A password reset was requested for your account. Open the link\n\
             below within {} minutes to choose a new password:\n\n\
             {}/reset-password?token={}\n\n\
             If you did not request this, you can ignore this email.",
            user.name, RESET_TOKEN_TTL_MINUTES, self.config.public_base_url, token.raw()
        );

        // Best effort: a failed send still leaves the token usable via a
        // retried request
        if let Err(e) = self.mailer.send(&user.email, "Password reset", &body).await {
            tracing::warn!("Failed to send password-reset email: {}", e);
        }

        Ok(())
    }

    async fn reset_password(&self, token: String, new_password: String) -> AppResult<()> {
        let digest = ResetToken::digest_of(&token);

        let record = self
            .repos
            .password_resets()
            .find_valid(&digest, Utc::now())
            .await?
            .ok_or(AppError::Unauthorized)?;

        let password_hash = Password::new(&new_password)?.into_string();

        self.repos
            .users()
            .set_password_hash(record.user_id, password_hash)
            .await?;

        // Tokens are single-use
        self.repos.password_resets().mark_used(record.id).await?;

        Ok(())
    }
}
