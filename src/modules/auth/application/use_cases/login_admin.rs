use async_trait::async_trait;
use email_address::EmailAddress;
use std::fmt;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::{
    HashError, PasswordHasher, TokenError, TokenProvider,
};
use crate::shared::validation::ValidationErrors;

// ========================= Credentials ===========================

/// The single configured administrator.
#[derive(Clone)]
pub struct AdminCredentials {
    email: String,
    password_hash: String,
}

impl AdminCredentials {
    pub fn new(email: &str, password_hash: &str) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password_hash: password_hash.to_string(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password_hash", &"***")
            .finish()
    }
}

// ========================= Login Request =========================

/// Validated login request.
#[derive(Debug, Clone)]
pub struct LoginAdminRequest {
    email: String,
    password: String,
}

impl LoginAdminRequest {
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let email = email.trim();

        if email.is_empty() {
            errors.add("email", "The email field is required.");
        } else if !EmailAddress::is_valid(email) {
            errors.add("email", "The email must be a valid email address.");
        }

        if password.is_empty() {
            errors.add("password", "The password field is required.");
        }

        errors.finish(Self {
            email: email.to_lowercase(),
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Result =============================

#[derive(Debug, Clone, PartialEq)]
pub struct LoginAdminResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub email: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginAdminError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(#[from] HashError),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(#[from] TokenError),
}

#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginAdminRequest)
        -> Result<LoginAdminResponse, LoginAdminError>;
}

// ====================== Use Case =================================

#[derive(Clone)]
pub struct LoginAdminUseCase {
    credentials: AdminCredentials,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl LoginAdminUseCase {
    pub fn new(
        credentials: AdminCredentials,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            credentials,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(
        &self,
        request: LoginAdminRequest,
    ) -> Result<LoginAdminResponse, LoginAdminError> {
        if request.email() != self.credentials.email() {
            return Err(LoginAdminError::InvalidCredentials);
        }

        let matches = self
            .hasher
            .verify_password(request.password(), &self.credentials.password_hash)
            .await?;

        if !matches {
            return Err(LoginAdminError::InvalidCredentials);
        }

        let access_token = self.tokens.generate_access_token(self.credentials.email())?;

        Ok(LoginAdminResponse {
            access_token,
            expires_in: self.tokens.access_token_expiry(),
            email: self.credentials.email().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::TokenClaims;
    use mockall::mock;

    mock! {
        pub HasherMock {}

        #[async_trait]
        impl PasswordHasher for HasherMock {
            async fn hash_password(&self, password: &str) -> Result<String, HashError>;
            async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
        }
    }

    mock! {
        pub TokensMock {}

        impl TokenProvider for TokensMock {
            fn generate_access_token(&self, subject: &str) -> Result<String, TokenError>;
            fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
            fn access_token_expiry(&self) -> i64;
        }
    }

    fn credentials() -> AdminCredentials {
        AdminCredentials::new("Admin@Example.com", "$argon2id$stored")
    }

    fn request(email: &str, password: &str) -> LoginAdminRequest {
        LoginAdminRequest::new(email, password).unwrap()
    }

    #[test]
    fn request_validation_collects_fields() {
        let errors = LoginAdminRequest::new("not-an-email", "").unwrap_err();
        assert!(errors.has("email"));
        assert!(errors.has("password"));
    }

    #[tokio::test]
    async fn login_success_issues_token() {
        let mut hasher = MockHasherMock::new();
        hasher
            .expect_verify_password()
            .withf(|password, hash| password == "secret" && hash == "$argon2id$stored")
            .returning(|_, _| Ok(true));

        let mut tokens = MockTokensMock::new();
        tokens
            .expect_generate_access_token()
            .withf(|subject| subject == "admin@example.com")
            .returning(|_| Ok("token".to_string()));
        tokens.expect_access_token_expiry().return_const(3600i64);

        let use_case = LoginAdminUseCase::new(credentials(), Arc::new(hasher), Arc::new(tokens));
        let response = use_case
            .execute(request("ADMIN@example.com ", "secret"))
            .await
            .unwrap();

        assert_eq!(response.access_token, "token");
        assert_eq!(response.expires_in, 3600);
        assert_eq!(response.email, "admin@example.com");
    }

    #[tokio::test]
    async fn unknown_email_never_checks_password() {
        let mut hasher = MockHasherMock::new();
        hasher.expect_verify_password().never();

        let use_case = LoginAdminUseCase::new(
            credentials(),
            Arc::new(hasher),
            Arc::new(MockTokensMock::new()),
        );
        let result = use_case.execute(request("other@example.com", "secret")).await;

        assert!(matches!(result, Err(LoginAdminError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let mut hasher = MockHasherMock::new();
        hasher.expect_verify_password().returning(|_, _| Ok(false));

        let use_case = LoginAdminUseCase::new(
            credentials(),
            Arc::new(hasher),
            Arc::new(MockTokensMock::new()),
        );
        let result = use_case.execute(request("admin@example.com", "nope")).await;

        assert!(matches!(result, Err(LoginAdminError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn broken_hash_is_reported() {
        let mut hasher = MockHasherMock::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Err(HashError::VerifyFailed));

        let use_case = LoginAdminUseCase::new(
            credentials(),
            Arc::new(hasher),
            Arc::new(MockTokensMock::new()),
        );
        let result = use_case.execute(request("admin@example.com", "secret")).await;

        assert!(matches!(
            result,
            Err(LoginAdminError::PasswordVerificationFailed(HashError::VerifyFailed))
        ));
    }
}
