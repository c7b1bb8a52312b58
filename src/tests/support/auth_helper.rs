use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::ports::outgoing::TokenProvider;

pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";

pub fn token_provider() -> JwtTokenService {
    let config = JwtConfig::new(
        "test_secret_key_for_testing_purposes_only".to_string(),
        "portfolio_site_test".to_string(),
        3600,
    )
    .expect("valid test jwt config");

    JwtTokenService::new(config)
}

/// App data the `AdminUser` extractor reads.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(token_provider());
    web::Data::new(provider)
}

/// `Authorization` header carrying a valid admin token.
pub fn bearer() -> (&'static str, String) {
    let token = token_provider()
        .generate_access_token(TEST_ADMIN_EMAIL)
        .expect("token generation");

    ("Authorization", format!("Bearer {token}"))
}
