use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::login_admin::{
    LoginAdminError, LoginAdminRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginAdminRequestDto {
    #[schema(example = "admin@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginAdminResponse {
    /// Bearer token for the admin routes
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    #[schema(example = "Bearer")]
    pub token_type: String,

    /// Lifetime in seconds
    #[schema(example = 3600)]
    pub expires_in: i64,
}

/// Admin login
///
/// Exchanges the configured admin credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/admin/login",
    tag = "Admin",
    request_body = LoginAdminRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginAdminResponse>)),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/admin/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginAdminRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginAdminRequest::new(&dto.email, &dto.password) {
        Ok(request) => request,
        Err(errors) => return ApiResponse::validation_error(errors),
    };

    info!(email = %request.email(), "Admin login attempt");

    match data.login_admin.execute(request).await {
        Ok(response) => {
            info!(email = %response.email, "Admin logged in");
            ApiResponse::success(LoginAdminResponse {
                access_token: response.access_token,
                token_type: "Bearer".to_string(),
                expires_in: response.expires_in,
            })
        }
        Err(LoginAdminError::InvalidCredentials) => {
            warn!("Admin login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(e) => {
            error!(error = %e, "Admin login failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::HashError;
    use crate::modules::auth::application::use_cases::login_admin::{
        ILoginAdminUseCase, LoginAdminResponse as LoginResult,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    #[derive(Clone)]
    struct StubLogin(Result<LoginResult, LoginAdminError>);

    #[async_trait]
    impl ILoginAdminUseCase for StubLogin {
        async fn execute(
            &self,
            _request: LoginAdminRequest,
        ) -> Result<LoginResult, LoginAdminError> {
            self.0.clone()
        }
    }

    async fn call(stub: StubLogin, body: Value) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default().with_login_admin(stub).build();
        let app =
            test::init_service(App::new().app_data(state).service(login_admin_handler)).await;

        let req = test::TestRequest::post()
            .uri("/admin/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_login_success() {
        let stub = StubLogin(Ok(LoginResult {
            access_token: "jwt".to_string(),
            expires_in: 3600,
            email: "admin@example.com".to_string(),
        }));

        let (status, body) = call(
            stub,
            json!({"email": "admin@example.com", "password": "secret"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["access_token"], "jwt");
        assert_eq!(body["data"]["token_type"], "Bearer");
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials() {
        let stub = StubLogin(Err(LoginAdminError::InvalidCredentials));

        let (status, body) = call(
            stub,
            json!({"email": "admin@example.com", "password": "wrong"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn test_login_validation_error() {
        let stub = StubLogin(Err(LoginAdminError::InvalidCredentials));

        let (status, body) = call(stub, json!({"email": "nope", "password": ""})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"]["fields"]["email"].is_array());
        assert!(body["error"]["fields"]["password"].is_array());
    }

    #[actix_web::test]
    async fn test_login_hash_failure_is_internal() {
        let stub = StubLogin(Err(LoginAdminError::PasswordVerificationFailed(
            HashError::VerifyFailed,
        )));

        let (status, body) = call(
            stub,
            json!({"email": "admin@example.com", "password": "secret"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
