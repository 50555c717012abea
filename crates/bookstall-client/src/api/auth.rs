//! Authentication and password-reset endpoints.

use serde_json::json;

use bookstall_core::types::{LoginCredentials, LoginResponse, Message, RegisterRequest, User};
use bookstall_core::validation::validate_password;

use super::{ApiClient, SessionApi};
use crate::error::ClientResult;

impl SessionApi for ApiClient {
    async fn login(&self, credentials: &LoginCredentials) -> ClientResult<LoginResponse> {
        self.post_json("/auth/login/", credentials).await
    }

    async fn register(&self, data: &RegisterRequest) -> ClientResult<User> {
        self.post_json("/auth/register/", data).await
    }

    async fn logout(&self, refresh_token: &str) -> ClientResult<()> {
        self.post_empty("/auth/logout/", &json!({ "refresh": refresh_token }))
            .await
    }

    async fn get_profile(&self) -> ClientResult<User> {
        self.get_json("/profile/users/").await
    }
}

impl ApiClient {
    /// `POST /auth/password-reset-request/`: asks the backend to email an
    /// OTP to `email`.
    pub async fn request_password_reset(&self, email: &str) -> ClientResult<Message> {
        self.post_json("/auth/password-reset-request/", &json!({ "email": email }))
            .await
    }

    /// `POST /auth/password-reset-confirm/`: redeems the OTP for a new
    /// password. The password policy is checked client-side first.
    pub async fn confirm_password_reset(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> ClientResult<Message> {
        validate_password(new_password)?;
        self.post_json(
            "/auth/password-reset-confirm/",
            &json!({ "email": email, "otp": otp, "new_password": new_password }),
        )
        .await
    }
}
