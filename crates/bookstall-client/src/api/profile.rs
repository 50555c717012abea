//! Profile endpoints beyond the [`super::SessionApi`] seam.

use serde_json::json;

use bookstall_core::types::{Message, User, UserPayload};
use bookstall_core::validation::validate_password;

use super::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    /// `PATCH /profile/users/`: partial profile update.
    pub async fn update_profile(&self, payload: &UserPayload) -> ClientResult<User> {
        self.patch_json("/profile/users/", payload).await
    }

    /// `PATCH /profile/users/change-password/`. The password policy is
    /// checked client-side before any network call.
    pub async fn change_password(&self, new_password: &str) -> ClientResult<Message> {
        validate_password(new_password)?;
        self.patch_json(
            "/profile/users/change-password/",
            &json!({ "new_password": new_password }),
        )
        .await
    }
}
