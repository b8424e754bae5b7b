//! Auth Endpoints
//!
//! Login and the forgot/verify/reset password exchange. These calls carry
//! no session bearer; reset-password authenticates with the short-lived
//! token returned by code verification.

use serde::{Deserialize, Serialize};

use super::{post_json, ApiError};
use crate::models::AuthUser;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: AuthUser,
}

pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    post_json("/auth/login", request, "").await
}

#[derive(Debug, Clone, Serialize)]
struct ForgotPasswordRequest {
    email: String,
}

pub async fn forgot_password(email: &str) -> Result<(), ApiError> {
    let request = ForgotPasswordRequest {
        email: email.trim().to_string(),
    };
    // Acknowledgement body carries nothing the UI needs
    let _: serde_json::Value = post_json("/auth/forgot-password", &request, "").await?;
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
struct VerifyResetCodeRequest {
    email: String,
    code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResetCodeResponse {
    pub reset_token: String,
}

pub async fn verify_reset_code(email: &str, code: &str) -> Result<VerifyResetCodeResponse, ApiError> {
    let request = VerifyResetCodeRequest {
        email: email.trim().to_string(),
        code: code.trim().to_string(),
    };
    post_json("/auth/verify-reset-code", &request, "").await
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordRequest {
    new_password: String,
}

pub async fn reset_password(new_password: String, reset_token: &str) -> Result<(), ApiError> {
    let request = ResetPasswordRequest { new_password };
    let _: serde_json::Value = post_json("/auth/reset-password", &request, reset_token).await?;
    Ok(())
}
