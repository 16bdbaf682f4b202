use serde::{Deserialize, Serialize};

// Body of POST /api/login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Body of POST /api/register
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub user_type: String,
}

// Body of POST /api/verify-otp
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// `user_type` value that routes a login to the admin dashboard.
pub const ADMIN_USER_TYPE: &str = "admin";
