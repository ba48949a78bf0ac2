//! Request/response DTOs for the HRMS backend API
//!
//! These mirror the backend's JSON shapes exactly. Business rejections come
//! back as well-formed bodies (usually just `{"message": ...}`), so the
//! response types keep every field optional and let the caller inspect what
//! arrived.

use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, UserInfo, UserRole};

// =============================================================================
// Auth
// =============================================================================

/// Login request. `user_type` is chosen by which login panel was opened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub user_type: UserRole,
}

/// Login response: `user` on success, `message` on rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{"message": ...}` response used by most mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Registration payload: the complete profile as collected from the admin
/// registration form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub dob: String,
    pub permanent_address: String,
    pub current_address: String,
    pub pan_number: String,
    pub aadhar_number: String,
    pub contactnumber: String,
    pub alternate_contact_number: String,
    pub alternate_contact_person: String,
    pub alternate_contact_relation: String,
    pub emergency_number: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub account_holder_name: String,
    pub branch: String,
    pub department: String,
    pub reporting_manager1: String,
    pub reporting_manager1_mail: String,
    pub reporting_manager2: String,
    pub reporting_manager2_mail: String,
    pub employee_role: String,
    pub employment_status: String,
    pub join_date: String,
}

// =============================================================================
// Profile
// =============================================================================

/// Profile update response: the server returns the fresh, authoritative
/// user record alongside the message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

// =============================================================================
// Leave / WFH / Comp-off
// =============================================================================

/// One submission covers leave, WFH and comp-off; they differ only in
/// `leave_type` and how the dates are filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveApplicationRequest {
    pub employee_id: String,
    pub leave_type: String,
    pub from_date: String,
    pub to_date: String,
    pub description: String,
}

// =============================================================================
// Attendance
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceLoginRequest {
    pub employee_id: String,
    pub date: String,
    pub employee_name: String,
    pub work_location: String,
}

/// Attendance login response: `record` on success, `message` otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceLoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub record: Option<AttendanceRecord>,
}

/// Attendance logout response: `logout_time` on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceLogoutResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub logout_time: Option<String>,
}
