//! Shared types for the HRMS client
//!
//! Domain models, request/response DTOs, and client-side validation rules
//! used by the client crate. Pure data: no I/O here.

pub mod client;
pub mod models;
pub mod validate;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{
    AttendanceLoginRequest, AttendanceLoginResponse, AttendanceLogoutResponse,
    ChangePasswordRequest, ForgotPasswordRequest, LeaveApplicationRequest, LoginRequest,
    LoginResponse, MessageResponse, ProfileUpdateResponse, RegisterRequest, ResetPasswordRequest,
};
pub use models::{AttendanceRecord, LeaveRecord, Notification, UserInfo, UserRole};
