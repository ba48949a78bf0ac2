//! Domain models returned by the HRMS backend

use serde::{Deserialize, Deserializer, Serialize};

/// Which login panel the user authenticated through.
///
/// Sent with the login request as `user_type`; the server echoes the
/// authoritative value back on the returned user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Employee,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Employee => write!(f, "employee"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// The authenticated user's profile record as held by the session.
///
/// Everything beyond the name and id is optional on the wire; the backend
/// returns `null` for fields never filled in. Field names follow the
/// backend's column names verbatim (including `contactnumber`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_type: UserRole,

    // Personal details
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub permanent_address: Option<String>,
    #[serde(default)]
    pub current_address: Option<String>,
    #[serde(default)]
    pub pan_number: Option<String>,
    #[serde(default)]
    pub aadhar_number: Option<String>,

    // Contact details
    #[serde(default)]
    pub contactnumber: Option<String>,
    #[serde(default)]
    pub alternate_contact_number: Option<String>,
    #[serde(default)]
    pub alternate_contact_person: Option<String>,
    #[serde(default)]
    pub alternate_contact_relation: Option<String>,
    #[serde(default)]
    pub emergency_number: Option<String>,

    // Bank details
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub ifsc_code: Option<String>,
    #[serde(default)]
    pub account_holder_name: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,

    // Work details
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub reporting_manager1: Option<String>,
    #[serde(default)]
    pub reporting_manager1_mail: Option<String>,
    #[serde(default)]
    pub reporting_manager2: Option<String>,
    #[serde(default)]
    pub reporting_manager2_mail: Option<String>,
    #[serde(default)]
    pub employee_role: Option<String>,
    #[serde(default)]
    pub employment_status: Option<String>,
    #[serde(default)]
    pub join_date: Option<String>,
}

impl UserInfo {
    /// "First Last", as rendered in headers and attendance rows.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One row of the leave/WFH/comp-off history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    pub leave_type: String,
    pub from_date: String,
    #[serde(default)]
    pub to_date: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// One attendance session.
///
/// A record with no `logout_time` is still open; the logout action
/// completes it in place, after which it is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub record_id: String,
    pub date: String,
    pub login_time: String,
    #[serde(default)]
    pub logout_time: Option<String>,
    #[serde(default)]
    pub employee_name: String,
    pub work_location: String,
}

impl AttendanceRecord {
    pub fn is_open(&self) -> bool {
        self.logout_time.is_none()
    }
}

/// A notification as fetched from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    #[serde(deserialize_with = "bool_from_int_or_bool")]
    pub is_read: bool,
}

// The backend stores is_read as an SQLite INTEGER and serializes it as 0/1.
fn bool_from_int_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrBool {
        Int(i64),
        Bool(bool),
    }

    Ok(match IntOrBool::deserialize(deserializer)? {
        IntOrBool::Int(n) => n != 0,
        IntOrBool::Bool(b) => b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_is_read_accepts_sqlite_integers() {
        let n: Notification = serde_json::from_str(r#"{"message":"hi","is_read":0}"#).unwrap();
        assert!(!n.is_read);
        let n: Notification = serde_json::from_str(r#"{"message":"hi","is_read":1}"#).unwrap();
        assert!(n.is_read);
        let n: Notification = serde_json::from_str(r#"{"message":"hi","is_read":true}"#).unwrap();
        assert!(n.is_read);
    }

    #[test]
    fn user_role_wire_format() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), r#""admin""#);
        let role: UserRole = serde_json::from_str(r#""employee""#).unwrap();
        assert_eq!(role, UserRole::Employee);
    }

    #[test]
    fn user_info_tolerates_missing_optional_fields() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id":"e-1","first_name":"A","last_name":"B"}"#).unwrap();
        assert_eq!(user.full_name(), "A B");
        assert_eq!(user.user_type, UserRole::Employee);
        assert!(user.department.is_none());
    }

    #[test]
    fn attendance_record_open_state() {
        let rec: AttendanceRecord = serde_json::from_str(
            r#"{"record_id":"r-1","date":"2025-01-06","login_time":"09:02:11",
                "employee_name":"A B","work_location":"Office","logout_time":null}"#,
        )
        .unwrap();
        assert!(rec.is_open());
    }
}
