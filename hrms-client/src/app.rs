//! HrmsApp - the application orchestrator
//!
//! One method per backend capability, each composing the transport, the
//! session, the view router, and the form adapters. Every action surfaces
//! its own user-facing message; a failed action leaves prior state
//! untouched and the same gesture can simply be retried.

use shared::{
    AttendanceLoginRequest, AttendanceLoginResponse, AttendanceLogoutResponse, AttendanceRecord,
    ChangePasswordRequest, ForgotPasswordRequest, LeaveApplicationRequest, LeaveRecord,
    LoginRequest, LoginResponse, MessageResponse, Notification, ProfileUpdateResponse,
    ResetPasswordRequest, UserRole, validate,
};

use crate::forms::{FieldStore, LOCATION_PLACEHOLDER, ProfileSection};
use crate::notifications::NotificationPanel;
use crate::prompt::{AutoConfirm, ConfirmPrompt};
use crate::view::{AfterShow, Popup, Section, TableView, ViewState};
use crate::{ClientConfig, ClientResult, HttpTransport, Session};

pub struct HrmsApp {
    transport: HttpTransport,
    session: Session,
    view: ViewState,
    forms: FieldStore,
    notifications: NotificationPanel,
    prompt: Box<dyn ConfirmPrompt>,
    leave_history: TableView<LeaveRecord>,
    attendance: TableView<AttendanceRecord>,
}

impl HrmsApp {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Self::with_prompt(config, Box::new(AutoConfirm))
    }

    pub fn with_prompt(
        config: &ClientConfig,
        prompt: Box<dyn ConfirmPrompt>,
    ) -> ClientResult<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
            session: Session::new(),
            view: ViewState::new(),
            forms: FieldStore::new(),
            notifications: NotificationPanel::new(),
            prompt,
            leave_history: TableView::default(),
            attendance: TableView::default(),
        })
    }

    // ---- state access ----

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn forms(&self) -> &FieldStore {
        &self.forms
    }

    pub fn forms_mut(&mut self) -> &mut FieldStore {
        &mut self.forms
    }

    pub fn notifications(&self) -> &NotificationPanel {
        &self.notifications
    }

    pub fn leave_history(&self) -> &TableView<LeaveRecord> {
        &self.leave_history
    }

    pub fn attendance(&self) -> &TableView<AttendanceRecord> {
        &self.attendance
    }

    fn alert(&mut self, message: impl Into<String>) {
        self.view.push_alert(message);
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Open the employee login panel; the next login request carries
    /// `user_type = employee`.
    pub fn open_employee_login(&mut self) {
        self.session.set_login_role(UserRole::Employee);
    }

    /// Open the admin login panel.
    pub fn open_admin_login(&mut self) {
        self.session.set_login_role(UserRole::Admin);
    }

    /// Submit the login form. On success the identity is stored wholesale
    /// and the server's `user_type` decides the post-login view: admin
    /// goes straight to the registration panel, an employee gets the
    /// populated dashboard plus a notification fetch.
    pub async fn login(&mut self) {
        let request = LoginRequest {
            username: self.forms.input_trimmed("login-username"),
            password: self.forms.input("login-password").to_string(),
            user_type: self.session.login_role(),
        };

        match self
            .transport
            .post::<LoginResponse, _>("/login", &request)
            .await
        {
            Ok(LoginResponse {
                user: Some(user), ..
            }) => {
                let role = user.user_type;
                self.session.login(user.clone());
                self.view.enter(role);
                if role == UserRole::Employee {
                    self.forms.populate(&user);
                    self.refresh_notifications().await;
                }
            }
            Ok(LoginResponse { message, .. }) => {
                let message = message.unwrap_or_else(|| "Invalid email or password!".to_string());
                self.alert(message);
            }
            Err(err) => self.alert(format!("Login failed: {err}")),
        }
    }

    /// Sign out after reconfirmation. Clears the session and resets the
    /// whole view to the unauthenticated initial state, so no per-session
    /// state (open popups, filled fields) survives.
    pub async fn sign_out(&mut self) {
        if !self.prompt.confirm("Are you sure you want to sign out?").await {
            return;
        }
        self.session.logout();
        self.view.reset();
        self.forms.reset();
        self.notifications.reset();
        self.leave_history = TableView::default();
        self.attendance = TableView::default();
    }

    // =========================================================================
    // View routing
    // =========================================================================

    /// Show a top-level section and run its after-show refetch, if any.
    pub async fn show_section(&mut self, section: Section) {
        match self.view.show(section) {
            Some(AfterShow::ReloadAttendance) if self.session.is_logged_in() => {
                self.load_attendance_records().await;
            }
            Some(AfterShow::ReloadLeaveHistory) if self.session.is_logged_in() => {
                self.load_leave_history().await;
            }
            _ => {}
        }
    }

    // =========================================================================
    // Registration (admin panel)
    // =========================================================================

    pub async fn register_employee(&mut self) {
        let request = match self.forms.collect_register() {
            Ok(request) => request,
            Err(err) => {
                self.alert(format!("Registration failed: {err}"));
                return;
            }
        };
        if !validate::email_is_valid(&request.email) {
            self.alert("Invalid email format");
            return;
        }

        match self
            .transport
            .post::<MessageResponse, _>("/register", &request)
            .await
        {
            Ok(resp) => {
                self.alert(resp.message);
                // Clear the form for the next registration.
                self.forms.clear_prefixed("admin");
            }
            Err(err) => self.alert(format!("Registration failed: {err}")),
        }
    }

    // =========================================================================
    // Profile
    // =========================================================================

    pub fn edit_profile_section(&mut self, section: ProfileSection) {
        self.forms.set_section_editing(section, true);
    }

    /// Save one profile section. The server returns the fresh identity,
    /// which replaces the session's copy and is re-populated into the
    /// forms so any server-side normalization is reflected.
    pub async fn save_profile_section(&mut self, section: ProfileSection) {
        let Some(user) = self.session.current_identity() else {
            self.alert("No user is logged in or user ID is missing.");
            return;
        };
        let path = format!("/profile/{}", user.id);
        let body = self.forms.collect_section(section);

        match self
            .transport
            .put::<ProfileUpdateResponse, _>(&path, &body)
            .await
        {
            Ok(ProfileUpdateResponse {
                user: Some(user), ..
            }) => {
                self.session.login(user.clone());
                self.forms.set_section_editing(section, false);
                self.forms.populate(&user);
                self.alert(format!("{} updated successfully!", section.display_name()));
                self.refresh_notifications().await;
            }
            Ok(ProfileUpdateResponse { message, .. }) => {
                let message = message.unwrap_or_else(|| "Unknown error".to_string());
                self.alert(format!(
                    "Failed to update {}: {message}",
                    section.display_name()
                ));
            }
            Err(err) => self.alert(format!(
                "Failed to update {}: {err}",
                section.display_name()
            )),
        }
    }

    pub async fn change_password(&mut self) {
        let Some(user) = self.session.current_identity() else {
            self.alert("You must be logged in to change your password.");
            return;
        };
        let user_id = user.id.clone();

        let new_password = self.forms.input("change-new-password").to_string();
        let confirmation = self.forms.input("change-confirm-password").to_string();
        if let Err(reason) = validate::check_new_password(&new_password, &confirmation) {
            self.alert(reason);
            return;
        }

        let request = ChangePasswordRequest {
            old_password: self.forms.input("change-current-password").to_string(),
            new_password,
        };
        let path = format!("/profile/change-password/{user_id}");

        match self
            .transport
            .put::<MessageResponse, _>(&path, &request)
            .await
        {
            Ok(resp) if resp.message == "Password updated successfully!" => {
                self.alert("Your password has been updated successfully.");
                self.forms.clear_prefixed("change");
                self.refresh_notifications().await;
            }
            Ok(resp) => self.alert(format!("Password change failed: {}", resp.message)),
            Err(err) => self.alert(format!("An error occurred: {err}")),
        }
    }

    pub async fn reset_password_internal(&mut self) {
        let Some(user) = self.session.current_identity() else {
            self.alert("You must be logged in to reset your password.");
            return;
        };
        let user_id = user.id.clone();

        let new_password = self.forms.input("internal-reset-new-password").to_string();
        let confirmation = self.forms.input("internal-reset-confirm-password").to_string();
        if let Err(reason) = validate::check_new_password(&new_password, &confirmation) {
            self.alert(reason);
            return;
        }

        let request = ResetPasswordRequest { new_password };
        let path = format!("/profile/reset-password-internal/{user_id}");

        match self
            .transport
            .put::<MessageResponse, _>(&path, &request)
            .await
        {
            Ok(resp) if resp.message == "Password reset successfully!" => {
                self.alert("Your password has been reset successfully.");
                self.forms.clear_prefixed("internal-reset");
                self.refresh_notifications().await;
            }
            Ok(resp) => self.alert(format!("Password reset failed: {}", resp.message)),
            Err(err) => self.alert(format!("An error occurred: {err}")),
        }
    }

    pub async fn forgot_password(&mut self) {
        let email = self.forms.input_trimmed("forgot-email");
        if email.is_empty() {
            self.alert("Please enter your email address.");
            return;
        }

        let request = ForgotPasswordRequest { email };
        match self
            .transport
            .post::<MessageResponse, _>("/forgot-password", &request)
            .await
        {
            Ok(resp) => {
                self.alert(resp.message);
                self.view.close_popup(Popup::ForgotPassword);
                self.forms.clear_prefixed("forgot");
            }
            Err(err) => self.alert(format!("An error occurred: {err}")),
        }
    }

    // =========================================================================
    // Leave / WFH / Comp-off
    // =========================================================================

    /// Submit the leave request popup. Success closes the popup and
    /// triggers a full history refetch; the table is never appended to
    /// locally.
    pub async fn submit_leave(&mut self) {
        let Some(user) = self.session.current_identity() else {
            self.alert("Please log in to submit a request.");
            return;
        };
        let payload = LeaveApplicationRequest {
            employee_id: user.id.clone(),
            leave_type: self.forms.input("leave-type-select").to_string(),
            from_date: self.forms.input("leave-from-date").to_string(),
            to_date: self.forms.input("leave-to-date").to_string(),
            description: self.forms.input_trimmed("leave-description"),
        };
        if payload.leave_type.is_empty()
            || payload.from_date.is_empty()
            || payload.to_date.is_empty()
        {
            self.alert("Please select a leave type and both dates.");
            return;
        }
        self.submit_leave_application(payload, Popup::LeaveRequest)
            .await;
    }

    pub async fn submit_wfh(&mut self) {
        let Some(user) = self.session.current_identity() else {
            self.alert("Please log in to submit a request.");
            return;
        };
        let payload = LeaveApplicationRequest {
            employee_id: user.id.clone(),
            leave_type: "WFH".to_string(),
            from_date: self.forms.input("wfh-from-date").to_string(),
            to_date: self.forms.input("wfh-to-date").to_string(),
            description: self.forms.input_trimmed("wfh-description"),
        };
        if payload.from_date.is_empty() || payload.to_date.is_empty() {
            self.alert("Please select both dates.");
            return;
        }
        self.submit_leave_application(payload, Popup::WfhRequest)
            .await;
    }

    /// Comp-off covers a single worked date; it doubles as both ends of
    /// the range.
    pub async fn submit_compoff(&mut self) {
        let Some(user) = self.session.current_identity() else {
            self.alert("Please log in to submit a request.");
            return;
        };
        let work_date = self.forms.input("compoff-work-date").to_string();
        if work_date.is_empty() {
            self.alert("Please select the working date.");
            return;
        }
        let payload = LeaveApplicationRequest {
            employee_id: user.id.clone(),
            leave_type: "Comp-off".to_string(),
            from_date: work_date.clone(),
            to_date: work_date,
            description: self.forms.input_trimmed("compoff-description"),
        };
        self.submit_leave_application(payload, Popup::CompOffRequest)
            .await;
    }

    async fn submit_leave_application(&mut self, payload: LeaveApplicationRequest, popup: Popup) {
        match self
            .transport
            .post::<MessageResponse, _>("/leave-application", &payload)
            .await
        {
            Ok(resp) => {
                self.alert(resp.message);
                self.view.close_popup(popup);
                self.load_leave_history().await;
            }
            Err(err) => self.alert(format!("Submission failed: {err}")),
        }
    }

    /// Wholesale refetch of the leave history table.
    pub async fn load_leave_history(&mut self) {
        let Some(user) = self.session.current_identity() else {
            return;
        };
        let path = format!("/leave-applications/{}", user.id);
        self.leave_history = TableView::Loading;
        match self.transport.get::<Vec<LeaveRecord>>(&path).await {
            Ok(records) => self.leave_history.replace(records),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load leave history");
                self.leave_history = TableView::Failed("Could not load history.".to_string());
            }
        }
    }

    // =========================================================================
    // Attendance
    // =========================================================================

    /// Record an attendance login. On success the new open record is
    /// inserted at the top of the table without a refetch.
    pub async fn record_attendance_login(&mut self) {
        let Some(user) = self.session.current_identity() else {
            self.alert("Please log in to record attendance.");
            return;
        };
        let date = self.forms.input("attendance-date").to_string();
        let work_location = self.forms.input("attendance-work-location").to_string();
        if date.is_empty() || work_location == LOCATION_PLACEHOLDER {
            self.alert("Please select a valid date and work location.");
            return;
        }
        let request = AttendanceLoginRequest {
            employee_id: user.id.clone(),
            date,
            employee_name: self.forms.input("attendance-employee-name").to_string(),
            work_location: work_location.clone(),
        };

        match self
            .transport
            .post::<AttendanceLoginResponse, _>("/attendance/login", &request)
            .await
        {
            Ok(AttendanceLoginResponse {
                record: Some(record),
                ..
            }) => {
                let login_time = record.login_time.clone();
                self.insert_attendance_row(record);
                self.alert(format!(
                    "Login recorded at {login_time} for {work_location}"
                ));
            }
            Ok(AttendanceLoginResponse { message, .. }) => {
                let message = message.unwrap_or_else(|| "Unknown error".to_string());
                self.alert(format!("Failed to record login: {message}"));
            }
            Err(err) => self.alert(format!("Error recording login: {err}")),
        }
    }

    /// Record logout for one open attendance session, after the user
    /// reconfirms. The targeted row transitions to closed in place; the
    /// table is not refetched.
    pub async fn record_attendance_logout(&mut self, record_id: &str) {
        if !self.session.is_logged_in() {
            self.alert("Please log in to record attendance.");
            return;
        }
        let confirmed = self
            .prompt
            .confirm("Are you sure you want to record logout for this session?")
            .await;
        if !confirmed {
            return;
        }

        let path = format!("/attendance/logout/{record_id}");
        match self
            .transport
            .put_empty::<AttendanceLogoutResponse>(&path)
            .await
        {
            Ok(AttendanceLogoutResponse {
                logout_time: Some(logout_time),
                ..
            }) => {
                self.close_attendance_row(record_id, &logout_time);
                self.alert(format!("Logout recorded at {logout_time}"));
            }
            Ok(AttendanceLogoutResponse { message, .. }) => {
                let message = message.unwrap_or_else(|| "Unknown error".to_string());
                self.alert(format!("Failed to record logout: {message}"));
            }
            Err(err) => self.alert(format!("Error recording logout: {err}")),
        }
    }

    /// Wholesale refetch of the attendance table; used only on section
    /// activation, never merged with the incremental login/logout updates.
    pub async fn load_attendance_records(&mut self) {
        let Some(user) = self.session.current_identity() else {
            return;
        };
        let path = format!("/attendance/{}", user.id);
        self.attendance = TableView::Loading;
        match self.transport.get::<Vec<AttendanceRecord>>(&path).await {
            Ok(records) => self.attendance.replace(records),
            Err(err) => {
                self.alert(format!("Error loading attendance records: {err}"));
                self.attendance =
                    TableView::Failed("Failed to load attendance records.".to_string());
            }
        }
    }

    fn insert_attendance_row(&mut self, record: AttendanceRecord) {
        let mut rows = match std::mem::take(&mut self.attendance) {
            TableView::Rows(rows) => rows,
            _ => Vec::new(),
        };
        // Most-recent-first.
        rows.insert(0, record);
        self.attendance = TableView::Rows(rows);
    }

    fn close_attendance_row(&mut self, record_id: &str, logout_time: &str) {
        if let TableView::Rows(rows) = &mut self.attendance {
            if let Some(row) = rows.iter_mut().find(|r| r.record_id == record_id) {
                row.logout_time = Some(logout_time.to_string());
            }
        }
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Fetch and render the notification list. A failed fetch shows the
    /// panel's error placeholder but raises no modal.
    pub async fn refresh_notifications(&mut self) {
        let Some(user) = self.session.current_identity() else {
            return;
        };
        let path = format!("/notifications/{}", user.id);
        match self.transport.get::<Vec<Notification>>(&path).await {
            Ok(notifications) => self.notifications.render(notifications),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch notifications");
                self.notifications.render_failed();
            }
        }
    }

    /// Toggle the notification panel. Opening it with unread items hides
    /// the indicator optimistically and marks everything read on the
    /// server; if that call fails the indicator is restored.
    pub async fn toggle_notifications(&mut self) {
        let needs_mark_read = self.notifications.toggle();
        if !needs_mark_read {
            return;
        }
        let Some(user) = self.session.current_identity() else {
            return;
        };
        let path = format!("/notifications/mark-read/{}", user.id);
        if let Err(err) = self.transport.put_empty::<MessageResponse>(&path).await {
            tracing::warn!(error = %err, "failed to mark notifications as read");
            self.notifications.restore_dot();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> HrmsApp {
        HrmsApp::new(&ClientConfig::new("http://127.0.0.1:1")).unwrap()
    }

    #[tokio::test]
    async fn attendance_login_requires_identity() {
        let mut app = app();
        app.record_attendance_login().await;
        assert_eq!(
            app.view_mut().take_alerts(),
            vec!["Please log in to record attendance.".to_string()]
        );
    }

    #[tokio::test]
    async fn leave_submission_requires_identity() {
        let mut app = app();
        app.submit_leave().await;
        assert_eq!(
            app.view_mut().take_alerts(),
            vec!["Please log in to submit a request.".to_string()]
        );
    }

    #[tokio::test]
    async fn password_change_validates_before_any_call() {
        let mut app = app();
        app.change_password().await;
        // Not logged in is caught first; no network is touched (the
        // configured backend address is unroutable).
        assert!(!app.view().alerts().is_empty());
    }
}
