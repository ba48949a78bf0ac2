//! Session state
//!
//! Holds the currently authenticated identity, or none. The identity is
//! always replaced wholesale from a server response; the client never
//! merges or derives profile state locally.

use shared::{UserInfo, UserRole};

/// The single process-wide session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    identity: Option<UserInfo>,
    /// Role chosen by which login panel was opened; sent with the login
    /// request. The server's `user_type` on the returned user is what
    /// decides the post-login view.
    login_role: UserRole,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the identity wholesale with a freshly confirmed record.
    pub fn login(&mut self, identity: UserInfo) {
        tracing::info!(user_id = %identity.id, role = %identity.user_type, "session established");
        self.identity = Some(identity);
    }

    /// Clear the identity. The caller is responsible for resetting the
    /// view to its unauthenticated state.
    pub fn logout(&mut self) {
        if let Some(user) = self.identity.take() {
            tracing::info!(user_id = %user.id, "session cleared");
        }
    }

    pub fn current_identity(&self) -> Option<&UserInfo> {
        self.identity.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.identity.is_some()
    }

    /// Set the role for the next login request.
    pub fn set_login_role(&mut self, role: UserRole) {
        self.login_role = role;
    }

    pub fn login_role(&self) -> UserRole {
        self.login_role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserInfo {
        UserInfo {
            id: id.to_string(),
            first_name: "A".into(),
            last_name: "B".into(),
            ..Default::default()
        }
    }

    #[test]
    fn login_replaces_identity_wholesale() {
        let mut session = Session::new();
        session.login(user("e-1"));
        session.login(user("e-2"));
        assert_eq!(session.current_identity().unwrap().id, "e-2");
    }

    #[test]
    fn logout_clears_identity() {
        let mut session = Session::new();
        session.login(user("e-1"));
        session.logout();
        assert!(!session.is_logged_in());
        assert!(session.current_identity().is_none());
    }
}
