//! Form adapters
//!
//! The client-side stand-in for the page's interactive fields: a store of
//! named input values and display labels. `collect_*` pulls structured
//! payloads out (trimming free text); `populate` pushes a confirmed
//! identity back in, substituting placeholders for missing values.
//! `populate` is idempotent.

use std::collections::{BTreeSet, HashMap};

use serde_json::{Map, Value};
use shared::{RegisterRequest, UserInfo};

use crate::{ClientError, ClientResult};

/// Placeholder shown on display-only labels for missing values.
pub const MISSING: &str = "N/A";

/// Sentinel value of the unselected work-location dropdown.
pub const LOCATION_PLACEHOLDER: &str = "-select-";

/// Editable profile sections, each with its own view/edit toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProfileSection {
    PersonalDetails,
    ContactDetails,
    BankDetails,
    WorkDetails,
}

impl ProfileSection {
    /// Human-readable name used in alerts ("personal details updated...").
    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileSection::PersonalDetails => "personal details",
            ProfileSection::ContactDetails => "contact details",
            ProfileSection::BankDetails => "bank details",
            ProfileSection::WorkDetails => "work details",
        }
    }

    /// `(field id, backend field name)` pairs belonging to this section.
    pub fn fields(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ProfileSection::PersonalDetails => &[
                ("edit-first-name", "first_name"),
                ("edit-last-name", "last_name"),
                ("edit-gender", "gender"),
                ("edit-dob", "dob"),
                ("edit-permanent-address", "permanent_address"),
                ("edit-current-address", "current_address"),
                ("edit-pan-number", "pan_number"),
                ("edit-aadhar-number", "aadhar_number"),
            ],
            ProfileSection::ContactDetails => &[
                ("edit-contact-number", "contactnumber"),
                ("edit-alternate-contact-number", "alternate_contact_number"),
                ("edit-alternate-contact-person", "alternate_contact_person"),
                ("edit-alternate-contact-relation", "alternate_contact_relation"),
                ("edit-emergency-number", "emergency_number"),
            ],
            ProfileSection::BankDetails => &[
                ("edit-account-number", "account_number"),
                ("edit-ifsc-code", "ifsc_code"),
                ("edit-account-holder-name", "account_holder_name"),
                ("edit-branch", "branch"),
            ],
            ProfileSection::WorkDetails => &[
                ("edit-department", "department"),
                ("edit-reporting-manager1", "reporting_manager1"),
                ("edit-reporting-manager2", "reporting_manager2"),
                ("edit-employee-role", "employee_role"),
                ("edit-employment-status", "employment_status"),
                ("edit-join-date", "join_date"),
            ],
        }
    }
}

/// Registration form fields: `admin-{backend name}` input ids.
const REGISTER_FIELDS: &[&str] = &[
    "first_name",
    "last_name",
    "email",
    "password",
    "gender",
    "dob",
    "permanent_address",
    "current_address",
    "pan_number",
    "aadhar_number",
    "contactnumber",
    "alternate_contact_number",
    "alternate_contact_person",
    "alternate_contact_relation",
    "emergency_number",
    "account_number",
    "ifsc_code",
    "account_holder_name",
    "branch",
    "department",
    "reporting_manager1",
    "reporting_manager1_mail",
    "reporting_manager2",
    "reporting_manager2_mail",
    "employee_role",
    "employment_status",
    "join_date",
];

/// The three request popups share a prefill block.
const POPUP_PREFIXES: &[&str] = &["leave", "wfh", "compoff"];

/// Named input values and display labels.
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    inputs: HashMap<String, String>,
    labels: HashMap<String, String>,
    editing: BTreeSet<ProfileSection>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- raw field access ----

    pub fn set_input(&mut self, id: &str, value: impl Into<String>) {
        self.inputs.insert(id.to_string(), value.into());
    }

    pub fn input(&self, id: &str) -> &str {
        self.inputs.get(id).map(String::as_str).unwrap_or("")
    }

    /// Free-text collection: whitespace-trimmed.
    pub fn input_trimmed(&self, id: &str) -> String {
        self.input(id).trim().to_string()
    }

    pub fn label(&self, id: &str) -> &str {
        self.labels.get(id).map(String::as_str).unwrap_or(MISSING)
    }

    fn set_label(&mut self, id: &str, value: Option<&str>) {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => MISSING,
        };
        self.labels.insert(id.to_string(), value.to_string());
    }

    fn set_input_opt(&mut self, id: &str, value: Option<&str>) {
        self.inputs
            .insert(id.to_string(), value.unwrap_or("").to_string());
    }

    // ---- edit mode ----

    /// Enter or leave edit mode for one profile section. In view mode the
    /// section's inputs are disabled and the "edit" control shows; in edit
    /// mode they are enabled and the control swaps to "save".
    pub fn set_section_editing(&mut self, section: ProfileSection, editing: bool) {
        if editing {
            self.editing.insert(section);
        } else {
            self.editing.remove(&section);
        }
    }

    pub fn section_is_editing(&self, section: ProfileSection) -> bool {
        self.editing.contains(&section)
    }

    /// Whether a profile input accepts changes right now.
    pub fn input_is_enabled(&self, id: &str) -> bool {
        [
            ProfileSection::PersonalDetails,
            ProfileSection::ContactDetails,
            ProfileSection::BankDetails,
            ProfileSection::WorkDetails,
        ]
        .iter()
        .any(|s| self.section_is_editing(*s) && s.fields().iter().any(|(fid, _)| *fid == id))
    }

    // ---- populate ----

    /// Write a confirmed identity into every field that renders it:
    /// profile inputs, header labels, the attendance form, and the three
    /// request popups. Calling this twice with the same identity leaves
    /// identical state.
    pub fn populate(&mut self, user: &UserInfo) {
        let full_name = user.full_name();

        // Header and welcome labels.
        self.set_label("profile-name", Some(&full_name));
        self.set_label("welcome-name", Some(&user.first_name));
        self.set_label("welcome-full-name", Some(&full_name));

        // Profile section inputs.
        self.set_input("edit-first-name", user.first_name.clone());
        self.set_input("edit-last-name", user.last_name.clone());
        self.set_input_opt("edit-gender", user.gender.as_deref());
        self.set_input_opt("edit-dob", user.dob.as_deref());
        self.set_input_opt("edit-permanent-address", user.permanent_address.as_deref());
        self.set_input_opt("edit-current-address", user.current_address.as_deref());
        self.set_input_opt("edit-pan-number", user.pan_number.as_deref());
        self.set_input_opt("edit-aadhar-number", user.aadhar_number.as_deref());
        self.set_input_opt("edit-email", user.email.as_deref());
        self.set_input_opt("edit-contact-number", user.contactnumber.as_deref());
        self.set_input_opt(
            "edit-alternate-contact-number",
            user.alternate_contact_number.as_deref(),
        );
        self.set_input_opt(
            "edit-alternate-contact-person",
            user.alternate_contact_person.as_deref(),
        );
        self.set_input_opt(
            "edit-alternate-contact-relation",
            user.alternate_contact_relation.as_deref(),
        );
        self.set_input_opt("edit-emergency-number", user.emergency_number.as_deref());
        self.set_input_opt("edit-account-number", user.account_number.as_deref());
        self.set_input_opt("edit-ifsc-code", user.ifsc_code.as_deref());
        self.set_input_opt(
            "edit-account-holder-name",
            user.account_holder_name.as_deref(),
        );
        self.set_input_opt("edit-branch", user.branch.as_deref());
        self.set_input_opt("edit-department", user.department.as_deref());
        self.set_input_opt("edit-reporting-manager1", user.reporting_manager1.as_deref());
        self.set_input_opt("edit-reporting-manager2", user.reporting_manager2.as_deref());
        self.set_input_opt("edit-employee-role", user.employee_role.as_deref());
        self.set_input_opt("edit-employment-status", user.employment_status.as_deref());
        self.set_input_opt("edit-join-date", user.join_date.as_deref());

        // Attendance form: name is fixed, date defaults to today, the
        // location dropdown keeps whatever the user picked.
        self.set_input("attendance-employee-name", full_name.clone());
        self.set_input(
            "attendance-date",
            chrono::Local::now().format("%Y-%m-%d").to_string(),
        );
        if !self.inputs.contains_key("attendance-work-location") {
            self.set_input("attendance-work-location", LOCATION_PLACEHOLDER);
        }

        // Prefill block shared by the three request popups.
        for prefix in POPUP_PREFIXES {
            self.set_label(&format!("{prefix}-official-mail"), user.email.as_deref());
            self.set_label(&format!("{prefix}-emp-code"), Some(&user.id));
            self.set_label(&format!("{prefix}-full-name"), Some(&full_name));
            self.set_label(
                &format!("{prefix}-reporting-manager1"),
                user.reporting_manager1.as_deref(),
            );
            self.set_label(
                &format!("{prefix}-reporting-manager1-mail"),
                user.reporting_manager1_mail.as_deref(),
            );
            self.set_label(
                &format!("{prefix}-reporting-manager2"),
                user.reporting_manager2.as_deref(),
            );
            self.set_label(
                &format!("{prefix}-reporting-manager2-mail"),
                user.reporting_manager2_mail.as_deref(),
            );
        }
    }

    // ---- collect ----

    /// Collect one profile section's inputs as the backend's update body.
    pub fn collect_section(&self, section: ProfileSection) -> Map<String, Value> {
        section
            .fields()
            .iter()
            .map(|(id, wire)| (wire.to_string(), Value::String(self.input(id).to_string())))
            .collect()
    }

    /// Collect the admin registration form.
    pub fn collect_register(&self) -> ClientResult<RegisterRequest> {
        let mut body = Map::new();
        for wire in REGISTER_FIELDS {
            let id = format!("admin-{wire}");
            let value = match *wire {
                // Free-text identity fields are trimmed; the password is not.
                "password" => self.input(&id).to_string(),
                _ => self.input_trimmed(&id),
            };
            body.insert(wire.to_string(), Value::String(value));
        }
        serde_json::from_value(Value::Object(body)).map_err(ClientError::from)
    }

    /// Clear every `{prefix}-*` input (form reset after submission).
    pub fn clear_prefixed(&mut self, prefix: &str) {
        let needle = format!("{prefix}-");
        for value in self
            .inputs
            .iter_mut()
            .filter(|(id, _)| id.starts_with(&needle))
            .map(|(_, v)| v)
        {
            value.clear();
        }
    }

    /// Back to the unauthenticated blank state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            id: "e-7".into(),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            email: Some("asha@corp.example".into()),
            reporting_manager1: Some("Dev Lead".into()),
            ..Default::default()
        }
    }

    #[test]
    fn populate_is_idempotent() {
        let mut once = FieldStore::new();
        once.populate(&user());
        let mut twice = once.clone();
        twice.populate(&user());
        assert_eq!(once.inputs, twice.inputs);
        assert_eq!(once.labels, twice.labels);
    }

    #[test]
    fn populate_substitutes_placeholder_for_missing_values() {
        let mut forms = FieldStore::new();
        forms.populate(&user());
        // No second reporting manager on the record.
        assert_eq!(forms.label("leave-reporting-manager2"), MISSING);
        assert_eq!(forms.label("leave-reporting-manager1"), "Dev Lead");
        // Inputs get the empty string, not the display placeholder.
        assert_eq!(forms.input("edit-department"), "");
    }

    #[test]
    fn populate_prefills_all_three_popups() {
        let mut forms = FieldStore::new();
        forms.populate(&user());
        for prefix in ["leave", "wfh", "compoff"] {
            assert_eq!(forms.label(&format!("{prefix}-emp-code")), "e-7");
            assert_eq!(forms.label(&format!("{prefix}-full-name")), "Asha Rao");
        }
    }

    #[test]
    fn populate_keeps_user_chosen_work_location() {
        let mut forms = FieldStore::new();
        forms.populate(&user());
        assert_eq!(forms.input("attendance-work-location"), LOCATION_PLACEHOLDER);
        forms.set_input("attendance-work-location", "Office");
        forms.populate(&user());
        assert_eq!(forms.input("attendance-work-location"), "Office");
    }

    #[test]
    fn edit_mode_enables_exactly_one_sections_inputs() {
        let mut forms = FieldStore::new();
        assert!(!forms.input_is_enabled("edit-branch"));
        forms.set_section_editing(ProfileSection::BankDetails, true);
        assert!(forms.input_is_enabled("edit-branch"));
        assert!(!forms.input_is_enabled("edit-department"));
        forms.set_section_editing(ProfileSection::BankDetails, false);
        assert!(!forms.input_is_enabled("edit-branch"));
    }

    #[test]
    fn collect_section_uses_backend_field_names() {
        let mut forms = FieldStore::new();
        forms.populate(&user());
        forms.set_input("edit-contact-number", "12345");
        let body = forms.collect_section(ProfileSection::ContactDetails);
        assert_eq!(body.get("contactnumber").unwrap(), "12345");
        assert!(body.contains_key("emergency_number"));
        assert!(!body.contains_key("first_name"));
    }

    #[test]
    fn collect_register_builds_full_payload() {
        let mut forms = FieldStore::new();
        forms.set_input("admin-first_name", "  New ");
        forms.set_input("admin-last_name", "Hire");
        forms.set_input("admin-email", "new@corp.example");
        forms.set_input("admin-password", " keep spaces ");
        let req = forms.collect_register().unwrap();
        assert_eq!(req.first_name, "New");
        assert_eq!(req.password, " keep spaces ");
        assert_eq!(req.department, "");
    }

    #[test]
    fn clear_prefixed_blanks_popup_inputs() {
        let mut forms = FieldStore::new();
        forms.set_input("leave-from-date", "2025-01-01");
        forms.set_input("leave-description", "trip");
        forms.set_input("wfh-from-date", "2025-01-02");
        forms.clear_prefixed("leave");
        assert_eq!(forms.input("leave-from-date"), "");
        assert_eq!(forms.input("wfh-from-date"), "2025-01-02");
    }
}
