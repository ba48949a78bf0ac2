//! View router and visibility state
//!
//! Tracks which top-level section is visible and which side effect must run
//! when a section becomes active. Exactly one top-level section is visible
//! at a time; sub-navigation (events sub-sections, leave-balance detail
//! panels) follows the same mutual-exclusion rule at its own level.

use std::collections::BTreeSet;

use shared::UserRole;

/// Top-level dashboard sections.
///
/// Which sections exist depends on the role: the admin view renders only
/// the registration panel. Showing a section that is not rendered for the
/// current role is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Dashboard,
    MyProfile,
    Timings,
    LeaveApplication,
    LeaveBalance,
    Events,
    ChangePassword,
    ResetPassword,
    AdminRegisterEmployee,
}

impl Section {
    fn rendered_for(role: UserRole) -> BTreeSet<Section> {
        match role {
            UserRole::Employee => [
                Section::Dashboard,
                Section::MyProfile,
                Section::Timings,
                Section::LeaveApplication,
                Section::LeaveBalance,
                Section::Events,
                Section::ChangePassword,
                Section::ResetPassword,
            ]
            .into(),
            UserRole::Admin => [Section::AdminRegisterEmployee].into(),
        }
    }
}

/// Data refetch owed after a section becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterShow {
    ReloadAttendance,
    ReloadLeaveHistory,
}

/// Events sub-navigation: a button menu, or one open sub-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventsNav {
    #[default]
    Menu,
    Open(EventsSubSection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventsSubSection {
    Announcements,
    Birthdays,
    Holidays,
}

/// Leave-balance detail panels; `None` on the view means the main summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveDetail {
    LeaveBalance,
    Wfh,
    CompOff,
}

/// Modal popups layered over whatever section is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Popup {
    LeaveRequest,
    WfhRequest,
    CompOffRequest,
    ForgotPassword,
}

/// Wholesale projection of a server-owned list.
///
/// `Loading` and `Failed` correspond to the table placeholder rows; rows
/// are always replaced from the last fetch, never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView<T> {
    Empty,
    Loading,
    Rows(Vec<T>),
    Failed(String),
}

// Not derived: rows need no Default of their own.
impl<T> Default for TableView<T> {
    fn default() -> Self {
        TableView::Empty
    }
}

impl<T> TableView<T> {
    pub fn rows(&self) -> &[T] {
        match self {
            TableView::Rows(rows) => rows,
            _ => &[],
        }
    }

    /// Replace the table from a fetch result: an empty list renders the
    /// "no records" placeholder.
    pub fn replace(&mut self, rows: Vec<T>) {
        *self = if rows.is_empty() {
            TableView::Empty
        } else {
            TableView::Rows(rows)
        };
    }
}

/// The whole visible UI as data.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    available: BTreeSet<Section>,
    visible: Option<Section>,
    events_nav: EventsNav,
    leave_detail: Option<LeaveDetail>,
    popups: BTreeSet<Popup>,
    alerts: Vec<String>,
}

impl ViewState {
    /// The unauthenticated initial state: no sections rendered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the section set for a freshly authenticated role and show
    /// its landing section.
    pub fn enter(&mut self, role: UserRole) {
        self.available = Section::rendered_for(role);
        self.visible = Some(match role {
            UserRole::Employee => Section::Dashboard,
            UserRole::Admin => Section::AdminRegisterEmployee,
        });
    }

    /// Reset to the unauthenticated initial state, equivalent to a full
    /// reload: open popups, pending alerts, and sub-navigation all go.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Show a top-level section, hiding all siblings.
    ///
    /// Returns the refetch owed for the newly active section, if any.
    /// Unknown-for-this-role sections are a no-op.
    pub fn show(&mut self, section: Section) -> Option<AfterShow> {
        if !self.available.contains(&section) {
            tracing::debug!(?section, "section not rendered for current role, ignoring");
            return None;
        }
        self.visible = Some(section);
        match section {
            Section::Timings => Some(AfterShow::ReloadAttendance),
            Section::LeaveApplication => Some(AfterShow::ReloadLeaveHistory),
            Section::Events => {
                self.events_nav = EventsNav::Menu;
                None
            }
            _ => None,
        }
    }

    pub fn visible(&self) -> Option<Section> {
        self.visible
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.visible == Some(section)
    }

    pub fn is_authenticated_view(&self) -> bool {
        !self.available.is_empty()
    }

    // ---- events sub-navigation ----

    pub fn show_events_sub(&mut self, sub: EventsSubSection) {
        if self.visible == Some(Section::Events) {
            self.events_nav = EventsNav::Open(sub);
        }
    }

    pub fn events_go_back(&mut self) {
        self.events_nav = EventsNav::Menu;
    }

    pub fn events_nav(&self) -> EventsNav {
        self.events_nav
    }

    // ---- leave-balance detail panels ----

    pub fn show_leave_detail(&mut self, detail: LeaveDetail) {
        if self.visible == Some(Section::LeaveBalance) {
            self.leave_detail = Some(detail);
        }
    }

    pub fn show_main_leave_balance(&mut self) {
        self.leave_detail = None;
    }

    pub fn leave_detail(&self) -> Option<LeaveDetail> {
        self.leave_detail
    }

    // ---- popups ----

    pub fn open_popup(&mut self, popup: Popup) {
        self.popups.insert(popup);
    }

    pub fn close_popup(&mut self, popup: Popup) {
        self.popups.remove(&popup);
    }

    pub fn popup_is_open(&self, popup: Popup) -> bool {
        self.popups.contains(&popup)
    }

    // ---- user-facing messages ----

    /// Queue a blocking modal message for the user.
    pub fn push_alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drain the queued messages (the UI shows and clears them).
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_section_visible() {
        let mut view = ViewState::new();
        view.enter(UserRole::Employee);
        assert!(view.is_visible(Section::Dashboard));
        view.show(Section::Timings);
        assert!(view.is_visible(Section::Timings));
        assert!(!view.is_visible(Section::Dashboard));
    }

    #[test]
    fn after_show_table() {
        let mut view = ViewState::new();
        view.enter(UserRole::Employee);
        assert_eq!(view.show(Section::Timings), Some(AfterShow::ReloadAttendance));
        assert_eq!(
            view.show(Section::LeaveApplication),
            Some(AfterShow::ReloadLeaveHistory)
        );
        assert_eq!(view.show(Section::MyProfile), None);
    }

    #[test]
    fn unknown_section_is_a_noop() {
        let mut view = ViewState::new();
        view.enter(UserRole::Admin);
        assert!(view.is_visible(Section::AdminRegisterEmployee));
        // The employee sections are not rendered for an admin.
        assert_eq!(view.show(Section::Timings), None);
        assert!(view.is_visible(Section::AdminRegisterEmployee));
    }

    #[test]
    fn showing_events_resets_sub_navigation() {
        let mut view = ViewState::new();
        view.enter(UserRole::Employee);
        view.show(Section::Events);
        view.show_events_sub(EventsSubSection::Holidays);
        assert_eq!(view.events_nav(), EventsNav::Open(EventsSubSection::Holidays));
        view.show(Section::Dashboard);
        view.show(Section::Events);
        assert_eq!(view.events_nav(), EventsNav::Menu);
    }

    #[test]
    fn leave_detail_panels_are_mutually_exclusive() {
        let mut view = ViewState::new();
        view.enter(UserRole::Employee);
        view.show(Section::LeaveBalance);
        view.show_leave_detail(LeaveDetail::Wfh);
        assert_eq!(view.leave_detail(), Some(LeaveDetail::Wfh));
        view.show_leave_detail(LeaveDetail::CompOff);
        assert_eq!(view.leave_detail(), Some(LeaveDetail::CompOff));
        view.show_main_leave_balance();
        assert_eq!(view.leave_detail(), None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut view = ViewState::new();
        view.enter(UserRole::Employee);
        view.open_popup(Popup::LeaveRequest);
        view.push_alert("hello");
        view.reset();
        assert!(!view.is_authenticated_view());
        assert!(view.visible().is_none());
        assert!(!view.popup_is_open(Popup::LeaveRequest));
        assert!(view.alerts().is_empty());
    }

    #[test]
    fn table_view_replace_is_wholesale() {
        let mut table: TableView<u32> = TableView::Loading;
        table.replace(vec![1, 2]);
        assert_eq!(table.rows(), &[1, 2]);
        table.replace(Vec::new());
        assert_eq!(table, TableView::Empty);
    }
}
