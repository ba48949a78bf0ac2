//! HRMS Client - client core for the HRMS backend
//!
//! Request/response orchestration for the employee/admin HR dashboard:
//! a retrying HTTP transport, the session identity, the section router,
//! form adapters, the notification panel, and one domain action per
//! backend capability, composed in [`HrmsApp`].

pub mod app;
pub mod config;
pub mod error;
pub mod forms;
pub mod notifications;
pub mod prompt;
pub mod session;
pub mod transport;
pub mod view;

pub use app::HrmsApp;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use prompt::{AutoConfirm, ConfirmPrompt};
pub use session::Session;
pub use transport::HttpTransport;
pub use view::{AfterShow, Popup, Section, ViewState};

// Re-export shared types for convenience
pub use shared::{LoginResponse, Notification, UserInfo, UserRole};
