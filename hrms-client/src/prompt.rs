//! Yes/no confirmation seam
//!
//! Destructive gestures (attendance logout, sign-out) ask the user to
//! reconfirm. The dialog is a single suspend point resolving to a bool;
//! there is no distinct "dismissed" outcome.

use async_trait::async_trait;

#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    /// Show a blocking yes/no dialog and suspend until the user answers.
    async fn confirm(&self, message: &str) -> bool;
}

/// Prompt that answers yes to everything. Default for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

#[async_trait]
impl ConfirmPrompt for AutoConfirm {
    async fn confirm(&self, _message: &str) -> bool {
        true
    }
}
