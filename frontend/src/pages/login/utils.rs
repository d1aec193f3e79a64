use crate::api::{ApiError, User};

pub const SUBMIT_LABEL: &str = "Login";
pub const LOADING_LABEL: &str = "please wait";
pub const FALLBACK_ERROR: &str = "Something went wrong!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Why a submit was refused. The form state is left untouched in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    MissingCredentials,
    AlreadySubmitting,
}

/// Field values, submission status and the outcome of the last fetch.
///
/// Invariants kept by every method:
/// - `Submitting` implies `user == None`
/// - `Succeeded` implies `user.is_some() && error.is_none()`
/// - `Failed` implies `error.is_some() && user.is_none()`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub password: String,
    pub status: SubmitStatus,
    pub user: Option<User>,
    pub error: Option<String>,
}

impl FormState {
    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Button enablement: both fields filled and nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.has_credentials()
    }

    pub fn is_error_visible(&self) -> bool {
        self.status == SubmitStatus::Failed
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            LOADING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or(FALLBACK_ERROR)
    }

    pub fn begin_submit(&mut self) -> Result<(), SubmitRejection> {
        if self.is_loading() {
            return Err(SubmitRejection::AlreadySubmitting);
        }
        if !self.has_credentials() {
            return Err(SubmitRejection::MissingCredentials);
        }
        self.status = SubmitStatus::Submitting;
        self.user = None;
        self.error = None;
        Ok(())
    }

    /// Applies a fetch outcome. Ignored unless a submission is in flight.
    pub fn finish(&mut self, result: Result<User, ApiError>) -> bool {
        if !self.is_loading() {
            return false;
        }
        match result {
            Ok(user) => {
                self.status = SubmitStatus::Succeeded;
                self.user = Some(user);
                self.error = None;
            }
            Err(err) => {
                self.status = SubmitStatus::Failed;
                self.user = None;
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Drops an in-flight submission without an outcome.
    pub fn abandon(&mut self) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.status = SubmitStatus::Idle;
        true
    }
}

/// Inline style for the error region: always rendered, only visible after a failure.
pub fn error_region_style(visible: bool) -> &'static str {
    if visible {
        "visibility: visible"
    } else {
        "visibility: hidden"
    }
}
