// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login and logout for every role.

use crate::dashboard::FlowOutcome;
use crate::error::Result;
use crate::models::{LoginForm, LoginOutcome};
use crate::services::ClinicApi;
use crate::session::{Role, SessionContext};
use crate::ui::{Modal, Ui};
use std::sync::Arc;
use validator::Validate;

pub const ADMIN_LANDING: &str = "/adminDashboard.html";
pub const DOCTOR_LANDING: &str = "/doctorDashboard.html";
pub const PATIENT_LANDING: &str = "/loggedPatientDashboard.html";
pub const HOME: &str = "/";

pub const INVALID_CREDENTIALS: &str = "Invalid login credentials. Please try again.";
pub const LOGIN_ERROR: &str = "An error occurred during login.";
pub const MISSING_CREDENTIALS: &str = "Please enter your credentials.";

/// Store the session for an accepted login and leave for `landing`.
///
/// Shared by every role's login form.
pub(crate) fn complete_login(
    result: Result<LoginOutcome>,
    role: Role,
    landing: &str,
    sessions: &SessionContext,
    ui: &dyn Ui,
) -> FlowOutcome {
    match result {
        Ok(LoginOutcome::Accepted { token }) => match sessions.sign_in(role, &token) {
            Ok(_) => {
                ui.navigate(landing);
                FlowOutcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to store session");
                ui.alert(LOGIN_ERROR);
                FlowOutcome::Failed
            }
        },
        Ok(LoginOutcome::Rejected { status }) => {
            tracing::info!(?role, status, "Login rejected");
            ui.alert(INVALID_CREDENTIALS);
            FlowOutcome::Refused
        }
        Err(e) => {
            tracing::error!(?role, error = %e, "Login error");
            ui.alert(LOGIN_ERROR);
            FlowOutcome::Failed
        }
    }
}

/// Validate a login form, alerting on missing fields.
pub(crate) fn checked_login_form(form: LoginForm, ui: &dyn Ui) -> Option<LoginForm> {
    let form = form.trimmed();
    if form.validate().is_err() {
        ui.alert(MISSING_CREDENTIALS);
        return None;
    }
    Some(form)
}

/// Landing-page flows: staff login, role selection and logout.
pub struct AuthFlow {
    api: Arc<dyn ClinicApi>,
    ui: Arc<dyn Ui>,
    sessions: SessionContext,
}

impl AuthFlow {
    pub fn new(api: Arc<dyn ClinicApi>, ui: Arc<dyn Ui>, sessions: SessionContext) -> Self {
        Self { api, ui, sessions }
    }

    pub fn open_login(&self, role: Role) {
        match role {
            Role::Admin => self.ui.open_modal(Modal::AdminLogin),
            Role::Doctor => self.ui.open_modal(Modal::DoctorLogin),
            Role::Guest | Role::AuthenticatedPatient => self.ui.open_modal(Modal::PatientLogin),
            Role::Anonymous => {}
        }
    }

    pub async fn admin_login(&self, form: LoginForm) -> FlowOutcome {
        let Some(form) = checked_login_form(form, self.ui.as_ref()) else {
            return FlowOutcome::Invalid;
        };
        let result = self.api.admin_login(&form).await;
        complete_login(
            result,
            Role::Admin,
            ADMIN_LANDING,
            &self.sessions,
            self.ui.as_ref(),
        )
    }

    pub async fn doctor_login(&self, form: LoginForm) -> FlowOutcome {
        let Some(form) = checked_login_form(form, self.ui.as_ref()) else {
            return FlowOutcome::Invalid;
        };
        let result = self.api.doctor_login(&form).await;
        complete_login(
            result,
            Role::Doctor,
            DOCTOR_LANDING,
            &self.sessions,
            self.ui.as_ref(),
        )
    }

    /// Browse as a guest patient (no token).
    pub fn continue_as_guest(&self) -> FlowOutcome {
        match self.sessions.set_role(Role::Guest) {
            Ok(()) => FlowOutcome::Completed,
            Err(e) => {
                tracing::error!(error = %e, "Failed to store role");
                FlowOutcome::Failed
            }
        }
    }

    /// Forget the token and role and return home.
    pub fn logout(&self) -> FlowOutcome {
        match self.sessions.sign_out() {
            Ok(()) => {
                self.ui.navigate(HOME);
                FlowOutcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to clear session");
                FlowOutcome::Failed
            }
        }
    }
}
