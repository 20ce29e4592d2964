// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Patient dashboard: browse doctors, sign up, log in and book.

use crate::dashboard::auth::{checked_login_form, complete_login, PATIENT_LANDING};
use crate::dashboard::{DoctorBoard, FlowOutcome};
use crate::models::{BookingForm, DoctorFilter, LoginForm, SignupForm};
use crate::services::ClinicApi;
use crate::session::{Role, SessionContext};
use crate::ui::card::LOGIN_TO_BOOK;
use crate::ui::{CardOutcome, DoctorCard, ListMessages, ListView, LoadOutcome, Modal, Ui};
use std::sync::Arc;
use validator::Validate;

pub const SIGNUP_INCOMPLETE: &str = "Please fill all fields.";
pub const SIGNUP_SUCCESS: &str = "Signup successful! Please login to continue.";
pub const SIGNUP_ERROR: &str = "An error occurred during signup.";
pub const BOOK_SUCCESS: &str = "Appointment booked successfully!";
pub const BOOK_ERROR: &str = "An error occurred while booking the appointment.";

pub struct PatientDashboard {
    api: Arc<dyn ClinicApi>,
    ui: Arc<dyn Ui>,
    sessions: SessionContext,
    board: DoctorBoard,
}

impl PatientDashboard {
    pub fn new(api: Arc<dyn ClinicApi>, ui: Arc<dyn Ui>, sessions: SessionContext) -> Self {
        let board = DoctorBoard::new(
            api.clone(),
            ui.clone(),
            ListMessages::new(
                "No doctors available at the moment.",
                "Failed to load doctors.",
            ),
            ListMessages::new(
                "No doctors found with the given filters.",
                "Something went wrong while filtering doctors.",
            ),
        );
        Self {
            api,
            ui,
            sessions,
            board,
        }
    }

    pub async fn on_page_load(&self) -> LoadOutcome {
        self.load_doctor_cards().await
    }

    pub async fn load_doctor_cards(&self) -> LoadOutcome {
        self.board.load_doctor_cards(&self.sessions.current()).await
    }

    pub async fn filter_doctors_on_change(
        &self,
        name: &str,
        time: &str,
        specialty: &str,
    ) -> LoadOutcome {
        let filter = DoctorFilter::from_controls(name, time, specialty);
        self.board
            .filter_doctors(&filter, &self.sessions.current())
            .await
    }

    pub fn open_signup(&self) {
        self.ui.open_modal(Modal::PatientSignup);
    }

    pub fn open_login(&self) {
        self.ui.open_modal(Modal::PatientLogin);
    }

    /// Submit the signup modal.
    pub async fn signup(&self, form: SignupForm) -> FlowOutcome {
        let form = form.trimmed();
        if let Err(errors) = form.validate() {
            tracing::info!(errors = %errors, "Signup form incomplete");
            self.ui.alert(SIGNUP_INCOMPLETE);
            return FlowOutcome::Invalid;
        }

        match self.api.patient_signup(&form).await {
            Ok(response) if response.success => {
                tracing::info!("Patient signed up");
                self.ui.alert(SIGNUP_SUCCESS);
                self.ui.close_modal(Modal::PatientSignup);
                self.load_doctor_cards().await;
                FlowOutcome::Completed
            }
            Ok(response) => {
                self.ui.alert(&format!(
                    "Signup failed: {}",
                    response.message_or("Unknown error")
                ));
                FlowOutcome::Refused
            }
            Err(e) => {
                tracing::error!(error = %e, "Signup error");
                self.ui.alert(SIGNUP_ERROR);
                FlowOutcome::Failed
            }
        }
    }

    /// Submit the login modal. On success the session becomes a
    /// logged-in patient and the page navigates away.
    pub async fn login(&self, form: LoginForm) -> FlowOutcome {
        let Some(form) = checked_login_form(form, self.ui.as_ref()) else {
            return FlowOutcome::Invalid;
        };
        let result = self.api.patient_login(&form).await;
        complete_login(
            result,
            Role::AuthenticatedPatient,
            PATIENT_LANDING,
            &self.sessions,
            self.ui.as_ref(),
        )
    }

    /// Click "Book Now" on a card.
    pub async fn activate_card(&self, doctor_id: u64) -> Option<CardOutcome> {
        self.board
            .activate(doctor_id, &self.sessions.current())
            .await
    }

    /// Submit the booking overlay.
    pub async fn book_appointment(&self, booking: BookingForm) -> FlowOutcome {
        let session = self.sessions.current();
        let Some(token) = session.token() else {
            self.ui.alert(LOGIN_TO_BOOK);
            return FlowOutcome::Invalid;
        };

        match self.api.book_appointment(&booking, token).await {
            Ok(response) if response.success => {
                tracing::info!(doctor_id = booking.doctor_id, "Appointment booked");
                self.ui.alert(BOOK_SUCCESS);
                self.ui.close_modal(Modal::Booking);
                FlowOutcome::Completed
            }
            Ok(response) => {
                self.ui.alert(&format!(
                    "Failed to book appointment: {}",
                    response.message_or("Unknown error")
                ));
                FlowOutcome::Refused
            }
            Err(e) => {
                tracing::error!(error = %e, "Booking error");
                self.ui.alert(BOOK_ERROR);
                FlowOutcome::Failed
            }
        }
    }

    pub async fn view(&self) -> ListView<DoctorCard> {
        self.board.view().await
    }
}
