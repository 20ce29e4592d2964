// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin dashboard: list, filter, add, edit and delete doctors.

use crate::dashboard::{DoctorBoard, FlowOutcome};
use crate::models::{DoctorFilter, DoctorForm, DoctorUpdateForm, NewDoctor, ServiceResponse};
use crate::services::ClinicApi;
use crate::session::SessionContext;
use crate::ui::{CardOutcome, DoctorCard, ListMessages, ListView, LoadOutcome, Modal, Ui};
use std::sync::Arc;
use validator::Validate;

pub const UNAUTHORIZED: &str = "Unauthorized. Please log in again.";
pub const INCOMPLETE_FORM: &str = "Please fill all fields and select availability.";
pub const ADD_SUCCESS: &str = "Doctor added successfully!";
pub const ADD_ERROR: &str = "Unexpected error while saving doctor.";
pub const UPDATE_SUCCESS: &str = "Doctor updated successfully!";
pub const UPDATE_ERROR: &str = "Unexpected error while updating doctor.";

pub struct AdminDashboard {
    api: Arc<dyn ClinicApi>,
    ui: Arc<dyn Ui>,
    sessions: SessionContext,
    board: DoctorBoard,
}

impl AdminDashboard {
    pub fn new(api: Arc<dyn ClinicApi>, ui: Arc<dyn Ui>, sessions: SessionContext) -> Self {
        let board = DoctorBoard::new(
            api.clone(),
            ui.clone(),
            ListMessages::new("No doctors available", "Failed to load doctors."),
            ListMessages::new("No doctors found", "Something went wrong while filtering doctors."),
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

    /// Search bar input or a filter dropdown change.
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

    pub fn open_add_doctor(&self) {
        self.ui.open_modal(Modal::AddDoctor);
    }

    pub fn open_edit_doctor(&self, doctor_id: u64) {
        self.ui.open_modal(Modal::EditDoctor { doctor_id });
    }

    /// Submit the "add doctor" modal.
    pub async fn add_doctor(&self, form: DoctorForm) -> FlowOutcome {
        let session = self.sessions.current();
        let Some(token) = session.token() else {
            self.ui.alert(UNAUTHORIZED);
            return FlowOutcome::Invalid;
        };

        let form = form.trimmed();
        if let Err(errors) = form.validate() {
            tracing::info!(errors = %errors, "Doctor form incomplete");
            self.ui.alert(INCOMPLETE_FORM);
            return FlowOutcome::Invalid;
        }

        let doctor = form.into_new_doctor();
        let result = self.api.save_doctor(&doctor, token).await;
        self.finish_save(result, &doctor, Modal::AddDoctor, ADD_SUCCESS, "add", ADD_ERROR)
            .await
    }

    /// Submit the "edit doctor" modal.
    pub async fn update_doctor(&self, form: DoctorUpdateForm) -> FlowOutcome {
        let session = self.sessions.current();
        let Some(token) = session.token() else {
            self.ui.alert(UNAUTHORIZED);
            return FlowOutcome::Invalid;
        };

        let form = form.trimmed();
        if let Err(errors) = form.validate() {
            tracing::info!(errors = %errors, "Doctor form incomplete");
            self.ui.alert(INCOMPLETE_FORM);
            return FlowOutcome::Invalid;
        }

        let modal = Modal::EditDoctor { doctor_id: form.id };
        let doctor = form.into_new_doctor();
        let result = self.api.update_doctor(&doctor, token).await;
        self.finish_save(result, &doctor, modal, UPDATE_SUCCESS, "update", UPDATE_ERROR)
            .await
    }

    async fn finish_save(
        &self,
        result: crate::error::Result<ServiceResponse>,
        doctor: &NewDoctor,
        modal: Modal,
        success_message: &str,
        verb: &str,
        error_message: &str,
    ) -> FlowOutcome {
        match result {
            Ok(response) if response.success => {
                tracing::info!(name = %doctor.name, verb, "Doctor saved");
                self.ui.alert(success_message);
                self.ui.close_modal(modal);
                self.load_doctor_cards().await;
                FlowOutcome::Completed
            }
            Ok(response) => {
                self.ui.alert(&format!(
                    "Failed to {} doctor: {}",
                    verb,
                    response.message_or("Unknown error")
                ));
                FlowOutcome::Refused
            }
            Err(e) => {
                tracing::error!(error = %e, verb, "Error saving doctor");
                self.ui.alert(error_message);
                FlowOutcome::Failed
            }
        }
    }

    /// Click the Delete button on a card.
    pub async fn activate_card(&self, doctor_id: u64) -> Option<CardOutcome> {
        self.board
            .activate(doctor_id, &self.sessions.current())
            .await
    }

    pub async fn view(&self) -> ListView<DoctorCard> {
        self.board.view().await
    }
}
