// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Appointment table row for the doctor dashboard.

use crate::models::{Appointment, PatientSummary};
use crate::time_utils::format_slot;
use crate::ui::{Modal, Ui};
use std::fmt;

/// Row action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    AddPrescription,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::AddPrescription => "Add Prescription",
        }
    }
}

/// One appointment/patient pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRow {
    pub appointment_id: u64,
    pub patient: PatientSummary,
    /// Patient ID, name, phone, email, time
    pub cells: Vec<String>,
    pub action: RowAction,
}

impl fmt::Display for PatientRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | ({})", self.cells.join(" | "), self.action.label())
    }
}

pub fn create_patient_row(appointment: &Appointment) -> PatientRow {
    let patient = appointment.patient();
    PatientRow {
        appointment_id: appointment.id,
        cells: vec![
            patient.id.to_string(),
            patient.name.clone(),
            patient.phone.clone(),
            patient.email.clone(),
            format_slot(appointment.appointment_time),
        ],
        patient,
        action: RowAction::AddPrescription,
    }
}

/// Open the prescription form for this row's appointment.
pub fn activate_row(row: &PatientRow, ui: &dyn Ui) {
    match row.action {
        RowAction::AddPrescription => ui.open_modal(Modal::AddPrescription {
            appointment_id: row.appointment_id,
            patient_name: row.patient.name.clone(),
        }),
    }
}
