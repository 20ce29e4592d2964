// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presentation layer: view models and the host UI seam.
//!
//! Renderers produce plain values ([`card::DoctorCard`], [`row::PatientRow`],
//! [`list::ListView`]). Everything that needs the host (dialogs, modals,
//! navigation) goes through the [`Ui`] trait.

pub mod card;
pub mod list;
pub mod recording;
pub mod row;

pub use card::{CardAction, CardOutcome, DoctorCard};
pub use list::{ListController, ListMessages, ListView, LoadOutcome, Placeholder};
pub use recording::{RecordingUi, UiEvent};
pub use row::{PatientRow, RowAction};

use crate::models::{Doctor, Patient};

/// Named overlay forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    AddDoctor,
    EditDoctor { doctor_id: u64 },
    PatientSignup,
    PatientLogin,
    AdminLogin,
    DoctorLogin,
    Booking,
    AddPrescription {
        appointment_id: u64,
        patient_name: String,
    },
}

/// Host-side effects the dashboards trigger.
pub trait Ui: Send + Sync {
    /// Show a blocking message.
    fn alert(&self, message: &str);

    /// Ask a yes/no question.
    fn confirm(&self, message: &str) -> bool;

    fn open_modal(&self, modal: Modal);

    fn close_modal(&self, modal: Modal);

    /// Show the booking overlay for `doctor`, pre-filled with `patient`.
    fn show_booking_overlay(&self, doctor: &Doctor, patient: &Patient);

    /// Leave the current page.
    fn navigate(&self, location: &str);
}
