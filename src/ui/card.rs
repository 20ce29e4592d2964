// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Doctor card: rendering and the role-specific card action.

use crate::error::PortalError;
use crate::models::Doctor;
use crate::services::ClinicApi;
use crate::session::{Role, Session};
use crate::ui::Ui;
use std::fmt;

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this doctor?";
pub const DELETE_FAILED: &str = "Failed to delete doctor.";
pub const DELETE_ERROR: &str = "Something went wrong.";
pub const LOGIN_TO_BOOK: &str = "Please login to book an appointment.";
pub const PATIENT_INFO_FAILED: &str = "Could not retrieve patient info.";

/// The single action button a card may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Admin: delete the doctor
    Delete,
    /// Guest: prompt to log in
    LoginToBook,
    /// Logged-in patient: open the booking overlay
    Book,
}

impl CardAction {
    pub fn label(self) -> &'static str {
        match self {
            CardAction::Delete => "Delete",
            CardAction::LoginToBook | CardAction::Book => "Book Now",
        }
    }

    /// Action offered to `role`, if any.
    pub fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::Admin => Some(CardAction::Delete),
            Role::Guest => Some(CardAction::LoginToBook),
            Role::AuthenticatedPatient => Some(CardAction::Book),
            Role::Doctor | Role::Anonymous => None,
        }
    }
}

/// Detached card for one doctor. The caller places it in a container.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorCard {
    pub doctor: Doctor,
    pub title: String,
    pub lines: Vec<String>,
    pub action: Option<CardAction>,
}

impl DoctorCard {
    pub fn doctor_id(&self) -> u64 {
        self.doctor.id
    }
}

impl fmt::Display for DoctorCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.doctor.id, self.title)?;
        for line in &self.lines {
            write!(f, "\n    {}", line)?;
        }
        if let Some(action) = self.action {
            write!(f, "\n    ({})", action.label())?;
        }
        Ok(())
    }
}

/// Render a card. Pure in (doctor, role).
pub fn create_doctor_card(doctor: &Doctor, session: &Session) -> DoctorCard {
    DoctorCard {
        doctor: doctor.clone(),
        title: doctor.name.clone(),
        lines: vec![
            format!("Specialty: {}", doctor.specialization),
            format!("Email: {}", doctor.email),
            format!("Available: {}", doctor.availability.join(", ")),
        ],
        action: CardAction::for_role(session.role),
    }
}

/// What activating a card's action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOutcome {
    /// Doctor deleted; the card must leave its container.
    Removed,
    /// Delete declined at the confirmation prompt.
    Declined,
    /// Delete failed; the card stays.
    Kept,
    /// Guest told to log in.
    LoginRequested,
    /// Booking overlay shown.
    BookingOpened,
    /// Profile fetch failed; no overlay.
    BookingUnavailable,
    /// The card has no action.
    NoAction,
}

/// Perform the card's action.
///
/// The token is read from `session` at activation time, not at render time.
pub async fn activate_card(
    card: &DoctorCard,
    session: &Session,
    api: &dyn ClinicApi,
    ui: &dyn Ui,
) -> CardOutcome {
    let Some(action) = card.action else {
        return CardOutcome::NoAction;
    };

    match action {
        CardAction::Delete => delete_doctor(card, session, api, ui).await,
        CardAction::LoginToBook => {
            ui.alert(LOGIN_TO_BOOK);
            CardOutcome::LoginRequested
        }
        CardAction::Book => open_booking(card, session, api, ui).await,
    }
}

async fn delete_doctor(
    card: &DoctorCard,
    session: &Session,
    api: &dyn ClinicApi,
    ui: &dyn Ui,
) -> CardOutcome {
    if !ui.confirm(CONFIRM_DELETE) {
        return CardOutcome::Declined;
    }

    let doctor_id = card.doctor_id();
    let Some(token) = session.token() else {
        tracing::warn!(doctor_id, "Delete attempted without a token");
        ui.alert(DELETE_FAILED);
        return CardOutcome::Kept;
    };

    match api.delete_doctor(doctor_id, token).await {
        Ok(()) => CardOutcome::Removed,
        Err(PortalError::Api { status, .. }) => {
            tracing::warn!(doctor_id, status, "Backend refused doctor deletion");
            ui.alert(DELETE_FAILED);
            CardOutcome::Kept
        }
        Err(e) => {
            tracing::error!(doctor_id, error = %e, "Error deleting doctor");
            ui.alert(DELETE_ERROR);
            CardOutcome::Kept
        }
    }
}

async fn open_booking(
    card: &DoctorCard,
    session: &Session,
    api: &dyn ClinicApi,
    ui: &dyn Ui,
) -> CardOutcome {
    let profile = match session.token() {
        Some(token) => api.get_patient_data(token).await,
        None => Err(PortalError::Unauthorized),
    };

    match profile {
        Ok(patient) => {
            ui.show_booking_overlay(&card.doctor, &patient);
            CardOutcome::BookingOpened
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching patient data");
            ui.alert(PATIENT_INFO_FAILED);
            CardOutcome::BookingUnavailable
        }
    }
}
