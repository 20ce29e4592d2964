// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Doctor dashboard: the day's appointments, filtered by patient name.

use crate::error::PortalError;
use crate::services::ClinicApi;
use crate::session::SessionContext;
use crate::time_utils::today_utc;
use crate::ui::row::{activate_row, create_patient_row};
use crate::ui::{ListController, ListMessages, ListView, LoadOutcome, PatientRow, Ui};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Name argument the backend reads as "any patient".
pub const NO_NAME_FILTER: &str = "null";

/// Date picker and search bar values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentControls {
    pub selected_date: NaiveDate,
    /// Trimmed search text; `None` when blank
    pub patient_name: Option<String>,
}

impl AppointmentControls {
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            patient_name: None,
        }
    }

    /// Name sent to the backend. Blank becomes the literal `"null"`.
    pub fn name_argument(&self) -> &str {
        self.patient_name.as_deref().unwrap_or(NO_NAME_FILTER)
    }
}

pub struct DoctorDashboard {
    api: Arc<dyn ClinicApi>,
    ui: Arc<dyn Ui>,
    sessions: SessionContext,
    rows: ListController<PatientRow>,
    controls: Mutex<AppointmentControls>,
    messages: ListMessages,
}

impl DoctorDashboard {
    /// Dashboard with the date picker set to today (UTC).
    pub fn new(api: Arc<dyn ClinicApi>, ui: Arc<dyn Ui>, sessions: SessionContext) -> Self {
        Self::with_date(api, ui, sessions, today_utc())
    }

    pub fn with_date(
        api: Arc<dyn ClinicApi>,
        ui: Arc<dyn Ui>,
        sessions: SessionContext,
        date: NaiveDate,
    ) -> Self {
        Self {
            api,
            ui,
            sessions,
            rows: ListController::new("appointments"),
            controls: Mutex::new(AppointmentControls::new(date)),
            messages: ListMessages::new(
                "No appointments found for the selected date.",
                "Failed to fetch appointments. Please try again later.",
            ),
        }
    }

    pub async fn on_page_load(&self) -> LoadOutcome {
        self.load_appointments().await
    }

    /// Search bar keystroke.
    pub async fn search_input(&self, value: &str) -> LoadOutcome {
        self.controls.lock().await.patient_name = name_filter(value);
        self.load_appointments().await
    }

    /// Set the date picker (when given) and the search bar, then load once.
    pub async fn apply_controls(&self, date: Option<NaiveDate>, patient_name: &str) -> LoadOutcome {
        {
            let mut controls = self.controls.lock().await;
            if let Some(date) = date {
                controls.selected_date = date;
            }
            controls.patient_name = name_filter(patient_name);
        }
        self.load_appointments().await
    }

    /// "Today" button: reset the date picker and reload.
    pub async fn today(&self) -> LoadOutcome {
        self.controls.lock().await.selected_date = today_utc();
        self.load_appointments().await
    }

    /// Date picker change.
    pub async fn date_changed(&self, date: NaiveDate) -> LoadOutcome {
        self.controls.lock().await.selected_date = date;
        self.load_appointments().await
    }

    /// Fetch and render appointments for the current controls.
    pub async fn load_appointments(&self) -> LoadOutcome {
        let controls = self.controls().await;
        let session = self.sessions.current();
        let api = &self.api;

        let fetch = async move {
            let token = session.token.ok_or(PortalError::Unauthorized)?;
            api.get_all_appointments(controls.selected_date, controls.name_argument(), &token)
                .await
        };

        self.rows
            .load(fetch, create_patient_row, &self.messages)
            .await
    }

    pub async fn controls(&self) -> AppointmentControls {
        self.controls.lock().await.clone()
    }

    /// Click the action button on the row for `appointment_id`.
    pub async fn activate_row(&self, appointment_id: u64) -> bool {
        match self
            .rows
            .find(|row| row.appointment_id == appointment_id)
            .await
        {
            Some(row) => {
                activate_row(&row, self.ui.as_ref());
                true
            }
            None => false,
        }
    }

    pub async fn view(&self) -> ListView<PatientRow> {
        self.rows.view().await
    }
}

fn name_filter(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
