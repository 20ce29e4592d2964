// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Clinic Portal: doctor listings, appointment tables and booking for a
//! clinic-management backend.
//!
//! This crate provides the presentation layer of the clinic portal as
//! headless view models, driven by a typed client for the backend API.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod time_utils;
pub mod ui;

use dashboard::{AdminDashboard, AuthFlow, DoctorDashboard, PatientDashboard};
use services::ClinicApi;
use session::SessionContext;
use std::sync::Arc;
use ui::Ui;

/// Shared portal state: backend, host UI and session store.
#[derive(Clone)]
pub struct Portal {
    pub api: Arc<dyn ClinicApi>,
    pub ui: Arc<dyn Ui>,
    pub sessions: SessionContext,
}

impl Portal {
    pub fn new(api: Arc<dyn ClinicApi>, ui: Arc<dyn Ui>, sessions: SessionContext) -> Self {
        Self { api, ui, sessions }
    }

    pub fn admin_dashboard(&self) -> AdminDashboard {
        AdminDashboard::new(self.api.clone(), self.ui.clone(), self.sessions.clone())
    }

    pub fn doctor_dashboard(&self) -> DoctorDashboard {
        DoctorDashboard::new(self.api.clone(), self.ui.clone(), self.sessions.clone())
    }

    pub fn patient_dashboard(&self) -> PatientDashboard {
        PatientDashboard::new(self.api.clone(), self.ui.clone(), self.sessions.clone())
    }

    pub fn auth(&self) -> AuthFlow {
        AuthFlow::new(self.api.clone(), self.ui.clone(), self.sessions.clone())
    }
}
