// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page controllers: wire user events to service calls and re-render lists.

pub mod admin;
pub mod auth;
pub mod board;
pub mod doctor;
pub mod patient;

pub use admin::AdminDashboard;
pub use auth::AuthFlow;
pub use board::DoctorBoard;
pub use doctor::{AppointmentControls, DoctorDashboard};
pub use patient::PatientDashboard;

/// How a form submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The backend accepted the action.
    Completed,
    /// A required field was missing; no network call was made.
    Invalid,
    /// The backend answered but refused the action.
    Refused,
    /// Transport or storage failure.
    Failed,
}
