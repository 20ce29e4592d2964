// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - calls to the clinic backend.

pub mod clinic;

pub use clinic::ClinicClient;

use crate::error::Result;
use crate::models::{
    Appointment, BookingForm, Doctor, DoctorFilter, LoginForm, LoginOutcome, NewDoctor, Patient,
    ServiceResponse, SignupForm,
};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Backend operations used by the dashboards.
///
/// `ClinicClient` implements this over HTTP; tests substitute a fake.
#[async_trait]
pub trait ClinicApi: Send + Sync {
    /// List every doctor.
    async fn get_doctors(&self) -> Result<Vec<Doctor>>;

    /// List doctors matching name, time slot and specialty.
    async fn filter_doctors(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>>;

    /// Create a doctor (admin token).
    async fn save_doctor(&self, doctor: &NewDoctor, token: &str) -> Result<ServiceResponse>;

    /// Update an existing doctor (admin token).
    async fn update_doctor(&self, doctor: &NewDoctor, token: &str) -> Result<ServiceResponse>;

    /// Delete a doctor. Any non-OK status is an error.
    async fn delete_doctor(&self, id: u64, token: &str) -> Result<()>;

    /// Profile of the patient owning `token`.
    async fn get_patient_data(&self, token: &str) -> Result<Patient>;

    async fn patient_signup(&self, form: &SignupForm) -> Result<ServiceResponse>;

    async fn patient_login(&self, form: &LoginForm) -> Result<LoginOutcome>;

    async fn admin_login(&self, form: &LoginForm) -> Result<LoginOutcome>;

    async fn doctor_login(&self, form: &LoginForm) -> Result<LoginOutcome>;

    /// Appointments on `date`. `patient_name` is sent verbatim, including
    /// the literal `"null"` the backend treats as "no name filter".
    async fn get_all_appointments(
        &self,
        date: NaiveDate,
        patient_name: &str,
        token: &str,
    ) -> Result<Vec<Appointment>>;

    /// Book an appointment (patient token).
    async fn book_appointment(&self, booking: &BookingForm, token: &str)
        -> Result<ServiceResponse>;
}
