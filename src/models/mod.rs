// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Records exchanged with the clinic backend, and the forms that build them.

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod responses;

pub use appointment::{Appointment, BookingForm, PatientSummary};
pub use doctor::{Doctor, DoctorFilter, DoctorForm, DoctorUpdateForm, NewDoctor};
pub use patient::{LoginForm, Patient, SignupForm};
pub use responses::{LoginOutcome, ServiceResponse};

use serde::{Deserialize, Deserializer};

/// Deserialize a field the backend may send as `null`, using its default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
