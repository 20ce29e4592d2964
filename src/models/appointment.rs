// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Appointment records as listed on the doctor dashboard.

use crate::models::null_as_default;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Appointment row returned by the backend (flat DTO shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u64,
    #[serde(default)]
    pub doctor_id: Option<u64>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    pub patient_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub patient_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub patient_email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub patient_phone: String,
    pub appointment_time: NaiveDateTime,
    /// 0 = scheduled, 1 = completed
    #[serde(default)]
    pub status: i32,
}

impl Appointment {
    /// The patient this appointment belongs to.
    pub fn patient(&self) -> PatientSummary {
        PatientSummary {
            id: self.patient_id,
            name: self.patient_name.clone(),
            phone: self.patient_phone.clone(),
            email: self.patient_email.clone(),
        }
    }
}

/// Patient columns shown in an appointment row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientSummary {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Booking overlay submission.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub doctor_id: u64,
    pub patient_id: u64,
    pub appointment_time: NaiveDateTime,
}

/// Request body for booking, in the backend's entity shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub doctor: EntityRef,
    pub patient: EntityRef,
    pub appointment_time: NaiveDateTime,
    pub status: i32,
}

#[derive(Debug, Serialize)]
pub struct EntityRef {
    pub id: u64,
}

impl From<&BookingForm> for BookingRequest {
    fn from(form: &BookingForm) -> Self {
        Self {
            doctor: EntityRef { id: form.doctor_id },
            patient: EntityRef {
                id: form.patient_id,
            },
            appointment_time: form.appointment_time,
            status: 0,
        }
    }
}
