// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Doctor records and the admin's doctor forms.

use crate::models::null_as_default;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Doctor as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Contact number (older backends call this `mobile`)
    #[serde(default, alias = "mobile", deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specialization: String,
    /// Ordered time slots, e.g. "09:00-10:00"
    #[serde(default, alias = "availableTimes", deserialize_with = "null_as_default")]
    pub availability: Vec<String>,
}

/// Doctor record sent on create and update.
///
/// The password is write-only: it is sent on create and never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub specialization: String,
    pub availability: Vec<String>,
}

/// "Add doctor" modal contents.
#[derive(Debug, Clone, Default, Validate)]
pub struct DoctorForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[validate(length(min = 1, message = "specialization is required"))]
    pub specialization: String,
    /// Checked availability boxes, in form order
    #[validate(length(min = 1, message = "select at least one time slot"))]
    pub availability: Vec<String>,
}

impl DoctorForm {
    /// Trim every field and drop blank slots, as the form inputs are read.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.trim().to_string(),
            specialization: self.specialization.trim().to_string(),
            availability: trim_slots(self.availability),
        }
    }

    pub fn into_new_doctor(self) -> NewDoctor {
        NewDoctor {
            id: None,
            name: self.name,
            email: self.email,
            phone: self.phone,
            password: Some(self.password),
            specialization: self.specialization,
            availability: self.availability,
        }
    }
}

/// "Edit doctor" modal contents. The password may be left blank.
#[derive(Debug, Clone, Default, Validate)]
pub struct DoctorUpdateForm {
    pub id: u64,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    pub password: String,
    #[validate(length(min = 1, message = "specialization is required"))]
    pub specialization: String,
    #[validate(length(min = 1, message = "select at least one time slot"))]
    pub availability: Vec<String>,
}

impl DoctorUpdateForm {
    pub fn trimmed(self) -> Self {
        Self {
            id: self.id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.trim().to_string(),
            specialization: self.specialization.trim().to_string(),
            availability: trim_slots(self.availability),
        }
    }

    pub fn into_new_doctor(self) -> NewDoctor {
        NewDoctor {
            id: Some(self.id),
            name: self.name,
            email: self.email,
            phone: self.phone,
            password: (!self.password.is_empty()).then_some(self.password),
            specialization: self.specialization,
            availability: self.availability,
        }
    }
}

fn trim_slots(slots: Vec<String>) -> Vec<String> {
    slots
        .into_iter()
        .map(|slot| slot.trim().to_string())
        .filter(|slot| !slot.is_empty())
        .collect()
}

/// Search bar and filter dropdown values for the doctor list.
///
/// Blank controls are normalized to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorFilter {
    pub name: Option<String>,
    pub time: Option<String>,
    pub specialty: Option<String>,
}

impl DoctorFilter {
    /// Build a filter from raw control values.
    pub fn from_controls(name: &str, time: &str, specialty: &str) -> Self {
        Self {
            name: non_blank(name),
            time: non_blank(time),
            specialty: non_blank(specialty),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.time.is_none() && self.specialty.is_none()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
