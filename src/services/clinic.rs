// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the clinic backend.
//!
//! Handles:
//! - Doctor listing, filtering, create/update/delete
//! - Patient profile, signup and login (plus admin/doctor login)
//! - Appointment listing and booking
//!
//! List endpoints may answer with a bare array, an object wrapping the
//! array (`{"doctors": [...]}`), or nothing at all; all three decode to a
//! `Vec` (empty when absent).

use crate::error::{PortalError, Result};
use crate::models::appointment::BookingRequest;
use crate::models::responses::LoginResponse;
use crate::models::{
    Appointment, BookingForm, Doctor, DoctorFilter, LoginForm, LoginOutcome, NewDoctor, Patient,
    ServiceResponse, SignupForm,
};
use crate::services::ClinicApi;
use crate::time_utils::format_date;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Path segment the backend reads as "no value".
const NULL_SEGMENT: &str = "null";

/// Clinic backend client.
#[derive(Clone)]
pub struct ClinicClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClinicClient {
    /// Create a client for the backend at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build `{base}/api/{segments...}` with each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> String {
        let path: Vec<String> = segments
            .iter()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect();
        format!("{}/api/{}", self.base_url, path.join("/"))
    }

    /// Check response status and return error if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.as_u16() == 401 {
            tracing::warn!("Clinic backend rejected bearer token (401)");
        }

        Err(PortalError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }

    /// Check response and parse the body as loose JSON (`Null` when empty).
    async fn check_response_value(&self, response: reqwest::Response) -> Result<Value> {
        let response = self.check_response(response).await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|e| PortalError::Network(format!("JSON parse error: {}", e)))
    }

    /// Fold a create/update/signup response into a `ServiceResponse`.
    ///
    /// Non-OK statuses are not errors here: the caller shows the server's
    /// message the same way for every logical failure. A `success` field in
    /// the body overrides a 2xx status.
    async fn service_response(&self, response: reqwest::Response) -> Result<ServiceResponse> {
        let status = response.status();
        let body = response.text().await?;
        let message = error_message(&body);

        if status.is_success() {
            // A 2xx body may still report a logical failure.
            let success = body_success(&body).unwrap_or(true);
            if !success {
                tracing::warn!(status = status.as_u16(), "Clinic backend reported failure");
            }
            return Ok(ServiceResponse { success, message });
        }

        tracing::warn!(status = status.as_u16(), "Clinic backend reported failure");
        Ok(ServiceResponse {
            success: false,
            message: message.or_else(|| Some(format!("HTTP {}", status))),
        })
    }

    async fn login(&self, path: &[&str], body: Value) -> Result<LoginOutcome> {
        let response = self.http.post(self.url(path)).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::info!(status = status.as_u16(), "Login rejected");
            return Ok(LoginOutcome::Rejected {
                status: status.as_u16(),
            });
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| PortalError::Network(format!("JSON parse error: {}", e)))?;
        Ok(LoginOutcome::Accepted { token: login.token })
    }
}

#[async_trait]
impl ClinicApi for ClinicClient {
    async fn get_doctors(&self) -> Result<Vec<Doctor>> {
        let response = self.http.get(self.url(&["doctors"])).send().await?;
        extract_list(self.check_response_value(response).await?, "doctors")
    }

    async fn filter_doctors(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>> {
        let url = self.url(&[
            "doctors",
            "filter",
            filter.name.as_deref().unwrap_or(NULL_SEGMENT),
            filter.time.as_deref().unwrap_or(NULL_SEGMENT),
            filter.specialty.as_deref().unwrap_or(NULL_SEGMENT),
        ]);
        let response = self.http.get(url).send().await?;
        extract_list(self.check_response_value(response).await?, "doctors")
    }

    async fn save_doctor(&self, doctor: &NewDoctor, token: &str) -> Result<ServiceResponse> {
        let response = self
            .http
            .post(self.url(&["doctors"]))
            .bearer_auth(token)
            .json(doctor)
            .send()
            .await?;
        self.service_response(response).await
    }

    async fn update_doctor(&self, doctor: &NewDoctor, token: &str) -> Result<ServiceResponse> {
        let response = self
            .http
            .put(self.url(&["doctors"]))
            .bearer_auth(token)
            .json(doctor)
            .send()
            .await?;
        self.service_response(response).await
    }

    async fn delete_doctor(&self, id: u64, token: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&["doctors", &id.to_string()]))
            .bearer_auth(token)
            .send()
            .await?;

        self.check_response(response).await?;
        tracing::info!(doctor_id = id, "Doctor deleted");
        Ok(())
    }

    async fn get_patient_data(&self, token: &str) -> Result<Patient> {
        let response = self
            .http
            .get(self.url(&["patients", "me"]))
            .bearer_auth(token)
            .send()
            .await?;

        let value = match self.check_response_value(response).await? {
            Value::Object(mut map) if map.contains_key("patient") => {
                map.remove("patient").unwrap_or(Value::Null)
            }
            other => other,
        };
        serde_json::from_value(value)
            .map_err(|e| PortalError::Network(format!("JSON parse error: {}", e)))
    }

    async fn patient_signup(&self, form: &SignupForm) -> Result<ServiceResponse> {
        let response = self
            .http
            .post(self.url(&["patients"]))
            .json(form)
            .send()
            .await?;
        self.service_response(response).await
    }

    async fn patient_login(&self, form: &LoginForm) -> Result<LoginOutcome> {
        let body = serde_json::json!({
            "email": form.identifier,
            "password": form.password,
        });
        self.login(&["patients", "login"], body).await
    }

    async fn admin_login(&self, form: &LoginForm) -> Result<LoginOutcome> {
        let body = serde_json::json!({
            "username": form.identifier,
            "password": form.password,
        });
        self.login(&["admin", "login"], body).await
    }

    async fn doctor_login(&self, form: &LoginForm) -> Result<LoginOutcome> {
        let body = serde_json::json!({
            "identifier": form.identifier,
            "password": form.password,
        });
        self.login(&["doctors", "login"], body).await
    }

    async fn get_all_appointments(
        &self,
        date: NaiveDate,
        patient_name: &str,
        token: &str,
    ) -> Result<Vec<Appointment>> {
        let url = self.url(&["appointments", &format_date(date), patient_name]);
        let response = self.http.get(url).bearer_auth(token).send().await?;
        extract_list(self.check_response_value(response).await?, "appointments")
    }

    async fn book_appointment(
        &self,
        booking: &BookingForm,
        token: &str,
    ) -> Result<ServiceResponse> {
        let response = self
            .http
            .post(self.url(&["appointments"]))
            .bearer_auth(token)
            .json(&BookingRequest::from(booking))
            .send()
            .await?;
        self.service_response(response).await
    }
}

/// Pull the `message` (or `error`) field out of a JSON body.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

/// Whether the body carries an explicit `success` flag, and its value.
fn body_success(body: &str) -> Option<bool> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("success").and_then(Value::as_bool)
}

/// Decode a list that may be bare, wrapped under `key`, or absent.
///
/// Records are decoded one at a time; a malformed record is logged and
/// skipped so the rest of the list still renders.
fn extract_list<T: DeserializeOwned>(value: Value, key: &str) -> Result<Vec<T>> {
    let list = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(mut map) => match map.remove(key) {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(list) => list,
        },
        other => other,
    };

    let Value::Array(items) = list else {
        return Err(PortalError::Network(format!(
            "JSON parse error: expected a list of {}",
            key
        )));
    };

    let records = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(list = key, index, error = %e, "Skipping malformed record");
                None
            }
        })
        .collect();
    Ok(records)
}
