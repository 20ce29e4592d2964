// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use clinic_portal::error::{PortalError, Result};
use clinic_portal::models::{
    Appointment, BookingForm, Doctor, DoctorFilter, LoginForm, LoginOutcome, NewDoctor, Patient,
    ServiceResponse, SignupForm,
};
use clinic_portal::services::ClinicApi;
use clinic_portal::session::{MemoryStore, Role, SessionContext};
use clinic_portal::ui::RecordingUi;
use clinic_portal::Portal;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// One call made against the fake backend.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetDoctors,
    FilterDoctors(DoctorFilter),
    SaveDoctor { doctor: NewDoctor, token: String },
    UpdateDoctor { doctor: NewDoctor, token: String },
    DeleteDoctor { id: u64, token: String },
    GetPatientData { token: String },
    PatientSignup { email: String },
    PatientLogin { identifier: String },
    AdminLogin { identifier: String },
    DoctorLogin { identifier: String },
    GetAllAppointments {
        date: NaiveDate,
        patient_name: String,
        token: String,
    },
    BookAppointment { booking: BookingForm, token: String },
}

/// Canned reply for one fake endpoint.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    /// Backend answered with this non-OK status
    Status(u16),
    /// Transport failure
    NetworkDown,
}

impl<T: Clone> Reply<T> {
    fn get(&self) -> Result<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Status(status) => Err(PortalError::Api {
                status: *status,
                message: None,
            }),
            Reply::NetworkDown => Err(PortalError::Network("connection refused".to_string())),
        }
    }
}

/// In-memory `ClinicApi` that records calls and returns canned replies.
#[allow(dead_code)]
pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    pub doctors: Mutex<Reply<Vec<Doctor>>>,
    pub filtered: Mutex<Reply<Vec<Doctor>>>,
    pub save: Mutex<Reply<ServiceResponse>>,
    pub delete: Mutex<Reply<()>>,
    pub patient: Mutex<Reply<Patient>>,
    pub signup: Mutex<Reply<ServiceResponse>>,
    pub login: Mutex<Reply<LoginOutcome>>,
    pub appointments: Mutex<Reply<Vec<Appointment>>>,
    pub booking: Mutex<Reply<ServiceResponse>>,
    /// When set, the next `get_doctors` waits for this channel instead of
    /// answering from `doctors`.
    doctors_gate: Mutex<Option<oneshot::Receiver<Vec<Doctor>>>>,
}

#[allow(dead_code)]
impl FakeApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            doctors: Mutex::new(Reply::Ok(Vec::new())),
            filtered: Mutex::new(Reply::Ok(Vec::new())),
            save: Mutex::new(Reply::Ok(ServiceResponse::ok("Doctor added to db"))),
            delete: Mutex::new(Reply::Ok(())),
            patient: Mutex::new(Reply::Ok(patient(5, "Grace"))),
            signup: Mutex::new(Reply::Ok(ServiceResponse::ok("Signup successful"))),
            login: Mutex::new(Reply::Ok(LoginOutcome::Accepted {
                token: "issued-token".to_string(),
            })),
            appointments: Mutex::new(Reply::Ok(Vec::new())),
            booking: Mutex::new(Reply::Ok(ServiceResponse::ok("Appointment booked"))),
            doctors_gate: Mutex::new(None),
        }
    }

    /// Hold the next `get_doctors` until the returned sender fires.
    pub fn hold_doctors(&self) -> oneshot::Sender<Vec<Doctor>> {
        let (tx, rx) = oneshot::channel();
        *self.doctors_gate.lock().unwrap() = Some(rx);
        tx
    }

    pub fn with_doctors(doctors: Vec<Doctor>) -> Self {
        let api = Self::new();
        *api.doctors.lock().unwrap() = Reply::Ok(doctors);
        api
    }

    pub fn set<T>(slot: &Mutex<Reply<T>>, reply: Reply<T>) {
        *slot.lock().unwrap() = reply;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ClinicApi for FakeApi {
    async fn get_doctors(&self) -> Result<Vec<Doctor>> {
        self.record(Call::GetDoctors);
        let gate = self.doctors_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            return gate
                .await
                .map_err(|_| PortalError::Network("gate dropped".to_string()));
        }
        self.doctors.lock().unwrap().get()
    }

    async fn filter_doctors(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>> {
        self.record(Call::FilterDoctors(filter.clone()));
        self.filtered.lock().unwrap().get()
    }

    async fn save_doctor(&self, doctor: &NewDoctor, token: &str) -> Result<ServiceResponse> {
        self.record(Call::SaveDoctor {
            doctor: doctor.clone(),
            token: token.to_string(),
        });
        self.save.lock().unwrap().get()
    }

    async fn update_doctor(&self, doctor: &NewDoctor, token: &str) -> Result<ServiceResponse> {
        self.record(Call::UpdateDoctor {
            doctor: doctor.clone(),
            token: token.to_string(),
        });
        self.save.lock().unwrap().get()
    }

    async fn delete_doctor(&self, id: u64, token: &str) -> Result<()> {
        self.record(Call::DeleteDoctor {
            id,
            token: token.to_string(),
        });
        self.delete.lock().unwrap().get()
    }

    async fn get_patient_data(&self, token: &str) -> Result<Patient> {
        self.record(Call::GetPatientData {
            token: token.to_string(),
        });
        self.patient.lock().unwrap().get()
    }

    async fn patient_signup(&self, form: &SignupForm) -> Result<ServiceResponse> {
        self.record(Call::PatientSignup {
            email: form.email.clone(),
        });
        self.signup.lock().unwrap().get()
    }

    async fn patient_login(&self, form: &LoginForm) -> Result<LoginOutcome> {
        self.record(Call::PatientLogin {
            identifier: form.identifier.clone(),
        });
        self.login.lock().unwrap().get()
    }

    async fn admin_login(&self, form: &LoginForm) -> Result<LoginOutcome> {
        self.record(Call::AdminLogin {
            identifier: form.identifier.clone(),
        });
        self.login.lock().unwrap().get()
    }

    async fn doctor_login(&self, form: &LoginForm) -> Result<LoginOutcome> {
        self.record(Call::DoctorLogin {
            identifier: form.identifier.clone(),
        });
        self.login.lock().unwrap().get()
    }

    async fn get_all_appointments(
        &self,
        date: NaiveDate,
        patient_name: &str,
        token: &str,
    ) -> Result<Vec<Appointment>> {
        self.record(Call::GetAllAppointments {
            date,
            patient_name: patient_name.to_string(),
            token: token.to_string(),
        });
        self.appointments.lock().unwrap().get()
    }

    async fn book_appointment(
        &self,
        booking: &BookingForm,
        token: &str,
    ) -> Result<ServiceResponse> {
        self.record(Call::BookAppointment {
            booking: booking.clone(),
            token: token.to_string(),
        });
        self.booking.lock().unwrap().get()
    }
}

#[allow(dead_code)]
pub fn doctor(id: u64, name: &str) -> Doctor {
    Doctor {
        id,
        name: name.to_string(),
        email: format!("doctor{}@clinic.test", id),
        phone: "5550100".to_string(),
        specialization: "Cardiology".to_string(),
        availability: vec!["09:00-10:00".to_string(), "10:00-11:00".to_string()],
    }
}

#[allow(dead_code)]
pub fn patient(id: u64, name: &str) -> Patient {
    Patient {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "5550101".to_string(),
        address: "1 Main St".to_string(),
    }
}

#[allow(dead_code)]
pub fn at(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn appointment(id: u64, patient_name: &str, date: NaiveDate) -> Appointment {
    Appointment {
        id,
        doctor_id: Some(1),
        doctor_name: Some("Dr. Ada".to_string()),
        patient_id: 100 + id,
        patient_name: patient_name.to_string(),
        patient_email: format!("{}@example.com", patient_name.to_lowercase()),
        patient_phone: "5550101".to_string(),
        appointment_time: at(date, 9),
        status: 0,
    }
}

/// Portal over a fake backend, a recording UI and an in-memory session.
#[allow(dead_code)]
pub fn create_test_portal(
    role: Role,
    token: Option<&str>,
    api: FakeApi,
) -> (Portal, Arc<FakeApi>, Arc<RecordingUi>) {
    let api = Arc::new(api);
    let ui = Arc::new(RecordingUi::new());
    let sessions = SessionContext::new(Arc::new(MemoryStore::with_session(role, token)));
    let portal = Portal::new(api.clone(), ui.clone(), sessions);
    (portal, api, ui)
}
