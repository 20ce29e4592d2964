// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Clinic Portal CLI
//!
//! Drives the portal dashboards against a clinic backend from the command
//! line. Rendered lists go to stdout; alerts and logs go to stderr.

use anyhow::{bail, Context};
use chrono::{NaiveDate, NaiveDateTime};
use clinic_portal::{
    config::Config,
    dashboard::FlowOutcome,
    models::{BookingForm, Doctor, DoctorForm, LoginForm, Patient, SignupForm},
    services::ClinicClient,
    session::{FileStore, MemoryStore, Role, SessionContext},
    ui::{CardOutcome, LoadOutcome, Modal, Ui},
    Portal,
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
usage: clinic-portal <command> [args]

commands:
  doctors [name] [time] [specialty]     list or filter doctors
  add-doctor <name> <email> <phone> <password> <specialty> <slot>...
  delete-doctor <id>                    delete a doctor (admin)
  book <doctor-id> <patient-id> <YYYY-MM-DDTHH:MM:SS>
  appointments [YYYY-MM-DD] [name]      list appointments (doctor)
  prescribe <appointment-id> [YYYY-MM-DD]
  signup <name> <email> <password> <phone> <address>
  login <email> <password>              patient login
  admin-login <username> <password>
  doctor-login <email> <password>
  logout";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(api = %config.api_base_url, "Starting clinic portal");

    let store = Arc::new(FileStore::new(&config.session_file));
    let portal = Portal::new(
        Arc::new(ClinicClient::new(config.api_base_url.clone())),
        Arc::new(ConsoleUi),
        SessionContext::new(store),
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        println!("{}", USAGE);
        return Ok(());
    };

    run(&portal, command, rest).await
}

async fn run(portal: &Portal, command: &str, args: &[String]) -> anyhow::Result<()> {
    let arg = |i: usize| args.get(i).map(String::as_str).unwrap_or("");

    match command {
        "doctors" => {
            let session = portal.sessions.current();
            if session.role == Role::Admin {
                let dashboard = portal.admin_dashboard();
                let outcome = if args.is_empty() {
                    dashboard.on_page_load().await
                } else {
                    dashboard
                        .filter_doctors_on_change(arg(0), arg(1), arg(2))
                        .await
                };
                print!("{}", dashboard.view().await);
                check_load(outcome)?;
            } else {
                // Browse as a guest without persisting the role.
                let browsing = if session.role == Role::Anonymous {
                    Portal {
                        sessions: SessionContext::new(Arc::new(MemoryStore::with_session(
                            Role::Guest,
                            None,
                        ))),
                        ..portal.clone()
                    }
                } else {
                    portal.clone()
                };
                let dashboard = browsing.patient_dashboard();
                let outcome = if args.is_empty() {
                    dashboard.on_page_load().await
                } else {
                    dashboard
                        .filter_doctors_on_change(arg(0), arg(1), arg(2))
                        .await
                };
                print!("{}", dashboard.view().await);
                check_load(outcome)?;
            }
        }
        "add-doctor" => {
            if args.len() < 6 {
                bail!(USAGE);
            }
            let form = DoctorForm {
                name: arg(0).to_string(),
                email: arg(1).to_string(),
                phone: arg(2).to_string(),
                password: arg(3).to_string(),
                specialization: arg(4).to_string(),
                availability: args[5..].to_vec(),
            };
            let dashboard = portal.admin_dashboard();
            check_flow(dashboard.add_doctor(form).await)?;
            print!("{}", dashboard.view().await);
        }
        "delete-doctor" => {
            let id: u64 = arg(0).parse().context("doctor id must be a number")?;
            let dashboard = portal.admin_dashboard();
            check_load(dashboard.on_page_load().await)?;
            match dashboard.activate_card(id).await {
                Some(CardOutcome::Removed) => print!("{}", dashboard.view().await),
                Some(outcome) => bail!("doctor {} was not deleted ({:?})", id, outcome),
                None => bail!("doctor {} is not listed", id),
            }
        }
        "book" => {
            let doctor_id: u64 = arg(0).parse().context("doctor id must be a number")?;
            let patient_id: u64 = arg(1).parse().context("patient id must be a number")?;
            let appointment_time = NaiveDateTime::parse_from_str(arg(2), "%Y-%m-%dT%H:%M:%S")
                .context("time must be YYYY-MM-DDTHH:MM:SS")?;
            let outcome = portal
                .patient_dashboard()
                .book_appointment(BookingForm {
                    doctor_id,
                    patient_id,
                    appointment_time,
                })
                .await;
            check_flow(outcome)?;
        }
        "appointments" | "prescribe" => {
            let (date_arg, name_arg) = if command == "prescribe" {
                (arg(1), "")
            } else {
                (arg(0), arg(1))
            };
            let date = if date_arg.is_empty() {
                None
            } else {
                Some(
                    NaiveDate::parse_from_str(date_arg, "%Y-%m-%d")
                        .context("date must be YYYY-MM-DD")?,
                )
            };
            let dashboard = portal.doctor_dashboard();
            let outcome = dashboard.apply_controls(date, name_arg).await;

            if command == "prescribe" {
                check_load(outcome)?;
                let id: u64 = arg(0).parse().context("appointment id must be a number")?;
                if !dashboard.activate_row(id).await {
                    bail!("appointment {} is not listed", id);
                }
            } else {
                print!("{}", dashboard.view().await);
                check_load(outcome)?;
            }
        }
        "signup" => {
            let form = SignupForm {
                name: arg(0).to_string(),
                email: arg(1).to_string(),
                password: arg(2).to_string(),
                phone: arg(3).to_string(),
                address: arg(4).to_string(),
            };
            check_flow(portal.patient_dashboard().signup(form).await)?;
        }
        "login" => {
            let outcome = portal
                .patient_dashboard()
                .login(LoginForm::new(arg(0), arg(1)))
                .await;
            check_flow(outcome)?;
        }
        "admin-login" => {
            check_flow(portal.auth().admin_login(LoginForm::new(arg(0), arg(1))).await)?;
        }
        "doctor-login" => {
            let outcome = portal
                .auth()
                .doctor_login(LoginForm::new(arg(0), arg(1)))
                .await;
            check_flow(outcome)?;
        }
        "logout" => {
            check_flow(portal.auth().logout())?;
        }
        _ => bail!(USAGE),
    }

    Ok(())
}

/// Map a form outcome to the process exit status.
fn check_flow(outcome: FlowOutcome) -> anyhow::Result<()> {
    match outcome {
        FlowOutcome::Completed => Ok(()),
        other => bail!("command did not complete ({:?})", other),
    }
}

/// Map a list load to the process exit status. An empty list is not an error.
fn check_load(outcome: LoadOutcome) -> anyhow::Result<()> {
    match outcome {
        LoadOutcome::Rendered { .. } => Ok(()),
        other => bail!("list did not load ({:?})", other),
    }
}

/// Terminal host: alerts on stderr, confirmations read from stdin.
struct ConsoleUi;

impl Ui for ConsoleUi {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        eprint!("{} [y/N] ", message);
        let _ = io::stderr().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }

    fn open_modal(&self, modal: Modal) {
        tracing::debug!(?modal, "Open modal");
        if let Modal::AddPrescription {
            appointment_id,
            patient_name,
        } = modal
        {
            println!(
                "Prescription for {} (appointment {})",
                patient_name, appointment_id
            );
        }
    }

    fn close_modal(&self, modal: Modal) {
        tracing::debug!(?modal, "Close modal");
    }

    fn show_booking_overlay(&self, doctor: &Doctor, patient: &Patient) {
        println!(
            "Booking {} for {} (patient {}); slots: {}",
            doctor.name,
            patient.name,
            patient.id,
            doctor.availability.join(", ")
        );
    }

    fn navigate(&self, location: &str) {
        println!("-> {}", location);
    }
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(io::stderr);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("clinic_portal=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
