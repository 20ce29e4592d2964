//! `Ui` that records every effect instead of showing it.
//!
//! Used by tests and by headless embedders that inspect effects after the
//! fact.

use crate::models::{Doctor, Patient};
use crate::ui::{Modal, Ui};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// One recorded UI effect.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Alert(String),
    Confirm(String),
    OpenModal(Modal),
    CloseModal(Modal),
    BookingOverlay { doctor_id: u64, patient_id: u64 },
    Navigate(String),
}

#[derive(Debug)]
pub struct RecordingUi {
    events: Mutex<Vec<UiEvent>>,
    confirm_answer: AtomicBool,
}

impl Default for RecordingUi {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingUi {
    /// Recorder that accepts every confirmation.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            confirm_answer: AtomicBool::new(true),
        }
    }

    /// Answer future confirmations with `answer`.
    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.store(answer, Ordering::SeqCst);
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Alert messages only, in order.
    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                UiEvent::Alert(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    fn push(&self, event: UiEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Ui for RecordingUi {
    fn alert(&self, message: &str) {
        self.push(UiEvent::Alert(message.to_string()));
    }

    fn confirm(&self, message: &str) -> bool {
        self.push(UiEvent::Confirm(message.to_string()));
        self.confirm_answer.load(Ordering::SeqCst)
    }

    fn open_modal(&self, modal: Modal) {
        self.push(UiEvent::OpenModal(modal));
    }

    fn close_modal(&self, modal: Modal) {
        self.push(UiEvent::CloseModal(modal));
    }

    fn show_booking_overlay(&self, doctor: &Doctor, patient: &Patient) {
        self.push(UiEvent::BookingOverlay {
            doctor_id: doctor.id,
            patient_id: patient.id,
        });
    }

    fn navigate(&self, location: &str) {
        self.push(UiEvent::Navigate(location.to_string()));
    }
}
