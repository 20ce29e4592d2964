// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Doctor card grid shared by the admin and patient dashboards.

use crate::models::{Doctor, DoctorFilter};
use crate::services::ClinicApi;
use crate::session::Session;
use crate::ui::card::{activate_card, create_doctor_card};
use crate::ui::{CardOutcome, DoctorCard, ListController, ListMessages, ListView, LoadOutcome, Ui};
use std::sync::Arc;

pub struct DoctorBoard {
    api: Arc<dyn ClinicApi>,
    ui: Arc<dyn Ui>,
    cards: ListController<DoctorCard>,
    load_messages: ListMessages,
    filter_messages: ListMessages,
}

impl DoctorBoard {
    /// `load_messages` are used for the full listing, `filter_messages`
    /// for filtered results.
    pub fn new(
        api: Arc<dyn ClinicApi>,
        ui: Arc<dyn Ui>,
        load_messages: ListMessages,
        filter_messages: ListMessages,
    ) -> Self {
        Self {
            api,
            ui,
            cards: ListController::new("doctors"),
            load_messages,
            filter_messages,
        }
    }

    /// Fetch every doctor and render one card each.
    pub async fn load_doctor_cards(&self, session: &Session) -> LoadOutcome {
        self.cards
            .load(
                self.api.get_doctors(),
                |doctor: &Doctor| create_doctor_card(doctor, session),
                &self.load_messages,
            )
            .await
    }

    /// Fetch doctors matching `filter` and render them.
    pub async fn filter_doctors(&self, filter: &DoctorFilter, session: &Session) -> LoadOutcome {
        tracing::debug!(?filter, "Filtering doctors");
        self.cards
            .load(
                self.api.filter_doctors(filter),
                |doctor: &Doctor| create_doctor_card(doctor, session),
                &self.filter_messages,
            )
            .await
    }

    /// Click the action button on the card for `doctor_id`.
    ///
    /// Returns `None` when no such card is displayed. A successful delete
    /// removes the card from the grid without reloading.
    pub async fn activate(&self, doctor_id: u64, session: &Session) -> Option<CardOutcome> {
        let card = self.cards.find(|card| card.doctor_id() == doctor_id).await?;

        let outcome = activate_card(&card, session, self.api.as_ref(), self.ui.as_ref()).await;
        if outcome == CardOutcome::Removed {
            self.cards
                .remove_where(|card| card.doctor_id() == doctor_id)
                .await;
        }
        Some(outcome)
    }

    pub async fn view(&self) -> ListView<DoctorCard> {
        self.cards.view().await
    }
}
