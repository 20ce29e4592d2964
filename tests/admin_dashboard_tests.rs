// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin dashboard: listing, filtering, adding and deleting doctors.

use clinic_portal::dashboard::admin::{ADD_ERROR, ADD_SUCCESS, INCOMPLETE_FORM, UNAUTHORIZED};
use clinic_portal::dashboard::FlowOutcome;
use clinic_portal::models::{DoctorFilter, DoctorForm, DoctorUpdateForm, ServiceResponse};
use clinic_portal::session::Role;
use clinic_portal::ui::card::{CONFIRM_DELETE, DELETE_ERROR, DELETE_FAILED};
use clinic_portal::ui::{CardAction, CardOutcome, LoadOutcome, Modal, Placeholder, UiEvent};

mod common;
use common::{create_test_portal, doctor, Call, FakeApi, Reply};

fn complete_form() -> DoctorForm {
    DoctorForm {
        name: "Dr. Ada".to_string(),
        email: "ada@clinic.test".to_string(),
        phone: "5550100".to_string(),
        password: "secret".to_string(),
        specialization: "Cardiology".to_string(),
        availability: vec!["09:00-10:00".to_string()],
    }
}

#[tokio::test]
async fn test_page_load_renders_cards_in_service_order() {
    let api = FakeApi::with_doctors(vec![doctor(3, "Dr. C"), doctor(1, "Dr. A")]);
    let (portal, api, _ui) = create_test_portal(Role::Admin, Some("admin-token"), api);
    let dashboard = portal.admin_dashboard();

    assert_eq!(
        dashboard.on_page_load().await,
        LoadOutcome::Rendered { count: 2 }
    );

    let view = dashboard.view().await;
    let ids: Vec<u64> = view.items.iter().map(|c| c.doctor_id()).collect();
    assert_eq!(ids, vec![3, 1]);
    assert!(view
        .items
        .iter()
        .all(|c| c.action == Some(CardAction::Delete)));
    assert_eq!(api.calls(), vec![Call::GetDoctors]);
}

#[tokio::test]
async fn test_empty_list_renders_single_placeholder() {
    let (portal, _api, _ui) = create_test_portal(Role::Admin, Some("t"), FakeApi::new());
    let dashboard = portal.admin_dashboard();

    dashboard.on_page_load().await;

    let view = dashboard.view().await;
    assert!(view.items.is_empty());
    assert_eq!(
        view.placeholder,
        Some(Placeholder::Empty("No doctors available".to_string()))
    );
}

#[tokio::test]
async fn test_filter_twice_is_idempotent() {
    let api = FakeApi::new();
    FakeApi::set(
        &api.filtered,
        Reply::Ok(vec![doctor(2, "Dr. B"), doctor(4, "Dr. D")]),
    );
    let (portal, api, _ui) = create_test_portal(Role::Admin, Some("t"), api);
    let dashboard = portal.admin_dashboard();

    dashboard
        .filter_doctors_on_change(" Dr ", "AM", "")
        .await;
    let first = dashboard.view().await;
    dashboard
        .filter_doctors_on_change(" Dr ", "AM", "")
        .await;
    let second = dashboard.view().await;

    let expected = Call::FilterDoctors(DoctorFilter {
        name: Some("Dr".to_string()),
        time: Some("AM".to_string()),
        specialty: None,
    });
    assert_eq!(api.calls(), vec![expected.clone(), expected]);
    assert_eq!(first, second);
    assert_eq!(first.items.len(), 2);
}

#[tokio::test]
async fn test_filter_with_no_match_shows_filter_placeholder() {
    let api = FakeApi::with_doctors(vec![doctor(1, "Dr. A")]);
    let (portal, _api, _ui) = create_test_portal(Role::Admin, Some("t"), api);
    let dashboard = portal.admin_dashboard();

    dashboard.on_page_load().await;
    dashboard
        .filter_doctors_on_change("nobody", "", "")
        .await;

    let view = dashboard.view().await;
    assert!(view.items.is_empty());
    assert_eq!(
        view.placeholder,
        Some(Placeholder::Empty("No doctors found".to_string()))
    );
}

#[tokio::test]
async fn test_valid_form_saves_once_and_reloads_once() {
    let (portal, api, ui) = create_test_portal(Role::Admin, Some("admin-token"), FakeApi::new());
    let dashboard = portal.admin_dashboard();

    let outcome = dashboard.add_doctor(complete_form()).await;

    assert_eq!(outcome, FlowOutcome::Completed);
    let calls = api.calls();
    assert_eq!(calls.len(), 2);
    match &calls[0] {
        Call::SaveDoctor { doctor, token } => {
            assert_eq!(doctor.name, "Dr. Ada");
            assert_eq!(doctor.password.as_deref(), Some("secret"));
            assert_eq!(token, "admin-token");
        }
        other => panic!("expected save, got {:?}", other),
    }
    assert_eq!(calls[1], Call::GetDoctors);
    assert_eq!(
        ui.events(),
        vec![
            UiEvent::Alert(ADD_SUCCESS.to_string()),
            UiEvent::CloseModal(Modal::AddDoctor),
        ]
    );
}

#[tokio::test]
async fn test_incomplete_forms_make_no_calls() {
    let incomplete = vec![
        DoctorForm {
            name: "  ".to_string(),
            ..complete_form()
        },
        DoctorForm {
            email: String::new(),
            ..complete_form()
        },
        DoctorForm {
            phone: String::new(),
            ..complete_form()
        },
        DoctorForm {
            password: String::new(),
            ..complete_form()
        },
        DoctorForm {
            specialization: String::new(),
            ..complete_form()
        },
        DoctorForm {
            availability: Vec::new(),
            ..complete_form()
        },
    ];

    for form in incomplete {
        let (portal, api, ui) = create_test_portal(Role::Admin, Some("t"), FakeApi::new());
        let outcome = portal.admin_dashboard().add_doctor(form).await;

        assert_eq!(outcome, FlowOutcome::Invalid);
        assert!(api.calls().is_empty());
        assert_eq!(ui.alerts(), vec![INCOMPLETE_FORM.to_string()]);
    }
}

#[tokio::test]
async fn test_add_without_token_is_rejected() {
    let (portal, api, ui) = create_test_portal(Role::Admin, None, FakeApi::new());

    let outcome = portal.admin_dashboard().add_doctor(complete_form()).await;

    assert_eq!(outcome, FlowOutcome::Invalid);
    assert!(api.calls().is_empty());
    assert_eq!(ui.alerts(), vec![UNAUTHORIZED.to_string()]);
}

#[tokio::test]
async fn test_refused_save_keeps_modal_open() {
    let api = FakeApi::new();
    FakeApi::set(
        &api.save,
        Reply::Ok(ServiceResponse::failed("Doctor already exists")),
    );
    let (portal, api, ui) = create_test_portal(Role::Admin, Some("t"), api);

    let outcome = portal.admin_dashboard().add_doctor(complete_form()).await;

    assert_eq!(outcome, FlowOutcome::Refused);
    assert_eq!(api.calls().len(), 1);
    assert_eq!(
        ui.events(),
        vec![UiEvent::Alert(
            "Failed to add doctor: Doctor already exists".to_string()
        )]
    );
}

#[tokio::test]
async fn test_save_error_shows_generic_alert() {
    let api = FakeApi::new();
    FakeApi::set(&api.save, Reply::NetworkDown);
    let (portal, _api, ui) = create_test_portal(Role::Admin, Some("t"), api);

    let outcome = portal.admin_dashboard().add_doctor(complete_form()).await;

    assert_eq!(outcome, FlowOutcome::Failed);
    assert_eq!(ui.alerts(), vec![ADD_ERROR.to_string()]);
}

#[tokio::test]
async fn test_update_doctor_without_password() {
    let (portal, api, ui) = create_test_portal(Role::Admin, Some("t"), FakeApi::new());
    let dashboard = portal.admin_dashboard();

    let outcome = dashboard
        .update_doctor(DoctorUpdateForm {
            id: 9,
            name: "Dr. Ada".to_string(),
            email: "ada@clinic.test".to_string(),
            phone: "5550100".to_string(),
            password: String::new(),
            specialization: "Neurology".to_string(),
            availability: vec!["14:00-15:00".to_string()],
        })
        .await;

    assert_eq!(outcome, FlowOutcome::Completed);
    match &api.calls()[0] {
        Call::UpdateDoctor { doctor, .. } => {
            assert_eq!(doctor.id, Some(9));
            assert_eq!(doctor.password, None);
        }
        other => panic!("expected update, got {:?}", other),
    }
    assert!(ui
        .events()
        .contains(&UiEvent::CloseModal(Modal::EditDoctor { doctor_id: 9 })));
}

#[tokio::test]
async fn test_delete_success_removes_card_without_reload() {
    let api = FakeApi::with_doctors(vec![doctor(1, "Dr. A"), doctor(2, "Dr. B")]);
    let (portal, api, ui) = create_test_portal(Role::Admin, Some("admin-token"), api);
    let dashboard = portal.admin_dashboard();
    dashboard.on_page_load().await;
    api.clear_calls();

    let outcome = dashboard.activate_card(1).await;

    assert_eq!(outcome, Some(CardOutcome::Removed));
    assert_eq!(
        api.calls(),
        vec![Call::DeleteDoctor {
            id: 1,
            token: "admin-token".to_string()
        }]
    );
    let ids: Vec<u64> = dashboard
        .view()
        .await
        .items
        .iter()
        .map(|c| c.doctor_id())
        .collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(ui.events(), vec![UiEvent::Confirm(CONFIRM_DELETE.to_string())]);
}

#[tokio::test]
async fn test_delete_refused_keeps_card_and_alerts() {
    let api = FakeApi::with_doctors(vec![doctor(1, "Dr. A")]);
    FakeApi::set(&api.delete, Reply::Status(500));
    let (portal, api, ui) = create_test_portal(Role::Admin, Some("t"), api);
    let dashboard = portal.admin_dashboard();
    dashboard.on_page_load().await;
    api.clear_calls();

    let outcome = dashboard.activate_card(1).await;

    assert_eq!(outcome, Some(CardOutcome::Kept));
    assert_eq!(dashboard.view().await.items.len(), 1);
    assert_eq!(ui.alerts(), vec![DELETE_FAILED.to_string()]);
    // Only the delete call: no list reload.
    assert_eq!(api.calls().len(), 1);
}

#[tokio::test]
async fn test_delete_network_error_keeps_card() {
    let api = FakeApi::with_doctors(vec![doctor(1, "Dr. A")]);
    FakeApi::set(&api.delete, Reply::NetworkDown);
    let (portal, _api, ui) = create_test_portal(Role::Admin, Some("t"), api);
    let dashboard = portal.admin_dashboard();
    dashboard.on_page_load().await;

    assert_eq!(dashboard.activate_card(1).await, Some(CardOutcome::Kept));
    assert_eq!(dashboard.view().await.items.len(), 1);
    assert_eq!(ui.alerts(), vec![DELETE_ERROR.to_string()]);
}

#[tokio::test]
async fn test_delete_declined_makes_no_call() {
    let api = FakeApi::with_doctors(vec![doctor(1, "Dr. A")]);
    let (portal, api, ui) = create_test_portal(Role::Admin, Some("t"), api);
    ui.answer_confirm(false);
    let dashboard = portal.admin_dashboard();
    dashboard.on_page_load().await;
    api.clear_calls();

    assert_eq!(dashboard.activate_card(1).await, Some(CardOutcome::Declined));
    assert!(api.calls().is_empty());
    assert_eq!(dashboard.view().await.items.len(), 1);
}

#[tokio::test]
async fn test_activate_unknown_card() {
    let (portal, _api, _ui) = create_test_portal(Role::Admin, Some("t"), FakeApi::new());
    assert_eq!(portal.admin_dashboard().activate_card(42).await, None);
}
