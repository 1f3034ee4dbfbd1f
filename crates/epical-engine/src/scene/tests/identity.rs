use serde_json::json;

use super::common::*;
use crate::scene::{Case, NecessityCode};

fn codes(case: &Case) -> Vec<NecessityCode> {
    case.necessity_checklist
        .iter()
        .map(|item| item.code)
        .collect()
}

#[test]
fn traffic_stop_engages_driver_duties() {
    let case = evaluate(json!({ "incidentType": "traffic_stop" }));
    let identity = &case.identity_context;

    assert!(identity.active_vehicle_stop);
    assert!(identity.id_is_required);
    assert!(identity.vehicle_docs_required);
    assert!(!identity.offence_suspicion);
    assert!(identity.active_vehicle_stop_basis.starts_with("Active vehicle stop"));
    assert!(identity.id_basis.starts_with("RTA s164/s165"));
}

#[test]
fn vehicle_mode_alone_is_not_a_stop() {
    let case = evaluate(json!({ "mode": "vehicle" }));
    let identity = &case.identity_context;

    assert!(case.contexts.vehicle_context);
    assert!(!identity.active_vehicle_stop);
    assert!(!identity.id_is_required);
    assert_eq!(
        identity.id_basis,
        "No general duty to give name or address without an active vehicle stop."
    );
}

#[test]
fn speeding_makes_the_driver_a_suspect() {
    let case = evaluate(json!({ "mode": "vehicle", "speedMph": 60 }));

    assert!(case.identity_context.active_vehicle_stop);
    assert!(case.identity_context.offence_suspicion);
}

#[test]
fn refusal_at_stop_needs_name_but_not_address() {
    let case = evaluate(json!({ "incidentType": "traffic_stop", "refusesProvideId": true }));
    assert_eq!(codes(&case), vec![NecessityCode::N]);
}

#[test]
fn weapon_sighting_supports_investigation_and_injury() {
    let case = evaluate(json!({ "weaponSeen": true }));
    assert_eq!(codes(&case), vec![NecessityCode::I, NecessityCode::P]);
}

#[test]
fn checklist_keeps_mnemonic_order() {
    let case = evaluate(json!({
        "behavior": "fleeing",
        "safeguardingRisk": true,
        "publicIndecency": true,
        "propertyDamage": true,
        "highwayObstruction": true,
        "refusesProvideId": true
    }));

    assert_eq!(
        codes(&case),
        vec![
            NecessityCode::D,
            NecessityCode::C,
            NecessityCode::O,
            NecessityCode::P2,
            NecessityCode::L,
            NecessityCode::A,
            NecessityCode::N,
        ]
    );
    assert_eq!(case.quick_reference.necessity_codes, "D, C, O, P, L, A, N");
}

#[test]
fn s60_authorisation_activates_face_covering_power() {
    let case = evaluate(json!({ "s60Authorized": true }));

    assert!(case.identity_context.face_covering_power_active);
    assert!(case
        .identity_context
        .face_covering_basis
        .starts_with("CJPOA s60AA"));
}

#[test]
fn excess_cash_alone_raises_suspicion() {
    let within = evaluate(json!({ "seizedCashGbp": 10000 }));
    assert!(!within.identity_context.offence_suspicion);

    let above = evaluate(json!({ "seizedCashGbp": 10001 }));
    assert!(above.identity_context.offence_suspicion);
}
