use serde_json::json;

use super::common::*;
use crate::scene::{CityPolicy, EngineConfig};

fn has_warning(case: &crate::scene::Case, fragment: &str) -> bool {
    case.gate
        .warnings
        .iter()
        .any(|warning| warning.contains(fragment))
}

#[test]
fn understaffed_hostage_blocks_and_resets_scene() {
    let case = evaluate(json!({ "incidentType": "hostage", "pdOnDuty": 3 }));

    assert_eq!(
        case.gate.blocked,
        vec!["Hostage scene blocked: EPICAL requires at least 4 PD on duty.".to_string()]
    );
    assert_eq!(
        disposal_methods(&case),
        ["Scene Reset (Rule Block)", "Supervisor Review"]
    );
}

#[test]
fn staffed_hostage_is_not_blocked() {
    let case = evaluate(json!({ "incidentType": "hostage", "pdOnDuty": 4 }));
    assert!(!case.gate.is_blocked());
}

#[test]
fn hostage_minimum_follows_city_policy() {
    let config = EngineConfig {
        policy: CityPolicy {
            min_officers_for_hostage: 6,
            ..CityPolicy::default()
        },
        ..EngineConfig::default()
    };
    let case = engine_with(config).evaluate(&json!({ "incidentType": "hostage", "pdOnDuty": 5 }));

    assert_eq!(case.gate.blocked.len(), 1);
    assert!(case.gate.blocked[0].contains("at least 6 PD"));
}

#[test]
fn ehs_kidnap_attempt_is_blocked() {
    let case = evaluate(json!({ "ehsKidnapAttempt": true }));
    assert!(case.gate.blocked[0].starts_with("EHS kidnapping attempt blocked"));
}

#[test]
fn amber_zone_blocks_only_when_scene_started_there() {
    let passing = evaluate(json!({ "amberZone": true }));
    assert!(!passing.gate.is_blocked());

    let started = evaluate(json!({ "amberZone": true, "sceneStartedInAmber": true }));
    assert_eq!(
        started.gate.blocked,
        vec!["Scene start blocked: scenes cannot be initiated in amber zones.".to_string()]
    );
}

#[test]
fn bare_identity_refusal_gets_the_no_duty_notice() {
    let case = evaluate(json!({ "refusesProvideId": true }));

    assert!(!case.identity_context.id_is_required);
    assert!(has_warning(&case, "there is no general duty to give name or address"));
    assert!(!has_warning(&case, "RTA s164/s165"));
    assert!(!has_warning(&case, "PACE s24(5)"));
}

#[test]
fn identity_refusal_at_a_traffic_stop_supports_escalation() {
    let case = evaluate(json!({ "incidentType": "traffic_stop", "refusesProvideId": true }));

    assert!(case.identity_context.id_is_required);
    assert!(has_warning(&case, "the driver must give name and address (RTA s164/s165)"));
}

#[test]
fn identity_refusal_by_a_suspect_points_to_arrest_necessity() {
    let case = evaluate(json!({ "behavior": "fleeing", "refusesProvideId": true }));

    assert!(!case.identity_context.id_is_required);
    assert!(case.identity_context.offence_suspicion);
    assert!(has_warning(&case, "PACE s24(5)(a)/(b)"));
}

#[test]
fn document_and_face_covering_notices_track_powers() {
    let on_foot = evaluate(json!({
        "refusesVehicleDocs": true,
        "refusesFaceCoveringRemoval": true
    }));
    assert!(has_warning(&on_foot, "documents cannot be compelled"));
    assert!(has_warning(&on_foot, "removal cannot be compelled"));

    let powered = evaluate(json!({
        "incidentType": "traffic_stop",
        "refusesVehicleDocs": true,
        "refusesFaceCoveringRemoval": true,
        "s60Authorized": true
    }));
    assert!(has_warning(&powered, "Vehicle document refusal during an active stop"));
    assert!(has_warning(&powered, "active s60AA authorisation"));
}

#[test]
fn give_way_reminder_only_applies_to_vehicle_scenes() {
    let foot = evaluate(json!({}));
    assert!(!has_warning(&foot, "give-way"));

    let vehicle = evaluate(json!({ "mode": "vehicle" }));
    assert!(has_warning(&vehicle, "traffic lights are usually treated as give-way"));
}

#[test]
fn speed_warning_starts_fifty_over_the_limit() {
    let under = evaluate(json!({ "mode": "vehicle", "speedMph": 99 }));
    assert!(!has_warning(&under, "mph over the city limit"));

    let over = evaluate(json!({ "mode": "vehicle", "speedMph": 100 }));
    assert!(has_warning(
        &over,
        "Speed is 50 mph over the city limit; review proportionality and public risk immediately."
    ));
}

#[test]
fn pursuit_realism_warnings() {
    let case = evaluate(json!({
        "incidentType": "pursuit",
        "vehicleCondition": "blown_tires",
        "pursuitDurationMin": 25
    }));

    assert!(has_warning(&case, "heavily damaged vehicle"));
    assert!(has_warning(&case, "avoid looped chase RP"));
    assert!(!case.gate.is_blocked());
}

#[test]
fn taser_and_medical_flags_warn_without_blocking() {
    let case = evaluate(json!({ "taserHitTwo": true, "medicalAttemptDuringActive": true }));

    assert_eq!(
        case.gate.warnings,
        vec![
            "Two taser hits reached: subject should be treated as down/surrendered.".to_string(),
            "Medical/respawn during active scene is not allowed.".to_string(),
        ]
    );
    assert!(!case.gate.is_blocked());
}
