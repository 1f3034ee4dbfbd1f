use serde_json::json;

use super::common::*;
use crate::scene::RiskLevel;

#[test]
fn urban_speed_scores_against_city_limit() {
    let case = evaluate(json!({ "mode": "vehicle", "roadType": "urban", "speedMph": 90 }));

    assert_eq!(case.risk.speed_profile.speed_limit, 50.0);
    assert_eq!(case.risk.speed_profile.over_limit, 40.0);
    assert_eq!(factor_points(&case, "High speed over city limit"), Some(6));
    assert_eq!(factor_points(&case, "Urban speed danger"), Some(4));
    assert_eq!(case.risk.score, 11);
    assert_eq!(case.risk.level, RiskLevel::Medium);
    assert_eq!(case.risk.factors[0].label, "High speed over city limit");
}

#[test]
fn motorway_speed_below_limit_adds_nothing() {
    let case = evaluate(json!({ "mode": "vehicle", "roadType": "motorway", "speedMph": 95 }));

    assert_eq!(case.risk.speed_profile.over_limit, 0.0);
    assert!(case
        .risk
        .factors
        .iter()
        .all(|factor| !factor.label.contains("speed")));
}

#[test]
fn equal_points_keep_evaluation_order() {
    let case = evaluate(json!({
        "subjectIntoxicated": true,
        "injuryPresent": true,
        "safeguardingRisk": true
    }));

    let labels: Vec<&str> = case
        .risk
        .factors
        .iter()
        .map(|factor| factor.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Intoxication risk",
            "Injury in scene",
            "Safeguarding risk",
            "Incident type"
        ]
    );
    assert!(case
        .rationale
        .contains(&"Top risk driver: Intoxication risk (+2).".to_string()));
}

#[test]
fn identity_refusal_only_scores_when_a_power_applies() {
    let bare = evaluate(json!({ "refusesProvideId": true, "suspectedFalseIdentity": true }));
    assert_eq!(factor_points(&bare, "Identity refusal"), None);
    assert_eq!(factor_points(&bare, "Suspected false identity"), None);
    assert_eq!(bare.risk.score, 1);

    let suspect = evaluate(json!({
        "refusesProvideId": true,
        "suspectedFalseIdentity": true,
        "behavior": "fleeing"
    }));
    assert_eq!(factor_points(&suspect, "Identity refusal"), Some(2));
    assert_eq!(factor_points(&suspect, "Suspected false identity"), Some(2));

    let stopped = evaluate(json!({ "incidentType": "traffic_stop", "refusesProvideId": true }));
    assert_eq!(factor_points(&stopped, "Identity refusal"), Some(2));
}

#[test]
fn failed_stop_bonus_is_half_rounded_up_and_capped() {
    let points = |signals: u32| {
        let case = evaluate(json!({ "incidentType": "pursuit", "failedStopSignals": signals }));
        factor_points(&case, "Repeated stop signal refusal")
    };

    assert_eq!(points(0), None);
    assert_eq!(points(1), Some(1));
    assert_eq!(points(3), Some(2));
    assert_eq!(points(7), Some(4));
    assert_eq!(points(20), Some(4));
}

#[test]
fn long_fast_pursuit_stacks_duration_and_speed_bonuses() {
    let case = evaluate(json!({
        "incidentType": "pursuit",
        "pursuitDurationMin": 20,
        "speedMph": 90
    }));

    assert_eq!(factor_points(&case, "Extended pursuit"), Some(3));
    assert_eq!(factor_points(&case, "Extended high-speed pursuit risk"), Some(3));
    assert_eq!(factor_points(&case, "High speed over city limit"), Some(6));
}

#[test]
fn cash_bonus_depends_on_excess_over_ceiling() {
    let at_ceiling = evaluate(json!({ "seizedCashGbp": 10000 }));
    assert_eq!(factor_points(&at_ceiling, "Cash above city threshold"), None);
    assert_eq!(factor_points(&at_ceiling, "Large cash seizure"), None);

    let modest = evaluate(json!({ "seizedCashGbp": 20000 }));
    assert_eq!(factor_points(&modest, "Cash above city threshold"), Some(2));

    let large = evaluate(json!({ "seizedCashGbp": 40000 }));
    assert_eq!(factor_points(&large, "Large cash seizure"), Some(4));
}

#[test]
fn face_covering_refusal_needs_active_authorisation() {
    let without = evaluate(json!({ "refusesFaceCoveringRemoval": true }));
    assert_eq!(factor_points(&without, "Face covering refusal under s60AA"), None);

    let with = evaluate(json!({ "refusesFaceCoveringRemoval": true, "s60Authorized": true }));
    assert_eq!(factor_points(&with, "Face covering refusal under s60AA"), Some(2));
}

#[test]
fn drug_block_scores_type_quantity_and_packaging() {
    let case = evaluate(json!({
        "incidentType": "public_disorder",
        "drugType": "class_a",
        "drugQuantityGrams": 31,
        "drugPackaging": "bulk"
    }));

    assert_eq!(factor_points(&case, "Drug type indicator"), Some(3));
    assert_eq!(factor_points(&case, "Large quantity"), Some(4));
    assert_eq!(factor_points(&case, "Bulk packaging"), Some(4));
}

#[test]
fn drug_block_is_skipped_outside_drug_context() {
    let case = evaluate(json!({ "incidentType": "assault_report", "drugType": "class_a" }));

    assert!(!case.contexts.drug_context);
    assert_eq!(factor_points(&case, "Drug type indicator"), None);
}

#[test]
fn vehicle_condition_only_counts_in_vehicle_context() {
    let foot = evaluate(json!({ "vehicleCondition": "critical" }));
    assert_eq!(factor_points(&foot, "Critical vehicle damage"), None);

    let vehicle = evaluate(json!({ "mode": "vehicle", "vehicleCondition": "critical" }));
    assert_eq!(factor_points(&vehicle, "Critical vehicle damage"), Some(4));
}

#[test]
fn group_bonus_is_capped_at_five() {
    let small = evaluate(json!({ "groupSize": 3 }));
    assert_eq!(factor_points(&small, "Multiple subjects"), Some(2));

    let crowd = evaluate(json!({ "groupSize": 9 }));
    assert_eq!(factor_points(&crowd, "Multiple subjects"), Some(5));
}

#[test]
fn level_bands_follow_score_thresholds() {
    assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(5), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(6), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(11), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(12), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(18), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(19), RiskLevel::Critical);
}
