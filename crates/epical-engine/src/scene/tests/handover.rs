use serde_json::json;

use super::common::*;
use crate::scene::{build_handover_log, HandoverForm};

#[test]
fn suggested_form_prefills_cannabis_and_cash_outcomes() {
    let case = evaluate(json!({
        "location": "Vespucci Beach",
        "drugType": "cannabis",
        "drugQuantityGrams": 10,
        "drugPackaging": "personal",
        "seizedCashGbp": 5000
    }));
    let form = HandoverForm::suggested(&case);

    assert_eq!(form.arrest_location.as_deref(), Some("Vespucci Beach"));
    assert_eq!(form.final_jail_months, Some(0.0));
    assert_eq!(form.initial_fine, Some(2500.0));
    assert_eq!(form.final_fine, Some(2500.0));
    assert_eq!(
        form.charges_text.as_deref(),
        Some("Simple possession of controlled substance")
    );
    assert!(form
        .incident_summary
        .as_deref()
        .is_some_and(|summary| summary.contains("Incident type recorded as suspicious person.")));
}

#[test]
fn suggested_form_leaves_fine_blank_above_cash_ceiling() {
    let case = evaluate(json!({ "seizedCashGbp": 30000 }));
    let form = HandoverForm::suggested(&case);

    assert_eq!(form.initial_fine, None);
    assert_eq!(form.final_fine, None);
    assert_eq!(form.final_jail_months, None);
}

#[test]
fn log_follows_report_layout_with_defaults() {
    let engine = engine();
    let case = engine.evaluate(&json!({
        "location": "Legion Square",
        "officer": { "name": "Sgt Hale", "collarNumber": "1234" },
        "seizedCashGbp": 5000
    }));
    let form = HandoverForm::suggested(&case);
    let log = build_handover_log(&case, &form, engine.clock());

    assert!(log.starts_with(
        "ARREST DETAILS\nDate/Time: [01/06/25 14:30]\nLocation: Legion Square\nArresting Officer: Sgt Hale (1234)\n"
    ));
    let headings: Vec<&str> = log
        .lines()
        .filter(|line| {
            !line.is_empty()
                && line
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c == ' ' || c == '/' || c == '(' || c == ')')
        })
        .collect();
    assert_eq!(
        headings,
        vec![
            "ARREST DETAILS",
            "INCIDENT SUMMARY",
            "ARREST REASONS",
            "LEGAL REFERENCES",
            "OFFENCES / CHARGES",
            "DISPOSAL METHOD(S)",
            "CUSTODY DETAILS",
            "EVIDENCE REVIEW",
            "CAUTION",
            "OUTCOME",
            "CITY POLICY NOTES",
            "ADDITIONAL NOTES",
        ]
    );
    assert!(log.contains("- None recorded from action card."));
    assert!(log.contains("Initial outcome, Fine £2,500 Jail 0 months, reduced to Fine £2,500 Jail 0 months."));
    assert!(log.contains("- Cash <= £10,000 is generally acceptable within reason."));
    assert!(log.contains("1. No Further Action (NFA) | Reason:"));
    assert!(log.ends_with("ADDITIONAL NOTES\nNone entered."));
}

#[test]
fn form_values_override_case_defaults() {
    let engine = engine();
    let case = engine.evaluate(&json!({ "behavior": "fleeing", "weaponSeen": true }));
    let form = HandoverForm {
        arrest_time: Some("[02/06/25 09:15]".to_string()),
        arresting_officer: Some("PC Reyes".to_string()),
        arrest_reason_override: Some("Breach of the peace".to_string()),
        charges_text: Some("   ".to_string()),
        caution_given: true,
        custody_minutes: Some(45.0),
        ..HandoverForm::default()
    };
    let log = build_handover_log(&case, &form, engine.clock());

    assert!(log.contains("Date/Time: [02/06/25 09:15]"));
    assert!(log.contains("Arresting Officer: PC Reyes"));
    assert!(log.contains("ARREST REASONS\n- Breach of the peace\n\n"));
    assert!(!log.contains("- Subject actively fleeing"));
    assert!(log.contains(&format!("OFFENCES / CHARGES\n{}\n", case.likely_offences.join("; "))));
    assert!(log.contains("Caution delivered: Yes"));
    assert!(log.contains("Time in custody: 45 minutes."));
}

#[test]
fn unknown_officer_without_name() {
    let engine = engine();
    let case = engine.evaluate(&json!({}));
    let log = build_handover_log(&case, &HandoverForm::default(), engine.clock());

    assert!(log.contains("Location: Unknown"));
    assert!(log.contains("Arresting Officer: Unknown"));
    assert!(log.contains("OFFENCES / CHARGES\nNo offence text entered.\n"));
}

#[test]
fn form_posts_with_string_values_are_read_leniently() {
    let form: HandoverForm = serde_json::from_value(json!({
        "custodyMinutes": "30",
        "cautionGiven": "yes",
        "initialFine": "500",
        "finalFine": "soon",
        "finalJailMonths": "",
        "initialJailMonths": null
    }))
    .expect("form-style values parse");

    assert_eq!(form.custody_minutes, Some(30.0));
    assert!(form.caution_given);
    assert_eq!(form.initial_fine, Some(500.0));
    assert_eq!(form.final_fine, Some(0.0));
    assert_eq!(form.final_jail_months, Some(0.0));
    assert_eq!(form.initial_jail_months, None);

    let engine = engine();
    let case = engine.evaluate(&json!({ "behavior": "fleeing" }));
    let log = build_handover_log(&case, &form, engine.clock());

    assert!(log.contains("Time in custody: 30 minutes."));
    assert!(log.contains("Caution delivered: Yes"));
    assert!(log.contains("Initial outcome, Fine £500 Jail 0 months, reduced to Fine £0 Jail 0 months."));
}

#[test]
fn caution_flag_ignores_unticked_values() {
    for value in [json!("no"), json!(""), json!(0), json!(false), json!(null)] {
        let form: HandoverForm =
            serde_json::from_value(json!({ "cautionGiven": value })).expect("form parses");
        assert!(!form.caution_given, "{value}");
    }
    let form: HandoverForm =
        serde_json::from_value(json!({ "cautionGiven": "ON" })).expect("form parses");
    assert!(form.caution_given);
}
