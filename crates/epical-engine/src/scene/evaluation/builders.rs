use super::super::case::{Grounds, GroundsLevel, Risk, RiskLevel};
use super::super::domain::{Behavior, Density, Ground, IncidentType, RoadType};
use super::SceneFacts;

/// Over-limit speed at which driving is treated as dangerous rather than merely fast.
const DANGEROUS_OVER_LIMIT_MPH: f64 = 40.0;

/// Append `value` unless an identical entry is already present, keeping first-seen order.
pub(crate) fn push_unique(list: &mut Vec<String>, value: impl Into<String>) {
    let value = value.into();
    if !list.contains(&value) {
        list.push(value);
    }
}

fn dangerous_speed(facts: &SceneFacts<'_>) -> bool {
    facts.contexts.vehicle_context && facts.over_limit() >= DANGEROUS_OVER_LIMIT_MPH
}

pub(crate) fn arrest_reasons(facts: &SceneFacts<'_>, risk: &Risk) -> Vec<String> {
    let scene = facts.scene;
    let contexts = facts.contexts;
    let mut reasons = Vec::new();

    match scene.behavior {
        Behavior::Fleeing => push_unique(&mut reasons, "Subject actively fleeing"),
        Behavior::Aggressive => push_unique(&mut reasons, "Aggressive threat behavior"),
        Behavior::Compliant | Behavior::Evasive => {}
    }
    if scene.active_shots {
        push_unique(&mut reasons, "Active firearms discharge risk");
    }
    if scene.weapon_seen {
        push_unique(&mut reasons, "Weapon visible on subject");
    }
    if scene.has_ground(Ground::StolenVehicleMarker) {
        push_unique(&mut reasons, "Vehicle flagged as potentially stolen");
    }
    if contexts.pursuit_context && scene.failed_stop_signals >= 2 {
        push_unique(&mut reasons, "Repeated refusal to stop for police");
    }
    if contexts.pursuit_context && facts.over_limit() >= DANGEROUS_OVER_LIMIT_MPH {
        push_unique(&mut reasons, "Dangerous pursuit driving threshold met");
    }
    if facts.grounds.drug_grounded && facts.supply_indicators() {
        push_unique(&mut reasons, "Drug supply indicators present");
    }
    if facts.identity.offence_suspicion && facts.identity_doubt() {
        push_unique(&mut reasons, "Identity cannot be confirmed for an offence suspect");
    }
    if risk.level == RiskLevel::Critical {
        push_unique(
            &mut reasons,
            "Critical threat level requiring secure containment",
        );
    }

    reasons
}

pub(crate) fn likely_offences(facts: &SceneFacts<'_>) -> Vec<String> {
    let scene = facts.scene;
    let contexts = facts.contexts;
    let identity = facts.identity;
    let mut offences = Vec::new();

    if scene.weapon_seen || scene.is_incident(IncidentType::WeaponSighting) {
        push_unique(
            &mut offences,
            "Possession of offensive weapon / bladed article (context dependent)",
        );
    }
    if dangerous_speed(facts) {
        push_unique(
            &mut offences,
            "Dangerous driving / careless driving (speed + road conditions dependent)",
        );
    } else if contexts.vehicle_context && facts.over_limit() > 0.0 {
        push_unique(&mut offences, "Exceeding the city speed limit");
    }
    if contexts.pursuit_context && scene.failed_stop_signals >= 1 {
        push_unique(&mut offences, "Failing to stop for police");
    }
    if contexts.vehicle_context && scene.vehicle_antisocial {
        push_unique(&mut offences, "Anti-social use of a motor vehicle");
    }
    if facts.grounds.drug_grounded {
        if facts.supply_indicators() {
            push_unique(
                &mut offences,
                "Possession with intent to supply (drug indicators present)",
            );
        } else {
            push_unique(&mut offences, "Simple possession of controlled substance");
        }
    }
    if scene.active_shots {
        push_unique(&mut offences, "Firearms-related offences (scene-specific)");
    }
    if scene.refuses_vehicle_docs && identity.active_vehicle_stop {
        push_unique(&mut offences, "Failing to produce driving documents");
    }
    if scene.suspected_false_identity && identity.offence_suspicion {
        push_unique(
            &mut offences,
            "Providing false details to police (obstruction, context dependent)",
        );
    }
    if scene.refuses_face_covering_removal && identity.face_covering_power_active {
        push_unique(
            &mut offences,
            "Failing to remove a face covering when required",
        );
    }
    if facts.cash_above_ceiling() {
        push_unique(
            &mut offences,
            "Possession of criminal property (unexplained cash above city threshold)",
        );
    }

    offences
}

pub(crate) fn legal_sections(facts: &SceneFacts<'_>, arrest_reasons: &[String]) -> Vec<String> {
    let scene = facts.scene;
    let contexts = facts.contexts;
    let identity = facts.identity;
    let mut sections = Vec::new();

    if contexts.vehicle_context {
        push_unique(&mut sections, "RTA s163 - Power to stop vehicle");
        push_unique(&mut sections, "RTA s165 - Require licence/insurance details");
    }
    if facts.grounds.level != GroundsLevel::None
        || scene.weapon_seen
        || scene.is_incident(IncidentType::WeaponSighting)
    {
        push_unique(&mut sections, "PACE s1 - Stop and search (grounds required)");
    }
    if facts.grounds.drug_grounded {
        push_unique(&mut sections, "Misuse of Drugs Act s23 - Drug search powers");
    }
    if scene.s60_authorized {
        push_unique(&mut sections, "CJPOA s60 - Authorised no-suspicion search area");
    }
    if scene.refuses_face_covering_removal && identity.face_covering_power_active {
        push_unique(&mut sections, "CJPOA s60AA - Removal of face coverings");
    }
    if contexts.vehicle_context && scene.subject_intoxicated {
        push_unique(&mut sections, "RTA s5A - Drug driving reference path");
    }
    if contexts.vehicle_context
        && (scene.vehicle_antisocial
            || scene.prior_s59_warning
            || (scene.road_type != RoadType::Motorway
                && facts.over_limit() >= DANGEROUS_OVER_LIMIT_MPH))
    {
        push_unique(
            &mut sections,
            "Police Reform Act s59 - Vehicle warning/seizure route",
        );
    }
    if dangerous_speed(facts) {
        push_unique(&mut sections, "RTA s2 - Dangerous driving reference");
    }
    if identity.active_vehicle_stop && (scene.refuses_provide_id || scene.refuses_vehicle_docs) {
        push_unique(
            &mut sections,
            "RTA s164 - Driver to give name, address and documents",
        );
    }
    if facts.cash_above_ceiling() {
        push_unique(&mut sections, "POCA s294 - Seizure of cash");
    }
    if !arrest_reasons.is_empty() {
        push_unique(&mut sections, "PACE s24 - Arrest necessity");
        push_unique(&mut sections, "PACE s32 - Post-arrest search");
    }

    sections
}

pub(crate) fn immediate_actions(facts: &SceneFacts<'_>, risk: &Risk) -> Vec<String> {
    let scene = facts.scene;
    let contexts = facts.contexts;
    let mut actions = vec![
        "Anchor scene facts: exact location, timestamp, subject count, BWV narrative.".to_string(),
        "Issue clear commands and de-escalate before force where safe.".to_string(),
    ];

    if matches!(facts.grounds.level, GroundsLevel::None | GroundsLevel::Weak) {
        push_unique(
            &mut actions,
            "Build articulable grounds before intrusive powers unless immediate risk overrides.",
        );
    }
    if risk.level.is_high_or_critical() {
        push_unique(
            &mut actions,
            "Request backup now and move to containment posture.",
        );
    }
    if scene.weapon_seen || scene.active_shots {
        push_unique(
            &mut actions,
            "Prioritize public shielding, cover, and threat isolation.",
        );
    }
    if contexts.vehicle_context {
        push_unique(
            &mut actions,
            "Control stop geometry and occupant positioning before engagement.",
        );
    }
    if contexts.pursuit_context {
        push_unique(
            &mut actions,
            "Push regular pursuit updates: speed, direction, road type, and risk changes.",
        );
        if scene.pursuit_duration_min >= 15.0 {
            push_unique(
                &mut actions,
                "Force progression: coordinated containment, stinger plan, or tactical stop option.",
            );
        }
    }
    if contexts.drug_context && facts.grounds.drug_grounded {
        push_unique(
            &mut actions,
            "Secure drugs evidence chain: quantity estimate, packaging, location found.",
        );
    }
    if facts.identity_doubt() {
        push_unique(
            &mut actions,
            "Verify identity through records checks before relying on volunteered details.",
        );
    }
    if facts.cash_above_ceiling() {
        push_unique(
            &mut actions,
            "Count and bag seized cash with a witnessing officer; record denominations.",
        );
    }

    actions
}

pub(crate) fn tactical_actions(facts: &SceneFacts<'_>, risk: &Risk) -> Vec<String> {
    let scene = facts.scene;
    let contexts = facts.contexts;
    let mut tactical = Vec::new();

    if dangerous_speed(facts) {
        push_unique(
            &mut tactical,
            "Use advanced units/interceptors and avoid solo high-speed interventions.",
        );
    }
    if contexts.vehicle_context && scene.traffic_density == Density::High {
        push_unique(
            &mut tactical,
            "Adjust route strategy for public safety in dense traffic.",
        );
    }
    if contexts.pursuit_context && scene.pursuit_duration_min >= 20.0 {
        push_unique(
            &mut tactical,
            "Escalate command oversight to avoid endless chase loop.",
        );
    }
    if risk.level == RiskLevel::Critical {
        push_unique(
            &mut tactical,
            "Treat as critical incident with clear role assignment and hard perimeter.",
        );
    }
    if scene.is_incident(IncidentType::Hostage) {
        push_unique(
            &mut tactical,
            "Open negotiation line, preserve life, and avoid rushed assault decisions.",
        );
    }

    if tactical.is_empty() {
        tactical.push(
            "Maintain standard officer safety spacing and controlled communication.".to_string(),
        );
    }

    tactical
}

pub(crate) fn evidence_checklist(facts: &SceneFacts<'_>) -> Vec<String> {
    let scene = facts.scene;
    let contexts = facts.contexts;
    let mut evidence: Vec<String> = [
        "Exact timeline with location and unit arrival sequence.",
        "Specific behavior quotes/actions (avoid vague language).",
        "Grounds narrative written as observable facts.",
        "BWV and witness references linked to timeline.",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();

    if contexts.vehicle_context {
        push_unique(
            &mut evidence,
            "Vehicle details: plate, model, condition, occupant map.",
        );
        push_unique(
            &mut evidence,
            "Speed estimate source, road type, and traffic density at key moments.",
        );
    }
    if contexts.pursuit_context {
        push_unique(
            &mut evidence,
            "Pursuit log: start time, duration, failed stop signals, route changes.",
        );
    }
    if contexts.drug_context && facts.grounds.drug_grounded {
        push_unique(
            &mut evidence,
            "Drug details: type estimate, quantity (g), packaging, recovery location.",
        );
    }
    if facts.cash_above_ceiling() {
        push_unique(
            &mut evidence,
            "Cash details: amount, denominations, storage, and the explanation given.",
        );
    }
    if facts.identity_doubt() {
        push_unique(
            &mut evidence,
            "Identity details given, checks run, and refusal wording verbatim.",
        );
    }
    if scene.taser_hit_two {
        push_unique(
            &mut evidence,
            "Taser cycle count and post-deployment subject state.",
        );
    }

    evidence
}

pub(crate) fn rationale(risk: &Risk, grounds: &Grounds) -> Vec<String> {
    let mut notes = vec![
        "Server rule gates are applied before tactical or legal suggestions.".to_string(),
        "Risk classification is score-based and deterministic (no AI dependency).".to_string(),
        grounds.summary.clone(),
    ];
    if let Some(top) = risk.factors.first() {
        notes.push(format!(
            "Top risk driver: {} (+{}).",
            top.label, top.points
        ));
    }
    notes.push("Use this as RP support only, not real legal advice.".to_string());
    notes
}
