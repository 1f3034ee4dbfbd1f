use super::super::case::Gate;
use super::super::domain::IncidentType;
use super::SceneFacts;

pub(crate) const GIVE_WAY_REMINDER: &str =
    "City policy: traffic lights are usually treated as give-way when the lane is clear.";

/// Apply fixed server rules. Blocks invalidate the disposal path; warnings are advisory.
pub(crate) fn evaluate_gate(facts: &SceneFacts<'_>) -> Gate {
    let scene = facts.scene;
    let contexts = facts.contexts;
    let identity = facts.identity;
    let mut gate = Gate::default();

    let min_officers = facts.policy.min_officers_for_hostage;
    if scene.is_incident(IncidentType::Hostage) && scene.pd_on_duty < min_officers {
        gate.blocked.push(format!(
            "Hostage scene blocked: EPICAL requires at least {min_officers} PD on duty."
        ));
    }
    if scene.ehs_kidnap_attempt {
        gate.blocked
            .push("EHS kidnapping attempt blocked: not permitted by server rules.".to_string());
    }
    if scene.amber_zone && scene.scene_started_in_amber {
        gate.blocked
            .push("Scene start blocked: scenes cannot be initiated in amber zones.".to_string());
    }

    if scene.taser_hit_two {
        gate.warnings.push(
            "Two taser hits reached: subject should be treated as down/surrendered.".to_string(),
        );
    }
    if scene.medical_attempt_during_active {
        gate.warnings
            .push("Medical/respawn during active scene is not allowed.".to_string());
    }
    if contexts.pursuit_context && scene.vehicle_condition.is_heavily_damaged() {
        gate.warnings.push(
            "Pursuit realism warning: heavily damaged vehicle should not continue unrealistically."
                .to_string(),
        );
    }
    if contexts.pursuit_context && scene.pursuit_duration_min >= 25.0 {
        gate.warnings.push(
            "Pursuit duration is very long; avoid looped chase RP and force progression."
                .to_string(),
        );
    }
    if contexts.vehicle_context && facts.over_limit() >= 50.0 {
        gate.warnings.push(format!(
            "Speed is {:.0} mph over the city limit; review proportionality and public risk immediately.",
            facts.over_limit()
        ));
    }
    if contexts.vehicle_context {
        gate.warnings.push(GIVE_WAY_REMINDER.to_string());
    }

    if scene.refuses_provide_id {
        let notice = if identity.id_is_required {
            "ID refusal during an active vehicle stop: the driver must give name and address (RTA s164/s165); refusal supports escalation."
        } else if identity.offence_suspicion {
            "ID refusal with offence suspicion: consider the arrest necessity route for name and address (PACE s24(5)(a)/(b))."
        } else {
            "ID refusal noted: there is no general duty to give name or address here; do not escalate on refusal alone."
        };
        gate.warnings.push(notice.to_string());
    }
    if scene.refuses_vehicle_docs {
        let notice = if identity.active_vehicle_stop {
            "Vehicle document refusal during an active stop: licence and insurance details can be required (RTA s164/s165)."
        } else {
            "Vehicle document refusal noted: documents cannot be compelled without an active vehicle stop."
        };
        gate.warnings.push(notice.to_string());
    }
    if scene.refuses_face_covering_removal {
        let notice = if identity.face_covering_power_active {
            "Face covering refusal under an active s60AA authorisation: removal can be required and the item seized."
        } else {
            "Face covering refusal noted: no s60AA authorisation is active, so removal cannot be compelled."
        };
        gate.warnings.push(notice.to_string());
    }

    gate
}
