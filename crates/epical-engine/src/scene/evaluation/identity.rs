use super::super::case::{Contexts, Grounds, GroundsLevel, IdentityContext, SpeedProfile};
use super::super::domain::{Behavior, IncidentType, Scene};
use super::config::CityPolicy;

const STOP_ACTIVE: &str =
    "Active vehicle stop: RTA s163 requires the driver to stop for a constable in uniform.";
const STOP_INACTIVE: &str = "No active vehicle stop: road traffic stop powers are not engaged.";
const SUSPICION_PRESENT: &str =
    "Reasonable suspicion of an offence is articulated from the recorded facts.";
const SUSPICION_ABSENT: &str =
    "No offence suspicion is articulated yet; identity powers cannot rest on refusal alone.";
const ID_REQUIRED: &str =
    "RTA s164/s165: a driver stopped by police must give name, address and date of birth.";
const ID_NOT_REQUIRED: &str =
    "No general duty to give name or address without an active vehicle stop.";
const DOCS_REQUIRED: &str =
    "RTA s164: driving licence and insurance details can be required from the driver.";
const DOCS_NOT_REQUIRED: &str =
    "Vehicle documents can only be required from a driver during an active vehicle stop.";
const FACE_POWER_ACTIVE: &str =
    "CJPOA s60AA: an authorisation is active, so removal of face coverings can be required.";
const FACE_POWER_INACTIVE: &str =
    "No s60AA authorisation is active; removal of a face covering cannot be compelled.";

fn basis(flag: bool, when_true: &str, when_false: &str) -> String {
    if flag { when_true } else { when_false }.to_string()
}

pub(crate) fn assess_identity(
    scene: &Scene,
    contexts: &Contexts,
    grounds: &Grounds,
    speed: &SpeedProfile,
    policy: &CityPolicy,
) -> IdentityContext {
    let active_vehicle_stop = contexts.vehicle_context
        && (scene.vehicle_stopped
            || scene.is_incident(IncidentType::TrafficStop)
            || scene.is_incident(IncidentType::Pursuit)
            || scene.failed_stop_signals > 0
            || speed.over_limit > 0.0);

    let vehicle_offence = contexts.vehicle_context
        && (speed.over_limit > 0.0
            || scene.failed_stop_signals > 0
            || scene.vehicle_antisocial
            || (scene.refuses_vehicle_docs && active_vehicle_stop));

    let offence_suspicion = grounds.level != GroundsLevel::None
        || scene.weapon_seen
        || scene.active_shots
        || matches!(scene.behavior, Behavior::Fleeing | Behavior::Aggressive)
        || vehicle_offence
        || (contexts.drug_context && scene.has_drug_evidence())
        || policy.cash_above_ceiling(scene.seized_cash_gbp);

    let id_is_required = active_vehicle_stop;
    let vehicle_docs_required = active_vehicle_stop;
    let face_covering_power_active = scene.s60_authorized;

    IdentityContext {
        active_vehicle_stop,
        active_vehicle_stop_basis: basis(active_vehicle_stop, STOP_ACTIVE, STOP_INACTIVE),
        offence_suspicion,
        offence_suspicion_basis: basis(offence_suspicion, SUSPICION_PRESENT, SUSPICION_ABSENT),
        id_is_required,
        id_basis: basis(id_is_required, ID_REQUIRED, ID_NOT_REQUIRED),
        vehicle_docs_required,
        vehicle_docs_basis: basis(vehicle_docs_required, DOCS_REQUIRED, DOCS_NOT_REQUIRED),
        face_covering_power_active,
        face_covering_basis: basis(
            face_covering_power_active,
            FACE_POWER_ACTIVE,
            FACE_POWER_INACTIVE,
        ),
    }
}
