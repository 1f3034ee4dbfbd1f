use super::super::case::{GroundsLevel, NecessityCode, NecessityItem};
use super::super::domain::{Behavior, Ground};
use super::SceneFacts;

/// Walk the IDCOPPLAN mnemonic in order and keep the codes the scene supports.
pub(crate) fn build_necessity_checklist(facts: &SceneFacts<'_>) -> Vec<NecessityItem> {
    NecessityCode::ordered()
        .into_iter()
        .filter(|code| necessity_applies(*code, facts))
        .map(NecessityItem::from_code)
        .collect()
}

fn necessity_applies(code: NecessityCode, facts: &SceneFacts<'_>) -> bool {
    let scene = facts.scene;
    let identity = facts.identity;
    let identity_doubt = facts.identity_doubt();

    match code {
        NecessityCode::I => {
            identity.offence_suspicion
                && (matches!(
                    facts.grounds.level,
                    GroundsLevel::Moderate | GroundsLevel::Strong
                ) || facts.grounds.drug_grounded
                    || scene.weapon_seen)
        }
        NecessityCode::D => scene.behavior == Behavior::Fleeing || scene.failed_stop_signals > 0,
        NecessityCode::C => scene.safeguarding_risk,
        NecessityCode::O => scene.highway_obstruction,
        NecessityCode::P => {
            scene.weapon_seen
                || scene.active_shots
                || scene.injury_present
                || scene.behavior == Behavior::Aggressive
                || scene.known_violence_marker
        }
        NecessityCode::P2 => scene.public_indecency,
        NecessityCode::L => {
            scene.property_damage
                || scene.has_ground(Ground::StolenVehicleMarker)
                || scene.vehicle_antisocial
        }
        NecessityCode::A => identity.offence_suspicion && identity_doubt,
        NecessityCode::N => {
            (identity.offence_suspicion || identity.id_is_required) && identity_doubt
        }
    }
}
