use super::case::{Contexts, SpeedProfile};
use super::domain::{DrugPackaging, IncidentType, Mode, Scene};
use super::evaluation::CityPolicy;

/// Compute the vehicle, pursuit and drug flags that decide which rule blocks apply.
///
/// `drug_context` also opens for suspicious-person and traffic-stop incidents with no drug
/// evidence at all, so officers see drug prompts on those scenes by default.
pub fn derive_contexts(scene: &Scene) -> Contexts {
    let has_drug_ground = scene.grounds.iter().any(|ground| ground.is_drug_indicator());
    let vehicle_context = scene.mode == Mode::Vehicle
        || scene.is_incident(IncidentType::TrafficStop)
        || scene.is_incident(IncidentType::Pursuit);
    let pursuit_context = scene.is_incident(IncidentType::Pursuit);
    let drug_context = has_drug_ground
        || scene.drug_quantity_grams > 0.0
        || scene.drug_packaging != DrugPackaging::None
        || scene.is_incident(IncidentType::SuspiciousPerson)
        || scene.is_incident(IncidentType::TrafficStop);

    Contexts {
        has_drug_ground,
        vehicle_context,
        pursuit_context,
        drug_context,
    }
}

/// Local limit for the road type and how far the recorded speed exceeds it.
pub fn speed_profile(scene: &Scene, policy: &CityPolicy) -> SpeedProfile {
    let speed_limit = policy.speed_limit(scene.road_type);
    SpeedProfile {
        speed_limit,
        over_limit: (scene.speed_mph - speed_limit).max(0.0),
    }
}
