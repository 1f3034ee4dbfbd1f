use super::super::case::{Risk, RiskFactor, RiskLevel};
use super::super::domain::{DrugPackaging, DrugType, RoadType, VehicleCondition};
use super::config::WeightTables;
use super::SceneFacts;

/// Running total that only records factors which actually add points.
#[derive(Default)]
struct RiskTally {
    score: u32,
    factors: Vec<RiskFactor>,
}

impl RiskTally {
    fn add(&mut self, points: u32, label: &str) {
        if points == 0 {
            return;
        }
        self.score += points;
        self.factors.push(RiskFactor {
            points,
            label: label.to_string(),
        });
    }
}

pub(crate) fn calculate_risk(facts: &SceneFacts<'_>, weights: &WeightTables) -> Risk {
    let scene = facts.scene;
    let contexts = facts.contexts;
    let identity = facts.identity;
    let over_limit = facts.speed.over_limit;
    let mut tally = RiskTally::default();

    tally.add(weights.incident(scene.incident_type), "Incident type");
    tally.add(weights.behavior(scene.behavior), "Subject behavior");
    tally.add(weights.public_density(scene.public_density), "Public density");

    if scene.group_size > 1 {
        tally.add((scene.group_size - 1).min(5), "Multiple subjects");
    }

    if scene.weapon_seen {
        tally.add(7, "Weapon observed");
    }
    if scene.active_shots {
        tally.add(9, "Active shots");
    }
    if scene.known_violence_marker {
        tally.add(3, "Known violence marker");
    }
    if scene.subject_intoxicated {
        tally.add(2, "Intoxication risk");
    }
    if scene.injury_present {
        tally.add(2, "Injury in scene");
    }
    if scene.safeguarding_risk {
        tally.add(2, "Safeguarding risk");
    }

    if identity.id_is_required || identity.offence_suspicion {
        if scene.refuses_provide_id {
            tally.add(2, "Identity refusal");
        }
        if scene.suspected_false_identity {
            tally.add(2, "Suspected false identity");
        }
    }

    if contexts.vehicle_context {
        tally.add(weights.traffic_density(scene.traffic_density), "Traffic density");

        if over_limit >= 60.0 {
            tally.add(8, "Extreme speed over city limit");
        } else if over_limit >= 40.0 {
            tally.add(6, "High speed over city limit");
        } else if over_limit >= 25.0 {
            tally.add(4, "Elevated speed over city limit");
        } else if over_limit >= 10.0 {
            tally.add(2, "Speed over city limit");
        }

        match scene.road_type {
            RoadType::Urban if over_limit >= 30.0 => tally.add(4, "Urban speed danger"),
            RoadType::Rural if over_limit >= 40.0 => tally.add(2, "Rural speed danger"),
            RoadType::Motorway if over_limit >= 20.0 => tally.add(1, "Motorway speed pressure"),
            _ => {}
        }

        match scene.vehicle_condition {
            VehicleCondition::Smoking => tally.add(1, "Vehicle damage"),
            VehicleCondition::BlownTires => tally.add(3, "Blown tires"),
            VehicleCondition::Critical => tally.add(4, "Critical vehicle damage"),
            VehicleCondition::Normal => {}
        }

        if scene.vehicle_antisocial {
            tally.add(3, "Anti-social vehicle use");
        }
        if scene.prior_s59_warning {
            tally.add(2, "Prior s59 warning");
        }
        if scene.refuses_vehicle_docs && identity.active_vehicle_stop {
            tally.add(2, "Vehicle document refusal");
        }
    }

    if contexts.pursuit_context {
        let minutes = scene.pursuit_duration_min;
        if minutes >= 25.0 {
            tally.add(5, "Prolonged pursuit");
        } else if minutes >= 15.0 {
            tally.add(3, "Extended pursuit");
        } else if minutes >= 8.0 {
            tally.add(2, "Sustained pursuit");
        }

        if scene.failed_stop_signals >= 1 {
            tally.add(
                scene.failed_stop_signals.div_ceil(2).min(4),
                "Repeated stop signal refusal",
            );
        }

        if minutes >= 20.0 && over_limit >= 40.0 {
            tally.add(3, "Extended high-speed pursuit risk");
        }
    }

    if contexts.drug_context {
        match scene.drug_type {
            DrugType::Cannabis => tally.add(1, "Drug type indicator"),
            DrugType::ClassB => tally.add(2, "Drug type indicator"),
            DrugType::ClassA => tally.add(3, "Drug type indicator"),
            DrugType::Unknown => {}
        }

        let grams = scene.drug_quantity_grams;
        if grams > 30.0 {
            tally.add(4, "Large quantity");
        } else if grams > 10.0 {
            tally.add(3, "Significant quantity");
        } else if grams > 2.0 {
            tally.add(2, "Moderate quantity");
        } else if grams > 0.0 {
            tally.add(1, "Small quantity");
        }

        match scene.drug_packaging {
            DrugPackaging::SplitBags => tally.add(2, "Split packaging"),
            DrugPackaging::DealerPack => tally.add(3, "Dealer-style packaging"),
            DrugPackaging::Bulk => tally.add(4, "Bulk packaging"),
            DrugPackaging::None | DrugPackaging::Personal => {}
        }
    }

    if facts.cash_above_ceiling() {
        let excess = scene.seized_cash_gbp - facts.policy.cash_okay_max_gbp;
        if excess > facts.policy.cash_large_excess_gbp {
            tally.add(4, "Large cash seizure");
        } else {
            tally.add(2, "Cash above city threshold");
        }
    }

    if scene.refuses_face_covering_removal && identity.face_covering_power_active {
        tally.add(2, "Face covering refusal under s60AA");
    }

    let RiskTally { score, mut factors } = tally;
    // Stable: equal points keep insertion order, so the top driver is deterministic.
    factors.sort_by(|a, b| b.points.cmp(&a.points));

    Risk {
        score,
        level: RiskLevel::from_score(score),
        factors,
        speed_profile: facts.speed,
    }
}
