use serde::{Deserialize, Serialize};

use super::super::domain::{Behavior, Density, DrugType, Ground, IncidentType, RoadType};

/// Read-only configuration injected into the engine: city policy dials plus weight tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub policy: CityPolicy,
    pub weights: WeightTables,
}

/// City-specific thresholds that shape speed, drug, cash, and staffing rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CityPolicy {
    pub speed_limit_urban_mph: f64,
    pub speed_limit_rural_mph: f64,
    pub speed_limit_motorway_mph: f64,
    pub cannabis_confiscation_max_grams: f64,
    pub cash_okay_max_gbp: f64,
    pub cash_large_excess_gbp: f64,
    pub min_officers_for_hostage: u32,
    pub supply_threshold_grams: SupplyThresholds,
}

impl Default for CityPolicy {
    fn default() -> Self {
        Self {
            speed_limit_urban_mph: 50.0,
            speed_limit_rural_mph: 50.0,
            speed_limit_motorway_mph: 100.0,
            cannabis_confiscation_max_grams: 15.0,
            cash_okay_max_gbp: 10_000.0,
            cash_large_excess_gbp: 25_000.0,
            min_officers_for_hostage: 4,
            supply_threshold_grams: SupplyThresholds::default(),
        }
    }
}

impl CityPolicy {
    pub fn speed_limit(&self, road: RoadType) -> f64 {
        match road {
            RoadType::Urban => self.speed_limit_urban_mph,
            RoadType::Rural => self.speed_limit_rural_mph,
            RoadType::Motorway => self.speed_limit_motorway_mph,
        }
    }

    pub fn cash_above_ceiling(&self, cash_gbp: f64) -> bool {
        cash_gbp > self.cash_okay_max_gbp
    }
}

/// Quantities (grams) above which a drug type reads as supply rather than possession.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupplyThresholds {
    pub unknown: f64,
    pub cannabis: f64,
    pub class_a: f64,
    pub class_b: f64,
}

impl Default for SupplyThresholds {
    fn default() -> Self {
        Self {
            unknown: 10.0,
            cannabis: 30.0,
            class_a: 5.0,
            class_b: 10.0,
        }
    }
}

impl SupplyThresholds {
    pub fn for_drug(&self, drug: DrugType) -> f64 {
        match drug {
            DrugType::Unknown => self.unknown,
            DrugType::Cannabis => self.cannabis,
            DrugType::ClassA => self.class_a,
            DrugType::ClassB => self.class_b,
        }
    }
}

/// Base weights for the enumerated scene fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightTables {
    pub incident: IncidentWeights,
    pub behavior: BehaviorWeights,
    pub public_density: DensityWeights,
    pub traffic_density: DensityWeights,
    pub grounds: GroundWeights,
}

impl WeightTables {
    pub fn incident(&self, incident: IncidentType) -> u32 {
        let table = &self.incident;
        match incident {
            IncidentType::SuspiciousPerson => table.suspicious_person,
            IncidentType::TrafficStop => table.traffic_stop,
            IncidentType::PublicDisorder => table.public_disorder,
            IncidentType::AssaultReport => table.assault_report,
            IncidentType::Robbery => table.robbery,
            IncidentType::WeaponSighting => table.weapon_sighting,
            IncidentType::Pursuit => table.pursuit,
            IncidentType::Hostage => table.hostage,
        }
    }

    pub fn behavior(&self, behavior: Behavior) -> u32 {
        let table = &self.behavior;
        match behavior {
            Behavior::Compliant => table.compliant,
            Behavior::Evasive => table.evasive,
            Behavior::Aggressive => table.aggressive,
            Behavior::Fleeing => table.fleeing,
        }
    }

    pub fn public_density(&self, density: Density) -> u32 {
        self.public_density.weight(density)
    }

    pub fn traffic_density(&self, density: Density) -> u32 {
        self.traffic_density.weight(density)
    }

    pub fn ground(&self, ground: Ground) -> u32 {
        let table = &self.grounds;
        match ground {
            Ground::SmellDrugs => table.smell_drugs,
            Ground::DrugParaphernalia => table.drug_paraphernalia,
            Ground::WeaponBulge => table.weapon_bulge,
            Ground::StolenVehicleMarker => table.stolen_vehicle_marker,
            Ground::WitnessStatement => table.witness_statement,
            Ground::IntelLink => table.intel_link,
            Ground::AdmissionMade => table.admission_made,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncidentWeights {
    pub suspicious_person: u32,
    pub traffic_stop: u32,
    pub public_disorder: u32,
    pub assault_report: u32,
    pub robbery: u32,
    pub weapon_sighting: u32,
    pub pursuit: u32,
    pub hostage: u32,
}

impl Default for IncidentWeights {
    fn default() -> Self {
        Self {
            suspicious_person: 1,
            traffic_stop: 2,
            public_disorder: 3,
            assault_report: 4,
            robbery: 5,
            weapon_sighting: 6,
            pursuit: 7,
            hostage: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BehaviorWeights {
    pub compliant: u32,
    pub evasive: u32,
    pub aggressive: u32,
    pub fleeing: u32,
}

impl Default for BehaviorWeights {
    fn default() -> Self {
        Self {
            compliant: 0,
            evasive: 2,
            aggressive: 4,
            fleeing: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DensityWeights {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

impl Default for DensityWeights {
    fn default() -> Self {
        Self {
            low: 0,
            medium: 1,
            high: 3,
        }
    }
}

impl DensityWeights {
    fn weight(&self, density: Density) -> u32 {
        match density {
            Density::Low => self.low,
            Density::Medium => self.medium,
            Density::High => self.high,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroundWeights {
    pub smell_drugs: u32,
    pub drug_paraphernalia: u32,
    pub weapon_bulge: u32,
    pub stolen_vehicle_marker: u32,
    pub witness_statement: u32,
    pub intel_link: u32,
    pub admission_made: u32,
}

impl Default for GroundWeights {
    fn default() -> Self {
        Self {
            smell_drugs: 2,
            drug_paraphernalia: 3,
            weapon_bulge: 2,
            stolen_vehicle_marker: 3,
            witness_statement: 2,
            intel_link: 1,
            admission_made: 3,
        }
    }
}
