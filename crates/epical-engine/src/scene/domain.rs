use serde::{Deserialize, Serialize};

/// How the officer engaged the subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Foot,
    Vehicle,
}

impl Mode {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Foot => "foot",
            Self::Vehicle => "vehicle",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "foot" => Some(Self::Foot),
            "vehicle" => Some(Self::Vehicle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentType {
    #[default]
    SuspiciousPerson,
    TrafficStop,
    PublicDisorder,
    AssaultReport,
    Robbery,
    WeaponSighting,
    Pursuit,
    Hostage,
}

impl IncidentType {
    pub const fn token(self) -> &'static str {
        match self {
            Self::SuspiciousPerson => "suspicious_person",
            Self::TrafficStop => "traffic_stop",
            Self::PublicDisorder => "public_disorder",
            Self::AssaultReport => "assault_report",
            Self::Robbery => "robbery",
            Self::WeaponSighting => "weapon_sighting",
            Self::Pursuit => "pursuit",
            Self::Hostage => "hostage",
        }
    }

    /// Human readable form used in report prose ("traffic stop").
    pub fn label(self) -> String {
        self.token().replace('_', " ")
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "suspicious_person" => Some(Self::SuspiciousPerson),
            "traffic_stop" => Some(Self::TrafficStop),
            "public_disorder" => Some(Self::PublicDisorder),
            "assault_report" => Some(Self::AssaultReport),
            "robbery" => Some(Self::Robbery),
            "weapon_sighting" => Some(Self::WeaponSighting),
            "pursuit" => Some(Self::Pursuit),
            "hostage" => Some(Self::Hostage),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    #[default]
    Compliant,
    Evasive,
    Aggressive,
    Fleeing,
}

impl Behavior {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "compliant" => Some(Self::Compliant),
            "evasive" => Some(Self::Evasive),
            "aggressive" => Some(Self::Aggressive),
            "fleeing" => Some(Self::Fleeing),
            _ => None,
        }
    }
}

/// Shared scale for crowd and traffic density.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    #[default]
    Low,
    Medium,
    High,
}

impl Density {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Articulable grounds an officer can record for search powers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ground {
    SmellDrugs,
    DrugParaphernalia,
    WeaponBulge,
    StolenVehicleMarker,
    WitnessStatement,
    IntelLink,
    AdmissionMade,
}

impl Ground {
    pub const fn token(self) -> &'static str {
        match self {
            Self::SmellDrugs => "smell_drugs",
            Self::DrugParaphernalia => "drug_paraphernalia",
            Self::WeaponBulge => "weapon_bulge",
            Self::StolenVehicleMarker => "stolen_vehicle_marker",
            Self::WitnessStatement => "witness_statement",
            Self::IntelLink => "intel_link",
            Self::AdmissionMade => "admission_made",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "smell_drugs" => Some(Self::SmellDrugs),
            "drug_paraphernalia" => Some(Self::DrugParaphernalia),
            "weapon_bulge" => Some(Self::WeaponBulge),
            "stolen_vehicle_marker" => Some(Self::StolenVehicleMarker),
            "witness_statement" => Some(Self::WitnessStatement),
            "intel_link" => Some(Self::IntelLink),
            "admission_made" => Some(Self::AdmissionMade),
            _ => None,
        }
    }

    pub const fn is_drug_indicator(self) -> bool {
        matches!(self, Self::SmellDrugs | Self::DrugParaphernalia)
    }

    /// Intelligence alone never counts towards the strong-ground tally.
    pub const fn is_strong(self) -> bool {
        !matches!(self, Self::IntelLink)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadType {
    #[default]
    Urban,
    Rural,
    Motorway,
}

impl RoadType {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "urban" => Some(Self::Urban),
            "rural" => Some(Self::Rural),
            "motorway" => Some(Self::Motorway),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCondition {
    #[default]
    Normal,
    Smoking,
    BlownTires,
    Critical,
}

impl VehicleCondition {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "normal" => Some(Self::Normal),
            "smoking" => Some(Self::Smoking),
            "blown_tires" => Some(Self::BlownTires),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    pub const fn is_heavily_damaged(self) -> bool {
        matches!(self, Self::BlownTires | Self::Critical)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrugType {
    #[default]
    Unknown,
    Cannabis,
    ClassA,
    ClassB,
}

impl DrugType {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "unknown" => Some(Self::Unknown),
            "cannabis" => Some(Self::Cannabis),
            "class_a" => Some(Self::ClassA),
            "class_b" => Some(Self::ClassB),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrugPackaging {
    #[default]
    None,
    Personal,
    SplitBags,
    DealerPack,
    Bulk,
}

impl DrugPackaging {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "none" => Some(Self::None),
            "personal" => Some(Self::Personal),
            "split_bags" => Some(Self::SplitBags),
            "dealer_pack" => Some(Self::DealerPack),
            "bulk" => Some(Self::Bulk),
            _ => None,
        }
    }

    /// Packaging consistent with personal use (or nothing recovered).
    pub const fn is_personal_or_none(self) -> bool {
        matches!(self, Self::None | Self::Personal)
    }

    pub const fn indicates_supply(self) -> bool {
        matches!(self, Self::DealerPack | Self::Bulk)
    }
}

/// Officer identifiers carried through to handover paperwork.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerDetails {
    pub name: String,
    pub collar_number: String,
    pub callsign: String,
}

/// Suspect identifiers as volunteered at the scene (possibly blank or doubted).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspectDetails {
    pub name: String,
    pub date_of_birth: String,
    pub address: String,
}

/// Fully normalized scene record. Every field is present and every number is in range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub location: String,
    pub mode: Mode,
    pub incident_type: IncidentType,
    pub behavior: Behavior,
    pub public_density: Density,
    pub grounds: Vec<Ground>,
    pub pd_on_duty: u32,
    pub group_size: u32,

    pub weapon_seen: bool,
    pub active_shots: bool,
    pub injury_present: bool,
    pub known_violence_marker: bool,
    pub subject_intoxicated: bool,
    pub safeguarding_risk: bool,
    pub public_indecency: bool,
    pub highway_obstruction: bool,
    pub property_damage: bool,
    pub s60_authorized: bool,

    pub speed_mph: f64,
    pub road_type: RoadType,
    pub traffic_density: Density,
    pub vehicle_condition: VehicleCondition,
    pub vehicle_stopped: bool,
    pub vehicle_antisocial: bool,
    pub prior_s59_warning: bool,
    pub pursuit_duration_min: f64,
    pub failed_stop_signals: u32,

    pub drug_type: DrugType,
    pub drug_quantity_grams: f64,
    pub drug_packaging: DrugPackaging,
    pub seized_cash_gbp: f64,

    pub refuses_provide_id: bool,
    pub suspected_false_identity: bool,
    pub refuses_vehicle_docs: bool,
    pub refuses_face_covering_removal: bool,

    pub amber_zone: bool,
    pub scene_started_in_amber: bool,
    pub medical_attempt_during_active: bool,
    pub taser_hit_two: bool,
    pub ehs_kidnap_attempt: bool,

    pub officer: OfficerDetails,
    pub suspect: SuspectDetails,
    pub notes: String,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            location: String::new(),
            mode: Mode::default(),
            incident_type: IncidentType::default(),
            behavior: Behavior::default(),
            public_density: Density::default(),
            grounds: Vec::new(),
            pd_on_duty: 0,
            group_size: 1,
            weapon_seen: false,
            active_shots: false,
            injury_present: false,
            known_violence_marker: false,
            subject_intoxicated: false,
            safeguarding_risk: false,
            public_indecency: false,
            highway_obstruction: false,
            property_damage: false,
            s60_authorized: false,
            speed_mph: 0.0,
            road_type: RoadType::default(),
            traffic_density: Density::default(),
            vehicle_condition: VehicleCondition::default(),
            vehicle_stopped: false,
            vehicle_antisocial: false,
            prior_s59_warning: false,
            pursuit_duration_min: 0.0,
            failed_stop_signals: 0,
            drug_type: DrugType::default(),
            drug_quantity_grams: 0.0,
            drug_packaging: DrugPackaging::default(),
            seized_cash_gbp: 0.0,
            refuses_provide_id: false,
            suspected_false_identity: false,
            refuses_vehicle_docs: false,
            refuses_face_covering_removal: false,
            amber_zone: false,
            scene_started_in_amber: false,
            medical_attempt_during_active: false,
            taser_hit_two: false,
            ehs_kidnap_attempt: false,
            officer: OfficerDetails::default(),
            suspect: SuspectDetails::default(),
            notes: String::new(),
        }
    }
}

impl Scene {
    pub fn has_ground(&self, ground: Ground) -> bool {
        self.grounds.contains(&ground)
    }

    pub fn is_incident(&self, incident: IncidentType) -> bool {
        self.incident_type == incident
    }

    /// Any recovered drug or drug-related observation.
    pub fn has_drug_evidence(&self) -> bool {
        self.grounds.iter().any(|ground| ground.is_drug_indicator())
            || self.drug_quantity_grams > 0.0
            || self.drug_packaging != DrugPackaging::None
    }
}
