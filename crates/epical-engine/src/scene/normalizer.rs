//! Lenient coercion of caller-supplied scene maps into a complete [`Scene`].
//!
//! Form posts, stored JSON and hand-written fixtures all arrive as loosely typed maps. The
//! normalizer never rejects input: missing or malformed values fall back to the documented
//! defaults and numbers are clamped into their ranges.

use serde_json::{Map, Value};
use tracing::debug;

use super::domain::{
    Behavior, Density, DrugPackaging, DrugType, Ground, IncidentType, Mode, OfficerDetails,
    RoadType, Scene, SuspectDetails, VehicleCondition,
};

const GROUP_SIZE_RANGE: (f64, f64) = (1.0, 20.0);
const SPEED_RANGE: (f64, f64) = (0.0, 220.0);
const PURSUIT_MINUTES_RANGE: (f64, f64) = (0.0, 120.0);
const FAILED_STOP_RANGE: (f64, f64) = (0.0, 20.0);
const DRUG_GRAMS_RANGE: (f64, f64) = (0.0, 100_000.0);
const SEIZED_CASH_RANGE: (f64, f64) = (0.0, 100_000_000.0);

/// Build a complete scene from an untyped map. Unrecognized keys are ignored.
pub fn normalize_scene(raw: &Value) -> Scene {
    let empty = Map::new();
    let fields = match raw {
        Value::Object(map) => map,
        Value::Null => &empty,
        other => {
            debug!(kind = value_kind(other), "scene input is not an object; using defaults");
            &empty
        }
    };
    let reader = FieldReader { fields };
    let defaults = Scene::default();

    Scene {
        location: reader.text("location"),
        mode: reader.choice("mode", Mode::parse, defaults.mode),
        incident_type: reader.choice("incidentType", IncidentType::parse, defaults.incident_type),
        behavior: reader.choice("behavior", Behavior::parse, defaults.behavior),
        public_density: reader.choice("publicDensity", Density::parse, defaults.public_density),
        grounds: reader.grounds("grounds"),
        pd_on_duty: reader.count("pdOnDuty", 0.0, (0.0, u32::MAX as f64)),
        group_size: reader.count("groupSize", 1.0, GROUP_SIZE_RANGE),

        weapon_seen: reader.flag("weaponSeen"),
        active_shots: reader.flag("activeShots"),
        injury_present: reader.flag("injuryPresent"),
        known_violence_marker: reader.flag("knownViolenceMarker"),
        subject_intoxicated: reader.flag("subjectIntoxicated"),
        safeguarding_risk: reader.flag("safeguardingRisk"),
        public_indecency: reader.flag("publicIndecency"),
        highway_obstruction: reader.flag("highwayObstruction"),
        property_damage: reader.flag("propertyDamage"),
        s60_authorized: reader.flag("s60Authorized"),

        speed_mph: reader.measure("speedMph", 0.0, SPEED_RANGE),
        road_type: reader.choice("roadType", RoadType::parse, defaults.road_type),
        traffic_density: reader.choice("trafficDensity", Density::parse, defaults.traffic_density),
        vehicle_condition: reader.choice(
            "vehicleCondition",
            VehicleCondition::parse,
            defaults.vehicle_condition,
        ),
        vehicle_stopped: reader.flag("vehicleStopped"),
        vehicle_antisocial: reader.flag("vehicleAntisocial"),
        prior_s59_warning: reader.flag("priorS59Warning"),
        pursuit_duration_min: reader.measure("pursuitDurationMin", 0.0, PURSUIT_MINUTES_RANGE),
        failed_stop_signals: reader.count("failedStopSignals", 0.0, FAILED_STOP_RANGE),

        drug_type: reader.choice("drugType", DrugType::parse, defaults.drug_type),
        drug_quantity_grams: reader.measure("drugQuantityGrams", 0.0, DRUG_GRAMS_RANGE),
        drug_packaging: reader.choice("drugPackaging", DrugPackaging::parse, defaults.drug_packaging),
        seized_cash_gbp: reader.measure("seizedCashGbp", 0.0, SEIZED_CASH_RANGE),

        refuses_provide_id: reader.flag("refusesProvideId"),
        suspected_false_identity: reader.flag("suspectedFalseIdentity"),
        refuses_vehicle_docs: reader.flag("refusesVehicleDocs"),
        refuses_face_covering_removal: reader.flag("refusesFaceCoveringRemoval"),

        amber_zone: reader.flag("amberZone"),
        scene_started_in_amber: reader.flag("sceneStartedInAmber"),
        medical_attempt_during_active: reader.flag("medicalAttemptDuringActive"),
        taser_hit_two: reader.flag("taserHitTwo"),
        ehs_kidnap_attempt: reader.flag("ehsKidnapAttempt"),

        officer: reader.officer("officer"),
        suspect: reader.suspect("suspect"),
        notes: reader.text("notes"),
    }
}

struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    fn get(&self, key: &str) -> Option<&'a Value> {
        match self.fields.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn text(&self, key: &str) -> String {
        match self.get(key) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::Bool(flag)) => flag.to_string(),
            _ => String::new(),
        }
    }

    fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(coerce_flag)
    }

    fn number(&self, key: &str, fallback: f64) -> f64 {
        let Some(value) = self.get(key) else {
            return fallback;
        };
        match coerce_number(value) {
            Some(number) => number,
            None => {
                debug!(field = key, "scene number unreadable; using default");
                fallback
            }
        }
    }

    fn measure(&self, key: &str, fallback: f64, (min, max): (f64, f64)) -> f64 {
        self.number(key, fallback).clamp(min, max)
    }

    fn count(&self, key: &str, fallback: f64, (min, max): (f64, f64)) -> u32 {
        self.number(key, fallback).floor().clamp(min, max) as u32
    }

    fn choice<T: Copy>(&self, key: &str, parse: fn(&str) -> Option<T>, fallback: T) -> T {
        let Some(value) = self.get(key) else {
            return fallback;
        };
        let parsed = value
            .as_str()
            .and_then(|token| parse(token.trim().to_ascii_lowercase().as_str()));
        match parsed {
            Some(choice) => choice,
            None => {
                debug!(field = key, value = %value, "unrecognized scene option; using default");
                fallback
            }
        }
    }

    fn grounds(&self, key: &str) -> Vec<Ground> {
        let Some(Value::Array(items)) = self.get(key) else {
            return Vec::new();
        };

        let mut grounds = Vec::new();
        for item in items {
            let ground = item
                .as_str()
                .and_then(|token| Ground::parse(token.trim().to_ascii_lowercase().as_str()));
            match ground {
                Some(ground) if !grounds.contains(&ground) => grounds.push(ground),
                Some(_) => {}
                None => debug!(value = %item, "dropping unrecognized ground token"),
            }
        }
        grounds
    }

    fn nested(&self, key: &str) -> FieldReader<'a> {
        static EMPTY: std::sync::OnceLock<Map<String, Value>> = std::sync::OnceLock::new();
        match self.get(key) {
            Some(Value::Object(map)) => FieldReader { fields: map },
            _ => FieldReader {
                fields: EMPTY.get_or_init(Map::new),
            },
        }
    }

    fn officer(&self, key: &str) -> OfficerDetails {
        let officer = self.nested(key);
        OfficerDetails {
            name: officer.text("name"),
            collar_number: officer.text("collarNumber"),
            callsign: officer.text("callsign"),
        }
    }

    fn suspect(&self, key: &str) -> SuspectDetails {
        let suspect = self.nested(key);
        SuspectDetails {
            name: suspect.text("name"),
            date_of_birth: suspect.text("dateOfBirth"),
            address: suspect.text("address"),
        }
    }
}

/// Form-style truthiness: booleans, non-zero numbers and `true`/`on`/`yes`/`1` strings.
pub(crate) fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "true" | "on" | "yes" | "1"
        ),
        _ => false,
    }
}

/// Numeric reading of a loose value. Blank strings read as zero; infinities are kept for the
/// caller to clamp. `None` means the value has no numeric reading at all.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    parsed.filter(|number| !number.is_nan())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
