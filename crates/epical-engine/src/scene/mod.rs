//! Roleplay scene evaluation: normalize an officer's scene description and derive risk,
//! grounds, arrest necessity, legal references, actions and disposals from it.
//!
//! The pipeline is pure. The only outside input is the clock used for the informational
//! case timestamp, which is injected through [`Clock`].

pub mod case;
pub mod clock;
mod contexts;
pub mod domain;
mod evaluation;
pub mod handover;
mod normalizer;

#[cfg(test)]
mod tests;

pub use case::{
    Case, CaseTimestamp, Contexts, Disposal, Gate, Grounds, GroundsLevel, IdentityContext,
    NecessityCode, NecessityItem, PointerLevel, QuickReference, Risk, RiskFactor, RiskLevel,
    SpeedProfile, TopBarSummary, TriggerPointer,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use contexts::{derive_contexts, speed_profile};
pub use domain::{
    Behavior, Density, DrugPackaging, DrugType, Ground, IncidentType, Mode, OfficerDetails,
    RoadType, Scene, SuspectDetails, VehicleCondition,
};
pub use evaluation::{
    BehaviorWeights, CityPolicy, DensityWeights, EngineConfig, GroundWeights, IncidentWeights,
    SceneEngine, SupplyThresholds, WeightTables,
};
pub use handover::{build_handover_log, format_currency, HandoverForm};
pub use normalizer::normalize_scene;

pub const PACE_CAUTION_TEXT: &str = "You do not have to say anything, but it may harm your defence if you do not mention when questioned something which you later rely on in court. Anything you do say may be given in evidence.";

/// Evaluate a raw scene with the default city policy and the system clock.
pub fn evaluate_scene(raw: &serde_json::Value) -> Case {
    SceneEngine::default().evaluate(raw)
}
