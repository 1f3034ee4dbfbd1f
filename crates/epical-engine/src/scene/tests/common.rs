use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::scene::{Case, EngineConfig, FixedClock, SceneEngine};

pub(super) fn fixed_instant() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2025-06-01T14:30:00+01:00").expect("valid timestamp")
}

pub(super) fn engine_with(config: EngineConfig) -> SceneEngine {
    SceneEngine::new(config, Arc::new(FixedClock::new(fixed_instant())))
}

pub(super) fn engine() -> SceneEngine {
    engine_with(EngineConfig::default())
}

pub(super) fn evaluate(raw: Value) -> Case {
    engine().evaluate(&raw)
}

pub(super) fn factor_points(case: &Case, label: &str) -> Option<u32> {
    case.risk
        .factors
        .iter()
        .find(|factor| factor.label == label)
        .map(|factor| factor.points)
}

pub(super) fn disposal_methods(case: &Case) -> [&str; 2] {
    [
        case.disposals[0].method.as_str(),
        case.disposals[1].method.as_str(),
    ]
}
