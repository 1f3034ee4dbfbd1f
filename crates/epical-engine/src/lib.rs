//! Scene evaluation engine for roleplay policing, plus the configuration, error and
//! telemetry plumbing shared with the service front end.

pub mod config;
pub mod error;
pub mod scene;
pub mod telemetry;

pub use scene::{
    build_handover_log, derive_contexts, evaluate_scene, normalize_scene, Case, Clock,
    EngineConfig, FixedClock, HandoverForm, Scene, SceneEngine, SystemClock,
};
