mod builders;
mod config;
mod disposal;
mod gate;
mod grounds;
mod identity;
mod necessity;
mod risk;
mod summary;

pub use config::{
    BehaviorWeights, CityPolicy, DensityWeights, EngineConfig, GroundWeights, IncidentWeights,
    SupplyThresholds, WeightTables,
};

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::case::{Case, Contexts, Grounds, IdentityContext, SpeedProfile};
use super::clock::{Clock, SystemClock};
use super::contexts::{derive_contexts, speed_profile};
use super::domain::Scene;
use super::normalizer::normalize_scene;
use super::PACE_CAUTION_TEXT;

/// Upstream records shared by every stage after identity assessment.
pub(crate) struct SceneFacts<'a> {
    pub scene: &'a Scene,
    pub contexts: &'a Contexts,
    pub grounds: &'a Grounds,
    pub identity: &'a IdentityContext,
    pub speed: SpeedProfile,
    pub policy: &'a CityPolicy,
}

impl SceneFacts<'_> {
    pub fn over_limit(&self) -> f64 {
        self.speed.over_limit
    }

    pub fn cash_above_ceiling(&self) -> bool {
        self.policy.cash_above_ceiling(self.scene.seized_cash_gbp)
    }

    /// Dealer or bulk packaging, or a quantity above the threshold for the drug type.
    pub fn supply_indicators(&self) -> bool {
        let threshold = self
            .policy
            .supply_threshold_grams
            .for_drug(self.scene.drug_type);
        self.scene.drug_packaging.indicates_supply() || self.scene.drug_quantity_grams > threshold
    }

    pub fn identity_doubt(&self) -> bool {
        self.scene.refuses_provide_id || self.scene.suspected_false_identity
    }
}

/// Stateless evaluator that runs a scene through the full guidance pipeline.
pub struct SceneEngine {
    config: EngineConfig,
    clock: Arc<dyn Clock>,
}

impl Default for SceneEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default(), Arc::new(SystemClock))
    }
}

impl SceneEngine {
    pub fn new(config: EngineConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Normalize an untyped scene and evaluate it. Never fails.
    pub fn evaluate(&self, raw: &Value) -> Case {
        self.evaluate_normalized(normalize_scene(raw))
    }

    pub fn evaluate_normalized(&self, scene: Scene) -> Case {
        let policy = &self.config.policy;
        let weights = &self.config.weights;

        let contexts = derive_contexts(&scene);
        let speed = speed_profile(&scene, policy);
        let grounds = grounds::assess_grounds(&scene, &contexts, weights);
        let identity = identity::assess_identity(&scene, &contexts, &grounds, &speed, policy);

        let facts = SceneFacts {
            scene: &scene,
            contexts: &contexts,
            grounds: &grounds,
            identity: &identity,
            speed,
            policy,
        };

        let necessity_checklist = necessity::build_necessity_checklist(&facts);
        let risk = risk::calculate_risk(&facts, weights);
        let gate = gate::evaluate_gate(&facts);

        let arrest_reasons = builders::arrest_reasons(&facts, &risk);
        let likely_offences = builders::likely_offences(&facts);
        let sections = builders::legal_sections(&facts, &arrest_reasons);
        let immediate_actions = builders::immediate_actions(&facts, &risk);
        let tactical_actions = builders::tactical_actions(&facts, &risk);
        let evidence = builders::evidence_checklist(&facts);
        let rationale = builders::rationale(&risk, &grounds);

        let disposals = disposal::select_disposals(&facts, &risk, &gate, &arrest_reasons);

        let pace_triggers =
            summary::pace_triggers(&facts, &necessity_checklist, &arrest_reasons);
        let trigger_pointers = summary::trigger_pointers(&facts, &risk, &gate);
        let quick_reference = summary::quick_reference(
            &facts,
            &risk,
            &likely_offences,
            &sections,
            &immediate_actions,
            &disposals,
            &necessity_checklist,
        );
        let top_bar_summary = summary::top_bar_summary(&risk, &quick_reference);
        let context_chips = summary::context_chips(&facts);

        debug!(
            incident = scene.incident_type.token(),
            risk_level = risk.level.token(),
            risk_score = risk.score,
            grounds_level = grounds.level.token(),
            blocked = gate.blocked.len(),
            disposal = %disposals[0].method,
            "scene evaluated"
        );

        Case {
            log: self.clock.timestamp(),
            city_policy: policy.clone(),
            contexts,
            context_chips,
            grounds,
            identity_context: identity,
            necessity_checklist,
            risk,
            gate,
            arrest_reasons,
            likely_offences,
            caution_text: PACE_CAUTION_TEXT.to_string(),
            sections,
            immediate_actions,
            tactical_actions,
            disposals,
            evidence,
            rationale,
            pace_triggers,
            trigger_pointers,
            quick_reference,
            top_bar_summary,
            scene,
        }
    }
}
