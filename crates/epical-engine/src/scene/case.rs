use serde::{Deserialize, Serialize};

use super::domain::Scene;
use super::evaluation::CityPolicy;

/// Situational flags derived from the scene. Recomputed on every evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contexts {
    pub has_drug_ground: bool,
    pub vehicle_context: bool,
    pub pursuit_context: bool,
    pub drug_context: bool,
}

/// Whether compulsion powers over identity, documents and face coverings currently apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityContext {
    pub active_vehicle_stop: bool,
    pub active_vehicle_stop_basis: String,
    pub offence_suspicion: bool,
    pub offence_suspicion_basis: String,
    pub id_is_required: bool,
    pub id_basis: String,
    pub vehicle_docs_required: bool,
    pub vehicle_docs_basis: String,
    pub face_covering_power_active: bool,
    pub face_covering_basis: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundsLevel {
    None,
    Weak,
    Moderate,
    Strong,
}

impl GroundsLevel {
    pub const fn from_score(score: u32) -> Self {
        if score >= 7 {
            Self::Strong
        } else if score >= 3 {
            Self::Moderate
        } else if score >= 1 {
            Self::Weak
        } else {
            Self::None
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::None => "No meaningful grounds captured yet.",
            Self::Weak => {
                "Grounds are weak; gather specific articulable facts before intrusive action."
            }
            Self::Moderate => {
                "Grounds are usable but should be tightened with clear narrative evidence."
            }
            Self::Strong => "Grounds are strong and support decisive lawful action.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grounds {
    pub score: u32,
    pub strong_count: u32,
    pub level: GroundsLevel,
    pub detail: Vec<String>,
    pub summary: String,
    pub drug_grounded: bool,
}

/// IDCOPPLAN necessity codes in checklist order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NecessityCode {
    I,
    D,
    C,
    O,
    P,
    P2,
    L,
    A,
    N,
}

impl NecessityCode {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::I,
            Self::D,
            Self::C,
            Self::O,
            Self::P,
            Self::P2,
            Self::L,
            Self::A,
            Self::N,
        ]
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::I => "Investigation",
            Self::D => "Disappearance",
            Self::C => "Child or vulnerable person",
            Self::O => "Obstruction of the highway",
            Self::P => "Physical injury",
            Self::P2 => "Public decency",
            Self::L => "Loss or damage to property",
            Self::A => "Address",
            Self::N => "Name",
        }
    }

    pub const fn pace_ref(self) -> &'static str {
        match self {
            Self::I => "PACE s24(5)(e)",
            Self::D => "PACE s24(5)(f)",
            Self::C => "PACE s24(5)(d)",
            Self::O => "PACE s24(5)(c)(v)",
            Self::P => "PACE s24(5)(c)(i)",
            Self::P2 => "PACE s24(5)(c)(iv)",
            Self::L => "PACE s24(5)(c)(iii)",
            Self::A => "PACE s24(5)(b)",
            Self::N => "PACE s24(5)(a)",
        }
    }

    /// Letter shown to officers. The mnemonic has two P entries, so P2 renders as "P".
    pub const fn display_code(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::D => "D",
            Self::C => "C",
            Self::O => "O",
            Self::P | Self::P2 => "P",
            Self::L => "L",
            Self::A => "A",
            Self::N => "N",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NecessityItem {
    pub code: NecessityCode,
    pub title: String,
    pub pace_ref: String,
}

impl NecessityItem {
    pub fn from_code(code: NecessityCode) -> Self {
        Self {
            code,
            title: code.title().to_string(),
            pace_ref: code.pace_ref().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const fn from_score(score: u32) -> Self {
        if score >= 19 {
            Self::Critical
        } else if score >= 12 {
            Self::High
        } else if score >= 6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub const fn is_high_or_critical(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub points: u32,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedProfile {
    pub speed_limit: f64,
    pub over_limit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub score: u32,
    pub level: RiskLevel,
    pub factors: Vec<RiskFactor>,
    pub speed_profile: SpeedProfile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gate {
    pub blocked: Vec<String>,
    pub warnings: Vec<String>,
}

impl Gate {
    pub fn is_blocked(&self) -> bool {
        !self.blocked.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disposal {
    pub method: String,
    pub reason: String,
    pub uk_reference: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerLevel {
    Critical,
    High,
    Info,
}

impl PointerLevel {
    pub const fn weight(self) -> u8 {
        match self {
            Self::Critical => 3,
            Self::High => 2,
            Self::Info => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerPointer {
    pub level: PointerLevel,
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickReference {
    pub risk: String,
    pub grounds: String,
    pub top_risk_driver: String,
    pub top_offence: String,
    pub top_section: String,
    pub next_action: String,
    pub primary_disposal: String,
    pub necessity_codes: String,
    pub identity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopBarSummary {
    pub risk_badge: String,
    pub offence: String,
    pub action: String,
    pub section: String,
    pub disposal: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseTimestamp {
    pub iso: String,
    pub local: String,
    pub timezone: String,
}

/// Complete engine output for one scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub log: CaseTimestamp,
    pub scene: Scene,
    pub city_policy: CityPolicy,
    pub contexts: Contexts,
    pub context_chips: Vec<String>,
    pub grounds: Grounds,
    pub identity_context: IdentityContext,
    pub necessity_checklist: Vec<NecessityItem>,
    pub risk: Risk,
    pub gate: Gate,
    pub arrest_reasons: Vec<String>,
    pub likely_offences: Vec<String>,
    pub caution_text: String,
    pub sections: Vec<String>,
    pub immediate_actions: Vec<String>,
    pub tactical_actions: Vec<String>,
    pub disposals: [Disposal; 2],
    pub evidence: Vec<String>,
    pub rationale: Vec<String>,
    pub pace_triggers: Vec<String>,
    pub trigger_pointers: Vec<TriggerPointer>,
    pub quick_reference: QuickReference,
    pub top_bar_summary: TopBarSummary,
}
