use super::super::case::{Disposal, Gate, GroundsLevel, Risk, RiskLevel};
use super::super::domain::{Behavior, DrugType};
use super::SceneFacts;

fn entry(method: &str, reason: &str, uk_reference: &str) -> Disposal {
    Disposal {
        method: method.to_string(),
        reason: reason.to_string(),
        uk_reference: uk_reference.to_string(),
    }
}

/// No weapon, no shots and a compliant subject.
fn calm_subject(facts: &SceneFacts<'_>) -> bool {
    let scene = facts.scene;
    scene.behavior == Behavior::Compliant && !scene.weapon_seen && !scene.active_shots
}

/// First matching branch wins; the final branch always matches.
pub(crate) fn select_disposals(
    facts: &SceneFacts<'_>,
    risk: &Risk,
    gate: &Gate,
    arrest_reasons: &[String],
) -> [Disposal; 2] {
    let scene = facts.scene;
    let grounds = facts.grounds;

    if gate.is_blocked() {
        return [
            entry(
                "Scene Reset (Rule Block)",
                "Current scene path violates EPICAL server constraints.",
                "Server Rule Gate",
            ),
            entry(
                "Supervisor Review",
                "Document why escalation was blocked and select compliant alternative.",
                "BWV + incident log",
            ),
        ];
    }

    if facts.cash_above_ceiling() && risk.level.is_high_or_critical() {
        return [
            entry(
                "Cash Seizure + Arrest/Detain Decision",
                "Cash above the city ceiling alongside a high risk profile.",
                "POCA s294 + PACE s24",
            ),
            entry(
                "Financial Enquiry Referral",
                "Source of funds must be evidenced before any return of cash.",
                "POCA cash forfeiture route",
            ),
        ];
    }

    if arrest_reasons.len() >= 2 || risk.level == RiskLevel::Critical {
        return [
            entry(
                "Arrest + Custody Handover",
                "Multiple necessity indicators / critical risk threshold met.",
                "PACE s24 + PACE s32",
            ),
            entry(
                "Charge / Remand Decision Pack",
                "High-risk evidential package required before disposal.",
                "Custody + CPS-style RP workflow",
            ),
        ];
    }

    let grams = scene.drug_quantity_grams;
    if scene.drug_type == DrugType::Cannabis
        && grams > 0.0
        && grams <= facts.policy.cannabis_confiscation_max_grams
        && scene.drug_packaging.is_personal_or_none()
        && calm_subject(facts)
    {
        return [
            entry(
                "Cannabis Confiscation",
                "Personal-use cannabis within the city confiscation ceiling and no aggravating factors.",
                "MDA s23 + city cannabis policy",
            ),
            entry(
                "Street Resolution / Monetary Penalty",
                "Proportionate street outcome once identity is confirmed.",
                "Officer discretion + city policy",
            ),
        ];
    }

    if grounds.drug_grounded {
        if grams <= 2.0 && scene.drug_packaging.is_personal_or_none() && calm_subject(facts) {
            return [
                entry(
                    "Street Disposal (Seizure + Warning)",
                    "Low quantity, cooperative behavior, no aggravating threat factors.",
                    "MDA s23 + local policy",
                ),
                entry(
                    "NFA after Seizure Review",
                    "If no further necessity and identity/grounds are fully documented.",
                    "Supervisor discretion",
                ),
            ];
        }
        if facts.supply_indicators() {
            return [
                entry(
                    "Arrest for Supply Investigation",
                    "Quantity/packaging indicates potential intent to supply.",
                    "PACE s24 + MDA s23",
                ),
                entry(
                    "Custody + Interview Under Caution",
                    "Evidence quality requires formal interview and continuity handling.",
                    "PACE caution + custody process",
                ),
            ];
        }
        return [
            entry(
                "Detain for Enquiries",
                "Drug indicators present but threshold not yet clearly supply-level.",
                "PACE s1 / MDA s23",
            ),
            entry(
                "Voluntary Attendance or Arrest Decision",
                "Outcome depends on cooperation, identity assurance, and further findings.",
                "PACE necessity test",
            ),
        ];
    }

    if facts.contexts.vehicle_context {
        if scene.prior_s59_warning {
            return [
                entry(
                    "Vehicle Seizure",
                    "Active prior s59 warning with continuing anti-social vehicle use.",
                    "Police Reform Act s59",
                ),
                entry(
                    "Traffic Prosecution File",
                    "Driving threat profile warrants full reporting and court route.",
                    "RTA disposal",
                ),
            ];
        }
        if scene.vehicle_antisocial {
            return [
                entry(
                    "s59 Warning",
                    "Anti-social vehicle use evidenced; warning threshold met.",
                    "Police Reform Act s59",
                ),
                entry(
                    "Escalate to Seizure if Repeated",
                    "Re-offending after warning triggers vehicle seizure route.",
                    "Police Reform Act s59",
                ),
            ];
        }
        if facts.over_limit() >= 20.0 {
            return [
                entry(
                    "Traffic Offence Report / Summons",
                    "Speed well over the city limit with public risk indicators.",
                    "RTA s2 reference",
                ),
                entry(
                    "Arrest if Necessity Escalates",
                    "Use arrest route if identity risk, non-compliance, or further offences appear.",
                    "PACE s24",
                ),
            ];
        }
    }

    if risk.level == RiskLevel::Low && grounds.level == GroundsLevel::None {
        return [
            entry(
                "No Further Action (NFA)",
                "Low risk and no articulable offence threshold currently met.",
                "Recorded rationale",
            ),
            entry(
                "Words of Advice",
                "Proportionate educational outcome for minor concern only.",
                "Officer discretion",
            ),
        ];
    }

    if risk.level == RiskLevel::Low && arrest_reasons.is_empty() {
        return [
            entry(
                "Investigative Conversation",
                "Low risk with some grounds but no arrest necessity identified.",
                "PACE Code A / Code C",
            ),
            entry(
                "Community Resolution or Words of Advice",
                "Close informally if the conversation resolves the concern.",
                "Officer discretion",
            ),
        ];
    }

    if risk.level == RiskLevel::Medium {
        return [
            entry(
                "Detain for Enquiries",
                "Medium risk with developing grounds requires structured checks.",
                "PACE s1 / policy",
            ),
            entry(
                "Summons / Release Under Investigation",
                "Use post-scene disposal if arrest necessity is not sustained.",
                "Case progression",
            ),
        ];
    }

    [
        entry(
            "Arrest + Custody Transfer",
            "Risk/behavior profile exceeds threshold for field disposal.",
            "PACE s24",
        ),
        entry(
            "Case Build and Supervisor Review",
            "Formal evidential package required before final charging outcome.",
            "Custody workflow",
        ),
    ]
}
