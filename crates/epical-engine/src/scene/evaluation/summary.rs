use super::super::case::{
    Disposal, Gate, NecessityCode, NecessityItem, PointerLevel, QuickReference, Risk,
    RiskLevel, TopBarSummary, TriggerPointer,
};
use super::super::handover::format_currency;
use super::builders::push_unique;
use super::gate::GIVE_WAY_REMINDER;
use super::SceneFacts;

const OFFENCE_MAX_CHARS: usize = 42;
const ACTION_MAX_CHARS: usize = 72;
const SECTION_MAX_CHARS: usize = 42;
const DISPOSAL_MAX_CHARS: usize = 48;

/// Cut `text` to at most `max_chars` characters, marking the cut with a trailing ellipsis.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

pub(crate) fn pace_triggers(
    facts: &SceneFacts<'_>,
    checklist: &[NecessityItem],
    arrest_reasons: &[String],
) -> Vec<String> {
    let scene = facts.scene;
    let identity = facts.identity;
    let identity_power = identity.id_is_required || identity.offence_suspicion;
    let has_code = |code: NecessityCode| checklist.iter().any(|item| item.code == code);
    let mut triggers = Vec::new();

    if scene.refuses_provide_id && identity_power {
        push_unique(
            &mut triggers,
            "Name/address necessity: identity refused while a power to require it applies.",
        );
    }
    if scene.suspected_false_identity && identity_power {
        push_unique(
            &mut triggers,
            "Name/address necessity: reasonable grounds to doubt the details given.",
        );
    }
    if has_code(NecessityCode::I) {
        push_unique(
            &mut triggers,
            "Investigation necessity: arrest allows a prompt and effective investigation.",
        );
    }
    if has_code(NecessityCode::O) {
        push_unique(
            &mut triggers,
            "Obstruction necessity: arrest prevents unlawful obstruction of the highway.",
        );
    }
    if scene.refuses_face_covering_removal && identity.face_covering_power_active {
        push_unique(
            &mut triggers,
            "Face covering power: CJPOA s60AA removal requirement is active.",
        );
    }
    for item in checklist {
        push_unique(
            &mut triggers,
            format!(
                "{} - {} ({})",
                item.code.display_code(),
                item.title,
                item.pace_ref
            ),
        );
    }
    if !arrest_reasons.is_empty() {
        push_unique(
            &mut triggers,
            format!(
                "Arrest necessity indicators recorded: {}.",
                arrest_reasons.len()
            ),
        );
    }

    triggers
}

fn pointer(level: PointerLevel, title: &str, detail: impl Into<String>) -> TriggerPointer {
    TriggerPointer {
        level,
        title: title.to_string(),
        detail: detail.into(),
    }
}

pub(crate) fn trigger_pointers(
    facts: &SceneFacts<'_>,
    risk: &Risk,
    gate: &Gate,
) -> Vec<TriggerPointer> {
    let scene = facts.scene;
    let identity = facts.identity;
    let mut pointers = Vec::new();

    for blocked in &gate.blocked {
        pointers.push(pointer(PointerLevel::Critical, "Rule block", blocked.as_str()));
    }

    let risk_level = match risk.level {
        RiskLevel::Critical => PointerLevel::Critical,
        RiskLevel::High => PointerLevel::High,
        RiskLevel::Medium | RiskLevel::Low => PointerLevel::Info,
    };
    pointers.push(pointer(
        risk_level,
        "Risk level",
        format!(
            "{} ({})",
            risk.level.token().to_uppercase(),
            risk.score
        ),
    ));

    pointers.push(pointer(
        PointerLevel::Info,
        "Grounds",
        facts.grounds.summary.as_str(),
    ));

    if facts.identity_doubt() {
        let level = if identity.id_is_required || identity.offence_suspicion {
            PointerLevel::High
        } else {
            PointerLevel::Info
        };
        pointers.push(pointer(level, "Identity", identity.id_basis.as_str()));
    }
    if scene.refuses_face_covering_removal {
        let level = if identity.face_covering_power_active {
            PointerLevel::High
        } else {
            PointerLevel::Info
        };
        pointers.push(pointer(
            level,
            "Face covering",
            identity.face_covering_basis.as_str(),
        ));
    }
    if identity.active_vehicle_stop {
        pointers.push(pointer(
            PointerLevel::Info,
            "Vehicle stop",
            identity.active_vehicle_stop_basis.as_str(),
        ));
    }
    if facts.cash_above_ceiling() {
        pointers.push(pointer(
            PointerLevel::High,
            "Cash seizure",
            format!(
                "{} exceeds the city ceiling of {}.",
                format_currency(scene.seized_cash_gbp),
                format_currency(facts.policy.cash_okay_max_gbp)
            ),
        ));
    }
    for warning in &gate.warnings {
        let (level, title) = if warning == GIVE_WAY_REMINDER {
            (PointerLevel::Info, "City policy")
        } else {
            (PointerLevel::High, "Gate warning")
        };
        pointers.push(pointer(level, title, warning.as_str()));
    }

    // Stable: equal levels keep push order.
    pointers.sort_by(|a, b| b.level.weight().cmp(&a.level.weight()));
    pointers
}

fn first_or(list: &[String], fallback: &str) -> String {
    list.first()
        .map(String::as_str)
        .unwrap_or(fallback)
        .to_string()
}

pub(crate) fn quick_reference(
    facts: &SceneFacts<'_>,
    risk: &Risk,
    likely_offences: &[String],
    sections: &[String],
    immediate_actions: &[String],
    disposals: &[Disposal; 2],
    checklist: &[NecessityItem],
) -> QuickReference {
    let identity = facts.identity;

    let necessity_codes = if checklist.is_empty() {
        "None".to_string()
    } else {
        checklist
            .iter()
            .map(|item| item.code.display_code())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let identity_summary = if identity.id_is_required {
        "ID required: active vehicle stop"
    } else if identity.offence_suspicion {
        "ID via arrest necessity only"
    } else {
        "No general duty to give ID"
    };

    QuickReference {
        risk: format!("{} ({})", risk.level.token().to_uppercase(), risk.score),
        grounds: format!(
            "{} ({})",
            facts.grounds.level.token().to_uppercase(),
            facts.grounds.score
        ),
        top_risk_driver: risk
            .factors
            .first()
            .map(|factor| format!("{} (+{})", factor.label, factor.points))
            .unwrap_or_else(|| "No risk drivers recorded".to_string()),
        top_offence: first_or(likely_offences, "No offence identified yet"),
        top_section: first_or(sections, "No specific section recorded"),
        next_action: first_or(immediate_actions, "Maintain observation and gather facts"),
        primary_disposal: disposals[0].method.clone(),
        necessity_codes,
        identity: identity_summary.to_string(),
    }
}

pub(crate) fn top_bar_summary(risk: &Risk, quick: &QuickReference) -> TopBarSummary {
    TopBarSummary {
        risk_badge: format!("{} {}", risk.level.token().to_uppercase(), risk.score),
        offence: truncate(&quick.top_offence, OFFENCE_MAX_CHARS),
        action: truncate(&quick.next_action, ACTION_MAX_CHARS),
        section: truncate(&quick.top_section, SECTION_MAX_CHARS),
        disposal: truncate(&quick.primary_disposal, DISPOSAL_MAX_CHARS),
    }
}

fn compact_gbp(amount: f64) -> String {
    if amount >= 1000.0 && amount % 1000.0 == 0.0 {
        format!("{:.0}k", amount / 1000.0)
    } else {
        format!("{amount:.0}")
    }
}

pub(crate) fn context_chips(facts: &SceneFacts<'_>) -> Vec<String> {
    let scene = facts.scene;
    let contexts = facts.contexts;
    let mut chips = vec![
        format!("Mode: {}", scene.mode.token()),
        format!("Incident: {}", scene.incident_type.token()),
    ];

    if contexts.vehicle_context {
        chips.push("Vehicle context".to_string());
    }
    if contexts.pursuit_context {
        chips.push("Pursuit context".to_string());
    }
    if contexts.drug_context {
        chips.push("Drug context".to_string());
    }
    if scene.s60_authorized {
        chips.push("s60 active".to_string());
    }
    if scene.vehicle_antisocial {
        chips.push("s59 consideration".to_string());
    }
    if facts.cash_above_ceiling() {
        chips.push(format!(
            "Cash over GBP {}",
            compact_gbp(facts.policy.cash_okay_max_gbp)
        ));
    }

    chips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text_and_marks_cuts() {
        assert_eq!(truncate("Failing to stop for police", 42), "Failing to stop for police");

        let cut = truncate("Possession with intent to supply (drug indicators present)", 42);
        assert_eq!(cut.chars().count(), 42);
        assert!(cut.ends_with('…'));
        assert!(cut.starts_with("Possession with intent to supply"));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let text = "£".repeat(10);
        assert_eq!(truncate(&text, 10), text);
        assert_eq!(truncate(&text, 5), "££££…");
    }

    #[test]
    fn compact_gbp_abbreviates_round_thousands() {
        assert_eq!(compact_gbp(10_000.0), "10k");
        assert_eq!(compact_gbp(12_500.0), "12500");
    }
}
