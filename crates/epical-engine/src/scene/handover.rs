//! Plain-text arrest record handed to investigations once a case is closed at the scene.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::case::Case;
use super::clock::Clock;
use super::domain::DrugType;
use super::normalizer::{coerce_flag, coerce_number};

/// Officer-entered handover details. Blank or missing values fall back to report defaults.
///
/// Numbers and the caution flag are read the way form posts send them: numeric strings parse,
/// unreadable numbers count as zero and `yes`/`on`/`true` tick the box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HandoverForm {
    pub arrest_time: Option<String>,
    pub arrest_location: Option<String>,
    pub arresting_officer: Option<String>,
    pub assisting_officers: Option<String>,
    pub warrant_numbers: Option<String>,
    pub incident_summary: Option<String>,
    pub cell_number: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub custody_minutes: Option<f64>,
    pub custody_behavior: Option<String>,
    pub bwv_reviewer: Option<String>,
    #[serde(deserialize_with = "lenient_flag")]
    pub caution_given: bool,
    pub evidence_review: Option<String>,
    pub arrest_reason_override: Option<String>,
    pub charges_text: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub initial_fine: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub initial_jail_months: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub final_fine: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub final_jail_months: Option<f64>,
    pub authorised_by: Option<String>,
    pub additional_notes: Option<String>,
}

impl HandoverForm {
    /// Pre-fill the form from what the case already knows.
    pub fn suggested(case: &Case) -> Self {
        let scene = &case.scene;
        let policy = &case.city_policy;
        let mut form = Self {
            arrest_location: present(&scene.location).map(str::to_string),
            incident_summary: Some(default_incident_summary(case)),
            charges_text: Some(case.likely_offences.join("; ")),
            ..Self::default()
        };

        if scene.drug_type == DrugType::Cannabis
            && scene.drug_quantity_grams > 0.0
            && scene.drug_quantity_grams <= policy.cannabis_confiscation_max_grams
        {
            form.final_jail_months = Some(0.0);
        }

        let cash = scene.seized_cash_gbp;
        if cash > 0.0 && cash <= policy.cash_okay_max_gbp {
            let fine = (cash * 0.5).round().min(policy.cash_okay_max_gbp);
            form.initial_fine = Some(fine);
            form.final_fine = Some(fine);
        }

        form
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        value => Some(coerce_number(&value).filter(|n| n.is_finite()).unwrap_or(0.0)),
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_flag(&Value::deserialize(deserializer)?))
}

fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn text_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().and_then(present).unwrap_or(fallback)
}

fn default_incident_summary(case: &Case) -> String {
    let mut pieces = vec!["Subject was processed following the linked action-card scene.".to_string()];
    pieces.push(format!(
        "Incident type recorded as {}.",
        case.scene.incident_type.label()
    ));
    if !case.arrest_reasons.is_empty() {
        pieces.push(format!(
            "Arrest necessity indicators included: {}.",
            case.arrest_reasons.join("; ")
        ));
    }
    if let Some(notes) = present(&case.scene.notes) {
        pieces.push(format!("Officer notes: {notes}"));
    }
    pieces.join(" ")
}

fn default_arresting_officer(case: &Case) -> String {
    let officer = &case.scene.officer;
    match (present(&officer.name), present(&officer.collar_number)) {
        (Some(name), Some(collar)) => format!("{name} ({collar})"),
        (Some(name), None) => name.to_string(),
        _ => "Unknown".to_string(),
    }
}

/// Whole pounds with thousands separators, e.g. `£12,345`.
pub fn format_currency(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if rounded < 0.0 {
        format!("-£{grouped}")
    } else {
        format!("£{grouped}")
    }
}

/// Integral values print without a fractional part.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn numbered(lines: &mut Vec<String>, entries: &[String]) {
    if entries.is_empty() {
        lines.push("1. None recorded.".to_string());
        return;
    }
    for (index, entry) in entries.iter().enumerate() {
        lines.push(format!("{}. {entry}", index + 1));
    }
}

pub fn build_handover_log(case: &Case, form: &HandoverForm, clock: &dyn Clock) -> String {
    let scene = &case.scene;
    let policy = &case.city_policy;
    let speed = case.risk.speed_profile;

    let arrest_time = form
        .arrest_time
        .as_deref()
        .and_then(present)
        .map(str::to_string)
        .unwrap_or_else(|| clock.now().format("[%d/%m/%y %H:%M]").to_string());
    let arrest_location = form
        .arrest_location
        .as_deref()
        .and_then(present)
        .or_else(|| present(&scene.location))
        .unwrap_or("Unknown");
    let arresting_officer = form
        .arresting_officer
        .as_deref()
        .and_then(present)
        .map(str::to_string)
        .unwrap_or_else(|| default_arresting_officer(case));
    let incident_summary = form
        .incident_summary
        .as_deref()
        .and_then(present)
        .map(str::to_string)
        .unwrap_or_else(|| default_incident_summary(case));
    let arrest_reasons = match form.arrest_reason_override.as_deref().and_then(present) {
        Some(reason) => vec![reason.to_string()],
        None => case.arrest_reasons.clone(),
    };

    let mut lines = Vec::new();

    lines.push("ARREST DETAILS".to_string());
    lines.push(format!("Date/Time: {arrest_time}"));
    lines.push(format!("Location: {arrest_location}"));
    lines.push(format!("Arresting Officer: {arresting_officer}"));
    lines.push(format!(
        "Assisting Officers: {}",
        text_or(&form.assisting_officers, "None recorded")
    ));
    lines.push(String::new());

    lines.push("INCIDENT SUMMARY".to_string());
    lines.push(incident_summary);
    lines.push(String::new());
    lines.push(format!(
        "Warrant number: {}.",
        text_or(&form.warrant_numbers, "None recorded")
    ));
    lines.push(String::new());

    lines.push("ARREST REASONS".to_string());
    if arrest_reasons.is_empty() {
        lines.push("- None recorded from action card.".to_string());
    } else {
        lines.extend(arrest_reasons.iter().map(|reason| format!("- {reason}")));
    }
    lines.push(String::new());

    lines.push("LEGAL REFERENCES".to_string());
    lines.push(if case.sections.is_empty() {
        "No specific section recorded.".to_string()
    } else {
        case.sections.join("; ")
    });
    lines.push(String::new());

    lines.push("OFFENCES / CHARGES".to_string());
    lines.push(match form.charges_text.as_deref().and_then(present) {
        Some(charges) => charges.to_string(),
        None if case.likely_offences.is_empty() => "No offence text entered.".to_string(),
        None => case.likely_offences.join("; "),
    });
    lines.push(String::new());

    lines.push("DISPOSAL METHOD(S)".to_string());
    for (index, disposal) in case.disposals.iter().enumerate() {
        lines.push(format!(
            "{}. {} | Reason: {} | Ref: {}",
            index + 1,
            disposal.method,
            disposal.reason,
            disposal.uk_reference
        ));
    }
    lines.push(String::new());

    lines.push("CUSTODY DETAILS".to_string());
    lines.push(format!(
        "Cell number: {}",
        text_or(&form.cell_number, "N/A")
    ));
    lines.push(format!(
        "Time in custody: {} minutes.",
        format_number(form.custody_minutes.unwrap_or(0.0))
    ));
    lines.push(format!(
        "Custody behavior: {}",
        text_or(&form.custody_behavior, "No additional behavior notes entered.")
    ));
    lines.push(String::new());

    lines.push("EVIDENCE REVIEW".to_string());
    lines.push(format!(
        "BWV reviewed by: {}.",
        text_or(&form.bwv_reviewer, "Not recorded")
    ));
    lines.push(format!(
        "Review notes: {}",
        text_or(&form.evidence_review, "No additional BWV review notes entered.")
    ));
    lines.push("Action-card evidence checklist:".to_string());
    numbered(&mut lines, &case.evidence);
    lines.push(String::new());

    lines.push("CAUTION".to_string());
    lines.push(format!(
        "Caution delivered: {}",
        if form.caution_given { "Yes" } else { "No" }
    ));
    lines.push(format!("Caution text: {}", case.caution_text));
    lines.push(String::new());

    lines.push("OUTCOME".to_string());
    lines.push(format!(
        "Initial outcome, Fine {} Jail {} months, reduced to Fine {} Jail {} months. Authorised by {}.",
        format_currency(form.initial_fine.unwrap_or(0.0)),
        format_number(form.initial_jail_months.unwrap_or(0.0)),
        format_currency(form.final_fine.unwrap_or(0.0)),
        format_number(form.final_jail_months.unwrap_or(0.0)),
        text_or(&form.authorised_by, "Not recorded")
    ));
    lines.push(String::new());

    lines.push("CITY POLICY NOTES".to_string());
    lines.push(format!(
        "- Speed limit in city is {} mph and motorway is {} mph.",
        format_number(policy.speed_limit_urban_mph),
        format_number(policy.speed_limit_motorway_mph)
    ));
    lines.push(format!(
        "- Recorded scene speed: {} mph (+{} over local limit).",
        format_number(scene.speed_mph),
        format_number(speed.over_limit)
    ));
    lines.push(format!(
        "- Cannabis <= {}g typically routes to confiscation if no aggravating factors.",
        format_number(policy.cannabis_confiscation_max_grams)
    ));
    lines.push(format!(
        "- Cash <= {} is generally acceptable within reason.",
        format_currency(policy.cash_okay_max_gbp)
    ));
    lines.push("- Traffic lights are usually treated as give-way when lane is clear.".to_string());
    lines.push(String::new());

    lines.push("ADDITIONAL NOTES".to_string());
    lines.push(text_or(&form.additional_notes, "None entered.").to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "£0");
        assert_eq!(format_currency(950.0), "£950");
        assert_eq!(format_currency(12_345.0), "£12,345");
        assert_eq!(format_currency(1_234_567.4), "£1,234,567");
        assert_eq!(format_currency(-2500.0), "-£2,500");
    }

    #[test]
    fn numbers_drop_trailing_zero_fraction() {
        assert_eq!(format_number(30.0), "30");
        assert_eq!(format_number(1.5), "1.5");
    }
}
