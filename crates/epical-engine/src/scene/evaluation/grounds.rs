use super::super::case::{Contexts, Grounds, GroundsLevel};
use super::super::domain::{DrugPackaging, Scene};
use super::config::WeightTables;

pub(crate) fn assess_grounds(scene: &Scene, contexts: &Contexts, weights: &WeightTables) -> Grounds {
    let mut score = 0;
    let mut detail = Vec::new();

    for ground in &scene.grounds {
        let points = weights.ground(*ground);
        if points > 0 {
            score += points;
            detail.push(format!("{} (+{points})", ground.token()));
        }
    }

    let strong_count = scene
        .grounds
        .iter()
        .filter(|ground| ground.is_strong())
        .count() as u32;

    if scene.s60_authorized {
        score += 1;
        detail.push("s60 authorised (+1)".to_string());
    }
    if scene.weapon_seen {
        score += 2;
        detail.push("weapon seen (+2)".to_string());
    }

    let level = GroundsLevel::from_score(score);

    Grounds {
        score,
        strong_count,
        level,
        detail,
        summary: level.summary().to_string(),
        drug_grounded: contexts.has_drug_ground
            || scene.drug_quantity_grams > 0.0
            || scene.drug_packaging != DrugPackaging::None,
    }
}
