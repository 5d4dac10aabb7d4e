//! Value-for-money ranking of compared listings.

use std::collections::HashMap;

use super::property::{Property, PropertyId};

const BEDROOM_WEIGHT: f64 = 20.0;
const BATHROOM_WEIGHT: f64 = 15.0;
const AREA_WEIGHT: f64 = 0.5;
const FURNISHED_BONUS: f64 = 10.0;
const AIR_CONDITIONED_BONUS: f64 = 10.0;
const PARKING_BONUS: f64 = 5.0;
const SECURITY_BONUS: f64 = 10.0;
const INTERNET_BONUS: f64 = 5.0;
const NEIGHBORHOOD_WEIGHT: f64 = 10.0;

/// Desirability is expressed per this many currency units of move-in cost.
const COST_UNIT: f64 = 1000.0;

/// A winner is only named when at least this many listings are compared.
pub const MIN_RANKED: usize = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct ValueScore {
    pub property_id: PropertyId,
    pub title: String,
    pub total_cost: f64,
    pub desirability: f64,
    /// Desirability per 1000 of move-in cost, rounded to 2 decimals.
    /// `None` when the listing has no positive cost to divide by.
    pub value: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueReport {
    /// One entry per input listing, in input order.
    pub scores: Vec<ValueScore>,
    pub best_value: Option<PropertyId>,
}

impl ValueReport {
    pub fn score_for(&self, property_id: &str) -> Option<&ValueScore> {
        self.scores
            .iter()
            .find(|score| score.property_id == property_id)
    }

    pub fn best(&self) -> Option<&ValueScore> {
        self.best_value
            .as_deref()
            .and_then(|id| self.score_for(id))
    }

    pub fn is_best(&self, property_id: &str) -> bool {
        self.best_value.as_deref() == Some(property_id)
    }

    /// Ranked scores keyed by listing id. Unpriced listings are left out.
    pub fn value_map(&self) -> HashMap<PropertyId, f64> {
        self.scores
            .iter()
            .filter_map(|score| score.value.map(|value| (score.property_id.clone(), value)))
            .collect()
    }
}

pub fn total_cost(property: &Property) -> f64 {
    property.move_in_cost()
}

pub fn desirability(property: &Property) -> f64 {
    let flag = |set: bool, bonus: f64| if set { bonus } else { 0.0 };

    property.bedrooms as f64 * BEDROOM_WEIGHT
        + property.bathrooms as f64 * BATHROOM_WEIGHT
        + property.area * AREA_WEIGHT
        + flag(property.furnished, FURNISHED_BONUS)
        + flag(property.air_conditioned, AIR_CONDITIONED_BONUS)
        + flag(property.parking, PARKING_BONUS)
        + flag(property.security, SECURITY_BONUS)
        + flag(property.internet, INTERNET_BONUS)
        + property.neighborhood_overall() * NEIGHBORHOOD_WEIGHT
}

pub fn value_score(property: &Property) -> Option<f64> {
    let cost = total_cost(property);
    if !cost.is_finite() || cost <= 0.0 {
        return None;
    }
    Some(round_cents(desirability(property) / (cost / COST_UNIT)))
}

/// Rounds to two decimals, halves away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scores every listing and names the best value among the priced ones.
/// Equal scores keep the earlier listing.
pub fn score_selection(properties: &[Property]) -> ValueReport {
    let scores: Vec<ValueScore> = properties
        .iter()
        .map(|property| ValueScore {
            property_id: property.id.clone(),
            title: property.title.clone(),
            total_cost: total_cost(property),
            desirability: desirability(property),
            value: value_score(property),
        })
        .collect();

    let best_value = if scores.len() < MIN_RANKED {
        None
    } else {
        let mut best: Option<(&ValueScore, f64)> = None;
        for score in &scores {
            let Some(value) = score.value else {
                continue;
            };
            match best {
                Some((_, top)) if value <= top => {}
                _ => best = Some((score, value)),
            }
        }
        best.map(|(score, _)| score.property_id.clone())
    };

    ValueReport { scores, best_value }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::property::fixtures::{listing, rated};

    fn pair() -> Vec<Property> {
        let a = listing("a", 100_000.0, 2, 1, 50.0);
        let mut b = listing("b", 150_000.0, 3, 2, 80.0);
        b.furnished = true;
        b.security = true;
        vec![a, b]
    }

    #[test]
    fn larger_furnished_listing_wins() {
        let report = score_selection(&pair());

        let a = report.score_for("a").unwrap();
        assert_eq!(a.total_cost, 300_000.0);
        assert_eq!(a.desirability, 80.0);
        assert_eq!(a.value, Some(0.27));

        let b = report.score_for("b").unwrap();
        assert_eq!(b.total_cost, 450_000.0);
        assert_eq!(b.desirability, 150.0);
        assert_eq!(b.value, Some(0.33));

        assert_eq!(report.best_value.as_deref(), Some("b"));
        assert!(report.is_best("b"));
        assert_eq!(report.best().map(|s| s.value), Some(Some(0.33)));
    }

    #[test]
    fn every_amenity_and_neighborhood_counts() {
        let mut property = listing("x", 100_000.0, 0, 0, 0.0);
        property.furnished = true;
        property.air_conditioned = true;
        property.parking = true;
        property.security = true;
        property.internet = true;
        property.neighborhood = Some(rated(4.0));
        assert_eq!(desirability(&property), 80.0);
    }

    #[test]
    fn single_listing_has_no_winner() {
        let report = score_selection(&pair()[..1]);
        assert_eq!(report.scores.len(), 1);
        assert_eq!(report.best_value, None);
    }

    #[test]
    fn empty_selection_scores_nothing() {
        assert_eq!(score_selection(&[]), ValueReport::default());
    }

    #[test]
    fn ties_keep_first_listing() {
        let first = listing("first", 100_000.0, 2, 1, 50.0);
        let second = listing("second", 100_000.0, 2, 1, 50.0);
        let report = score_selection(&[first.clone(), second.clone()]);
        assert_eq!(report.best_value.as_deref(), Some("first"));

        let report = score_selection(&[second, first]);
        assert_eq!(report.best_value.as_deref(), Some("second"));
    }

    #[test]
    fn scoring_is_repeatable() {
        let properties = pair();
        assert_eq!(score_selection(&properties), score_selection(&properties));
    }

    #[test]
    fn free_listing_is_unpriced_and_unranked() {
        let mut free = listing("free", 0.0, 5, 3, 200.0);
        free.deposit = Some(0.0);
        let paid = listing("paid", 100_000.0, 1, 1, 20.0);
        let report = score_selection(&[free, paid]);

        assert_eq!(report.score_for("free").unwrap().value, None);
        assert_eq!(report.best_value.as_deref(), Some("paid"));
        assert!(!report.value_map().contains_key("free"));
    }

    #[test]
    fn all_unpriced_has_no_winner() {
        let mut a = listing("a", 0.0, 1, 1, 10.0);
        a.deposit = Some(0.0);
        let mut b = a.clone();
        b.id = "b".to_string();
        assert_eq!(score_selection(&[a, b]).best_value, None);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(0.2666), 0.27);
        assert_eq!(round_cents(1.0), 1.0);
    }

    #[test]
    fn value_map_holds_rounded_scores() {
        let map = score_selection(&pair()).value_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], 0.27);
        assert_eq!(map["b"], 0.33);
    }
}
