//! Move-in and running-cost estimate for a single listing.

use super::property::Property;

pub const DEFAULT_MONTHS: u32 = 6;
pub const DEFAULT_ELECTRICITY: f64 = 15_000.0;
pub const DEFAULT_WATER: f64 = 5_000.0;
pub const DEFAULT_TRANSPORT: f64 = 60_000.0;

/// Monthly living costs the renter expects on top of rent.
#[derive(Clone, Debug, PartialEq)]
pub struct BudgetInputs {
    pub months: u32,
    pub electricity: f64,
    pub water: f64,
    pub transport: f64,
}

impl Default for BudgetInputs {
    fn default() -> Self {
        Self {
            months: DEFAULT_MONTHS,
            electricity: DEFAULT_ELECTRICITY,
            water: DEFAULT_WATER,
            transport: DEFAULT_TRANSPORT,
        }
    }
}

impl BudgetInputs {
    /// Defaults, using the neighborhood's typical transport cost when known.
    pub fn for_property(property: &Property) -> Self {
        let transport = property
            .neighborhood_score()
            .and_then(|score| score.transport_cost)
            .filter(|cost| *cost > 0.0)
            .unwrap_or(DEFAULT_TRANSPORT);
        Self {
            transport,
            ..Self::default()
        }
    }

    pub fn with_months(mut self, months: u32) -> Self {
        self.months = months;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BudgetBreakdown {
    pub months: u32,
    pub monthly_rent: f64,
    pub deposit: f64,
    pub agency_fees: f64,
    pub initial_costs: f64,
    pub monthly_recurring: f64,
    pub total_rent: f64,
    pub total_electricity: f64,
    pub total_water: f64,
    pub total_transport: f64,
    pub total_recurring: f64,
    pub grand_total: f64,
}

pub fn estimate_budget(property: &Property, inputs: &BudgetInputs) -> BudgetBreakdown {
    let months = if inputs.months == 0 {
        DEFAULT_MONTHS
    } else {
        inputs.months
    };
    let span = months as f64;

    let monthly_rent = property.price;
    let deposit = property.effective_deposit();
    let agency_fees = property.effective_fees();
    let initial_costs = deposit + agency_fees + monthly_rent;
    let monthly_recurring = monthly_rent + inputs.electricity + inputs.water + inputs.transport;
    let total_recurring = monthly_recurring * span;

    BudgetBreakdown {
        months,
        monthly_rent,
        deposit,
        agency_fees,
        initial_costs,
        monthly_recurring,
        total_rent: monthly_rent * span,
        total_electricity: inputs.electricity * span,
        total_water: inputs.water * span,
        total_transport: inputs.transport * span,
        total_recurring,
        grand_total: initial_costs + total_recurring,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::{fixtures::listing, Neighborhood, NeighborhoodField, NeighborhoodScore};

    #[test]
    fn six_month_estimate_with_defaults() {
        let property = listing("a", 100_000.0, 2, 1, 50.0);
        let budget = estimate_budget(&property, &BudgetInputs::default());

        assert_eq!(budget.months, 6);
        assert_eq!(budget.initial_costs, 300_000.0);
        assert_eq!(budget.monthly_recurring, 180_000.0);
        assert_eq!(budget.total_rent, 600_000.0);
        assert_eq!(budget.total_transport, 360_000.0);
        assert_eq!(budget.total_recurring, 1_080_000.0);
        assert_eq!(budget.grand_total, 1_380_000.0);
    }

    #[test]
    fn zero_months_falls_back_to_default_span() {
        let property = listing("a", 10_000.0, 0, 0, 0.0);
        let budget = estimate_budget(&property, &BudgetInputs::default().with_months(0));
        assert_eq!(budget.months, DEFAULT_MONTHS);
    }

    #[test]
    fn transport_defaults_to_neighborhood_estimate() {
        let mut property = listing("a", 10_000.0, 0, 0, 0.0);
        assert_eq!(BudgetInputs::for_property(&property).transport, DEFAULT_TRANSPORT);

        property.neighborhood = Some(NeighborhoodField::Detailed(Neighborhood {
            id: "n".to_string(),
            name: "Akwa".to_string(),
            score: Some(NeighborhoodScore {
                transport_cost: Some(25_000.0),
                ..NeighborhoodScore::default()
            }),
        }));
        assert_eq!(BudgetInputs::for_property(&property).transport, 25_000.0);
    }

    #[test]
    fn listed_fees_are_part_of_move_in() {
        let mut property = listing("a", 50_000.0, 0, 0, 0.0);
        property.deposit = Some(100_000.0);
        property.fees = Some(50_000.0);
        let budget = estimate_budget(&property, &BudgetInputs::default().with_months(12));
        assert_eq!(budget.initial_costs, 200_000.0);
        assert_eq!(budget.total_water, 60_000.0);
    }
}
