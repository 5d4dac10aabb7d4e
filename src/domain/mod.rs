//! Listing model, comparison shortlist, favorites and value ranking live here.

pub mod budget;
pub mod comparison;
pub mod favorites;
pub mod property;
pub mod scoring;
pub mod selection;

#[allow(unused_imports)]
pub use budget::{estimate_budget, BudgetBreakdown, BudgetInputs};
#[allow(unused_imports)]
pub use comparison::{comparison_sections, format_money, CompareRow, CompareSection};
pub use favorites::FavoriteIds;
#[allow(unused_imports)]
pub use property::{
    NamedRef, Neighborhood, NeighborhoodField, NeighborhoodScore, Property, PropertyId,
};
#[allow(unused_imports)]
pub use scoring::{score_selection, ValueReport, ValueScore};
#[allow(unused_imports)]
pub use selection::{AddRejection, SelectionSetStore, MAX_COMPARE};
