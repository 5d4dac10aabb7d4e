pub mod budget_panel;
pub mod neighborhood_card;
pub mod property_card;
pub mod toast;
pub mod value_badge;
