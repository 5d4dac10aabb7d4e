pub mod browse;
pub mod compare;
pub mod favorites;

pub use browse::BrowsePage;
pub use compare::ComparePage;
pub use favorites::FavoritesPage;
