pub mod focal;
pub mod grid;
pub mod state;
