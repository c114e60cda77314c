pub mod aggregate;
pub mod query;
pub mod sort;
pub mod state;
