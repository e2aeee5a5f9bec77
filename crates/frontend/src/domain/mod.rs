pub mod branches;
pub mod dashboard;
pub mod orders;
pub mod statistics;
pub mod stock;
