//! Daily gut health scoring for pets.
//!
//! [`health::evaluate`] turns one day's observations into a [`models::HealthScore`];
//! the remaining modules build histories, recommendations and reports on top.

pub mod health;
pub mod history;
pub mod ingest;
pub mod models;
pub mod recommendations;
pub mod report;
pub mod telemetry;
