pub mod fleet_report;
pub mod models;
pub mod uptime;
