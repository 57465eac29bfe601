//! Console views, one module per screen of the monitoring dashboard.

pub mod dashboard;
pub mod messages;
pub mod send;
pub mod statistics;
