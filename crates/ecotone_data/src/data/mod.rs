//! Plain data records for the ecosystem model.

pub mod individual;
pub mod report;
