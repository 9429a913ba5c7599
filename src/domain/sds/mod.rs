//! SDS data contracts exchanged with the time-series service.
pub mod model;
