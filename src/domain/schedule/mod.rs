//! Schedule aggregate
//!
//! A schedule is the bookable unit: a fixed time window on one court.

pub mod model;
pub mod repository;

pub use model::Schedule;
pub use repository::ScheduleRepository;
