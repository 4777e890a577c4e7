//! Application layer
//!
//! Services orchestrating domain rules over the repository traits.

pub mod services;

pub use services::{CourtService, GuestService, ReservationService, ScheduleService};
