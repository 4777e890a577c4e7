//! Reservation aggregate
//!
//! Contains the Reservation entity, the status state machine, the refund
//! policy, and the repository interface.

pub mod model;
pub mod refund;
pub mod repository;

pub use model::{Reservation, ReservationStatus, ResolutionAction};
pub use refund::refund_amount;
pub use repository::ReservationRepository;
