//! Domain layer
//!
//! Entities, repository traits, the reservation state machine and refund
//! policy, the domain error taxonomy, and the clock seam.

pub mod clock;
pub mod court;
pub mod error;
pub mod guest;
pub mod repositories;
pub mod reservation;
pub mod schedule;

pub use clock::{Clock, SystemClock};
pub use court::TennisCourt;
pub use error::DomainError;
pub use guest::Guest;
pub use repositories::{DomainResult, RepositoryProvider};
pub use reservation::{refund_amount, Reservation, ReservationStatus, ResolutionAction};
pub use schedule::Schedule;
