//! Business logic services

pub mod court;
pub mod guest;
pub mod reservation;
pub mod schedule;

pub use court::CourtService;
pub use guest::GuestService;
pub use reservation::ReservationService;
pub use schedule::ScheduleService;
