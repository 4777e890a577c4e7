//! Database entities module

pub mod guest;
pub mod reservation;
pub mod schedule;
pub mod tennis_court;

pub use guest::Entity as Guest;
pub use reservation::Entity as Reservation;
pub use schedule::Entity as Schedule;
pub use tennis_court::Entity as TennisCourt;
