//! Schedule slot endpoints

pub mod dto;
pub mod handlers;

pub use handlers::ScheduleAppState;
