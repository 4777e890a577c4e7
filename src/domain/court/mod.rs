//! Tennis court aggregate

pub mod model;
pub mod repository;

pub use model::TennisCourt;
pub use repository::CourtRepository;
