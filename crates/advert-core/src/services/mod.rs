//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod advert_service;
mod pagination;

pub use advert_service::AdvertService;
pub use pagination::paginate;
