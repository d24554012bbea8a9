pub mod assistant_service;
pub mod booking_service;
pub mod error;
