pub mod assistant;
pub mod bookings;
pub mod contractors;
pub mod disputes;
pub mod jobs;
pub mod reviews;
