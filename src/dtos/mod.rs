pub mod assistantdtos;
pub mod bookingdtos;
pub mod contractordtos;
pub mod disputedtos;
pub mod jobdtos;
pub mod reviewdtos;
