pub mod bookingdb;
pub mod contractordb;
pub mod db;
pub mod disputedb;
pub mod jobdb;
pub mod reviewdb;
