pub mod bookingmodel;
pub mod contractormodel;
pub mod disputemodel;
pub mod jobmodel;
pub mod reviewmodel;
