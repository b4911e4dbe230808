pub mod appointment;
pub mod salon;
pub mod time_slot;
pub mod user;
