/// Booking, reading, toggling and deleting appointments
pub mod appointment;
/// Open slots on a stylist's day
pub mod availability;
