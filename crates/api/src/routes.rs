/// Booking and appointment lifecycle endpoints
pub mod appointment;
/// Stylist availability endpoints
pub mod availability;
/// Liveness and version endpoints
pub mod health;
