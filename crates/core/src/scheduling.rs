//! The appointment scheduling core.
//!
//! - [`availability`]: open slots on the daily grid for a stylist
//! - [`ledger`]: conflict-checked reservation of a slot
//! - [`lifecycle`]: reading, toggling and deleting existing appointments

pub mod availability;
pub mod ledger;
pub mod lifecycle;

pub use availability::{AvailabilityCalculator, AvailabilityMode, SlotGrid};
pub use ledger::{BookingLedger, LedgerPolicy};
pub use lifecycle::AppointmentManager;
