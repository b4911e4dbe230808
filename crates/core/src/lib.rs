//! # SalonBook Core
//!
//! Domain types and scheduling logic for the SalonBook appointment service.
//! Nothing in this crate performs I/O directly: persistence and notification
//! are reached through the [`store::AppointmentStore`] and
//! [`notify::Notifier`] traits, which are injected at construction time.

pub mod errors;
pub mod models;
pub mod notify;
pub mod scheduling;
pub mod store;
