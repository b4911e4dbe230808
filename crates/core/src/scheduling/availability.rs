//! # Availability Calculator
//!
//! Enumerates a fixed grid of candidate start times for a day and removes the
//! ones already taken by a stylist's bookings.
//!
//! Two filtering modes exist:
//!
//! - [`AvailabilityMode::Exact`] drops a grid point only when a booking starts
//!   at exactly that time of day. A booking at 09:15 therefore hides nothing,
//!   and a 90 minute booking at 10:00 still leaves 10:30 and 11:00 open.
//! - [`AvailabilityMode::Overlap`] drops every grid point that falls inside a
//!   booking's `[start, end)` interval.
//!
//! Results are always computed from the store at call time.

use std::{str::FromStr, sync::Arc};

use chrono::{Duration, NaiveDate, NaiveTime};
use tracing::debug;
use uuid::Uuid;

use crate::{
    errors::{BookingError, BookingResult},
    models::appointment::Appointment,
    store::AppointmentStore,
};

/// The daily grid of candidate start times, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
    pub open: NaiveTime,
    pub close: NaiveTime,
    pub step: Duration,
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self {
            open: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            close: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
            step: Duration::minutes(30),
        }
    }
}

impl SlotGrid {
    pub fn slots(&self) -> Vec<NaiveTime> {
        let mut slots = Vec::new();
        if self.step <= Duration::zero() {
            return slots;
        }

        let mut current = self.open;
        while current <= self.close {
            slots.push(current);
            let (next, wrapped) = current.overflowing_add_signed(self.step);
            // Stop rather than wrap past midnight.
            if wrapped != 0 {
                break;
            }
            current = next;
        }
        slots
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvailabilityMode {
    #[default]
    Exact,
    Overlap,
}

impl FromStr for AvailabilityMode {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(AvailabilityMode::Exact),
            "overlap" => Ok(AvailabilityMode::Overlap),
            other => Err(BookingError::Validation(format!(
                "Unknown availability mode: {other}"
            ))),
        }
    }
}

/// Grid points not taken by any of `bookings`.
pub fn open_slots(
    grid: &SlotGrid,
    mode: AvailabilityMode,
    bookings: &[Appointment],
) -> Vec<NaiveTime> {
    grid.slots()
        .into_iter()
        .filter(|slot| {
            !bookings.iter().any(|booking| match mode {
                AvailabilityMode::Exact => booking.appointment_time == *slot,
                AvailabilityMode::Overlap => booking.covers(*slot),
            })
        })
        .collect()
}

pub struct AvailabilityCalculator {
    store: Arc<dyn AppointmentStore>,
    grid: SlotGrid,
    mode: AvailabilityMode,
}

impl AvailabilityCalculator {
    pub fn new(store: Arc<dyn AppointmentStore>, mode: AvailabilityMode) -> Self {
        Self {
            store,
            grid: SlotGrid::default(),
            mode,
        }
    }

    /// Open start times for `stylist_id` on `date`, in ascending order.
    pub async fn availability(
        &self,
        stylist_id: Uuid,
        date: NaiveDate,
    ) -> BookingResult<Vec<NaiveTime>> {
        let bookings = self.store.list_appointments(stylist_id, date).await?;
        let bookings: Vec<Appointment> = bookings
            .into_iter()
            .filter(|booking| booking.appointment_date == date)
            .collect();

        let open = open_slots(&self.grid, self.mode, &bookings);
        debug!(
            "Availability for stylist {} on {}: {} booked, {} open",
            stylist_id,
            date,
            bookings.len(),
            open.len()
        );
        Ok(open)
    }
}
