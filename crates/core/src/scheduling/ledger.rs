//! # Booking Ledger
//!
//! Reserves a slot for a stylist. The ledger is the only writer of new
//! appointments and upholds the core invariant: at most one appointment per
//! stylist per start instant.
//!
//! The explicit lookup in step 4 gives a friendly early answer, but the
//! guarantee itself comes from the store, which must reject a duplicate
//! `(stylist, start)` on insert. A reservation that loses that race surfaces
//! as the same [`BookingError::Conflict`] as one caught by the lookup.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    errors::{BookingError, BookingResult, CONFLICT_MESSAGE},
    models::appointment::{Appointment, BookingRequest, CreateAppointmentRequest, NewAppointment},
    store::AppointmentStore,
};

/// Optional checks applied on top of the mandatory reservation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerPolicy {
    /// Require the requested service to be in the stylist's offered set.
    pub enforce_service_offering: bool,
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            enforce_service_offering: true,
        }
    }
}

pub struct BookingLedger {
    store: Arc<dyn AppointmentStore>,
    policy: LedgerPolicy,
}

impl BookingLedger {
    pub fn new(store: Arc<dyn AppointmentStore>, policy: LedgerPolicy) -> Self {
        Self { store, policy }
    }

    /// Validates a raw request and reserves the slot for `customer_id`.
    ///
    /// `now` is the submission time the future-only rule is checked against.
    ///
    /// # Errors
    ///
    /// * `BookingError::Validation` - missing or malformed fields, a start in
    ///   the past, or a service the stylist does not offer
    /// * `BookingError::NotFound` - unknown service, or unknown stylist when
    ///   the offering policy is enforced
    /// * `BookingError::Conflict` - the stylist already has an appointment
    ///   starting at that instant
    /// * `BookingError::Database` - the store failed; safe to retry
    pub async fn reserve(
        &self,
        customer_id: Uuid,
        request: CreateAppointmentRequest,
        now: NaiveDateTime,
    ) -> BookingResult<Appointment> {
        let request = BookingRequest::try_from(request)?;
        self.reserve_validated(customer_id, request, now).await
    }

    pub async fn reserve_validated(
        &self,
        customer_id: Uuid,
        request: BookingRequest,
        now: NaiveDateTime,
    ) -> BookingResult<Appointment> {
        let start = request.slot.instant();
        if start <= now {
            debug!("Rejected booking in the past: start={}, now={}", start, now);
            return Err(BookingError::Validation(
                "Appointment must be in the future".to_string(),
            ));
        }

        if self
            .store
            .find_appointment(request.stylist_id, start)
            .await?
            .is_some()
        {
            debug!(
                "Rejected booking: stylist {} already booked at {}",
                request.stylist_id, start
            );
            return Err(BookingError::Conflict(CONFLICT_MESSAGE.to_string()));
        }

        let service = self
            .store
            .get_service(request.service_id)
            .await?
            .ok_or_else(|| BookingError::NotFound("Service not found".to_string()))?;

        if self.policy.enforce_service_offering {
            let stylist = self
                .store
                .get_stylist(request.stylist_id)
                .await?
                .ok_or_else(|| BookingError::NotFound("Stylist not found".to_string()))?;

            if !stylist.offers(service.id) {
                return Err(BookingError::Validation(
                    "This stylist doesn't offer the selected service".to_string(),
                ));
            }
        }

        if service.duration_minutes <= 0 {
            return Err(BookingError::Validation(format!(
                "Service {} has no valid duration",
                service.id
            )));
        }
        let end = start + Duration::minutes(i64::from(service.duration_minutes));

        let appointment = self
            .store
            .insert_appointment(NewAppointment {
                customer_id,
                stylist_id: request.stylist_id,
                service_id: service.id,
                slot: request.slot,
                end_datetime: end,
                notes: request.notes,
            })
            .await?;

        info!(
            "Reserved appointment {} for stylist {} at {}",
            appointment.id, appointment.stylist_id, appointment.start_datetime
        );
        Ok(appointment)
    }
}
