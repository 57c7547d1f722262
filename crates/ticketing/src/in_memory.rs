//! In-memory collaborators for tests/dev.

use std::sync::Mutex;

use thiserror::Error;

use boxoffice_core::AccountId;

use crate::ports::{SeatReservationService, TicketPaymentService};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InMemoryCollaboratorError {
    /// Failure injected through `failing(..)`.
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
    /// Recording failed due to internal lock poisoning.
    #[error("collaborator state poisoned")]
    Poisoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentCall {
    pub account_id: AccountId,
    pub amount: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationCall {
    pub account_id: AccountId,
    pub seats: u32,
}

/// Payment service that records every call it receives.
///
/// - No IO
/// - Calls are recorded even when a failure is injected
#[derive(Debug, Default)]
pub struct RecordingPaymentService {
    calls: Mutex<Vec<PaymentCall>>,
    failure: Option<String>,
}

impl RecordingPaymentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A payment service that rejects every payment with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(reason.into()),
        }
    }

    pub fn calls(&self) -> Vec<PaymentCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl TicketPaymentService for RecordingPaymentService {
    type Error = InMemoryCollaboratorError;

    fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<(), Self::Error> {
        self.calls
            .lock()
            .map_err(|_| InMemoryCollaboratorError::Poisoned)?
            .push(PaymentCall { account_id, amount });

        match &self.failure {
            Some(reason) => Err(InMemoryCollaboratorError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Seat reservation service that records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingSeatReservationService {
    calls: Mutex<Vec<ReservationCall>>,
    failure: Option<String>,
}

impl RecordingSeatReservationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A reservation service that rejects every reservation with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(reason.into()),
        }
    }

    pub fn calls(&self) -> Vec<ReservationCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl SeatReservationService for RecordingSeatReservationService {
    type Error = InMemoryCollaboratorError;

    fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<(), Self::Error> {
        self.calls
            .lock()
            .map_err(|_| InMemoryCollaboratorError::Poisoned)?
            .push(ReservationCall { account_id, seats });

        match &self.failure {
            Some(reason) => Err(InMemoryCollaboratorError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}
