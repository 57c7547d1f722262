//! Ticket purchase pipeline.
//!
//! ```text
//! PurchaseRequest
//!   ↓
//! 1. Validate + price (pure, see `pricing::quote`)
//!   ↓
//! 2. Take payment            (TicketPaymentService)
//!   ↓
//! 3. Reserve seats           (SeatReservationService)
//! ```
//!
//! Neither collaborator is called unless step 1 succeeds. Steps 2 and 3 are not
//! transactional: when reservation fails after payment, the payment stands and
//! the caller receives [`PurchaseError::SeatReservation`].

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use boxoffice_core::{AccountId, PurchaseRejection, ValueObject};

use crate::ports::{SeatReservationService, TicketPaymentService};
use crate::pricing::quote;
use crate::ticket::PurchaseRequest;

/// Outcome of a completed purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub account_id: AccountId,
    pub amount_paid: u32,
    pub seats_reserved: u32,
}

impl ValueObject for PurchaseReceipt {}

#[derive(Debug, thiserror::Error)]
pub enum PurchaseError<P, S>
where
    P: std::error::Error + 'static,
    S: std::error::Error + 'static,
{
    /// The request broke a business rule. No collaborator was called.
    #[error(transparent)]
    Rejected(#[from] PurchaseRejection),

    /// The payment collaborator failed. No seats were reserved.
    #[error("payment failed")]
    Payment(#[source] P),

    /// Seat reservation failed after payment was taken. The payment is not
    /// reversed.
    #[error("seat reservation failed after payment was taken")]
    SeatReservation(#[source] S),
}

impl<P, S> PurchaseError<P, S>
where
    P: std::error::Error + 'static,
    S: std::error::Error + 'static,
{
    pub fn rejection(&self) -> Option<PurchaseRejection> {
        match self {
            Self::Rejected(rejection) => Some(*rejection),
            _ => None,
        }
    }

    /// True when money was taken but no seats were reserved.
    pub fn is_partially_completed(&self) -> bool {
        matches!(self, Self::SeatReservation(_))
    }
}

/// Validates, prices and dispatches ticket purchases.
///
/// Holds no state besides its two collaborators, so one instance can serve
/// concurrent purchases.
#[derive(Debug)]
pub struct TicketService<P, S> {
    payments: P,
    reservations: S,
}

impl<P, S> TicketService<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    pub fn new(payments: P, reservations: S) -> Self {
        Self {
            payments,
            reservations,
        }
    }

    pub fn payments(&self) -> &P {
        &self.payments
    }

    pub fn reservations(&self) -> &S {
        &self.reservations
    }

    pub fn purchase_tickets(
        &self,
        request: &PurchaseRequest,
    ) -> Result<PurchaseReceipt, PurchaseError<P::Error, S::Error>> {
        let priced = quote(request).map_err(|rejection| {
            debug!(
                account_id = ?request.account_id,
                code = rejection.code(),
                reason = %rejection,
                "purchase rejected"
            );
            PurchaseError::Rejected(rejection)
        })?;

        let account_id = priced.account_id;
        let amount = priced.quote.amount_to_pay;
        let seats = priced.quote.seats_to_reserve;
        info!(
            %account_id,
            adults = priced.tally.adults,
            children = priced.tally.children,
            infants = priced.tally.infants,
            amount,
            seats,
            "purchase priced"
        );

        self.payments
            .make_payment(account_id, amount)
            .map_err(PurchaseError::Payment)?;
        info!(%account_id, amount, "payment taken");

        if let Err(e) = self.reservations.reserve_seat(account_id, seats) {
            error!(
                %account_id,
                amount,
                seats,
                error = %e,
                "seat reservation failed after payment was taken"
            );
            return Err(PurchaseError::SeatReservation(e));
        }
        info!(%account_id, seats, "seats reserved");

        Ok(PurchaseReceipt {
            account_id,
            amount_paid: amount,
            seats_reserved: seats,
        })
    }
}
