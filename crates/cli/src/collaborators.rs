//! Stand-in collaborators for running the purchase flow locally.
//!
//! They log the call they would forward and always succeed.

use std::convert::Infallible;

use boxoffice_core::AccountId;
use boxoffice_ticketing::{SeatReservationService, TicketPaymentService};

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingPaymentService;

impl TicketPaymentService for LoggingPaymentService {
    type Error = Infallible;

    fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<(), Self::Error> {
        tracing::info!(%account_id, amount, "payment gateway: charge");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSeatReservationService;

impl SeatReservationService for LoggingSeatReservationService {
    type Error = Infallible;

    fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<(), Self::Error> {
        tracing::info!(%account_id, seats, "seat booking: reserve");
        Ok(())
    }
}
