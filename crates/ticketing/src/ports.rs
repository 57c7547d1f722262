//! Collaborator ports: the payment gateway and the seat booking backend.
//!
//! Both live outside this crate. The service calls each at most once per
//! purchase, payment first, and never retries or compensates; any error a
//! collaborator returns is handed back to the caller unchanged.

use std::sync::Arc;

use boxoffice_core::AccountId;

/// Takes payment for a purchase.
pub trait TicketPaymentService: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<(), Self::Error>;
}

/// Reserves seats for a purchase.
pub trait SeatReservationService: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<(), Self::Error>;
}

impl<T> TicketPaymentService for Arc<T>
where
    T: TicketPaymentService + ?Sized,
{
    type Error = T::Error;

    fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<(), Self::Error> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T> SeatReservationService for Arc<T>
where
    T: SeatReservationService + ?Sized,
{
    type Error = T::Error;

    fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<(), Self::Error> {
        (**self).reserve_seat(account_id, seats)
    }
}
