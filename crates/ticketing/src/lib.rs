//! Ticket purchasing domain module.
//!
//! Validates and prices a ticket purchase, then hands the computed amount and
//! seat count to the payment and seat reservation collaborators. Validation and
//! pricing are deterministic domain logic (no IO); the only side effects are the
//! two collaborator calls made by [`TicketService`].

pub mod in_memory;
pub mod ports;
pub mod pricing;
pub mod rules;
pub mod service;
pub mod ticket;

pub use in_memory::{
    InMemoryCollaboratorError, PaymentCall, RecordingPaymentService,
    RecordingSeatReservationService, ReservationCall,
};
pub use ports::{SeatReservationService, TicketPaymentService};
pub use pricing::{PricedPurchase, PurchaseQuote, quote};
pub use rules::{TicketLine, TicketTally};
pub use service::{PurchaseError, PurchaseReceipt, TicketService};
pub use ticket::{
    ADULT_TICKET_PRICE, CHILD_TICKET_PRICE, INFANT_TICKET_PRICE, MAX_TICKETS_PER_PURCHASE,
    PurchaseRequest, TicketPricing, TicketType, TicketTypeRequest, UnknownTicketType,
};
