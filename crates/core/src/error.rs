//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, PurchaseRejection>;

/// Why a ticket purchase was refused.
///
/// Rejections are deterministic caller errors: retrying the same request yields
/// the same rejection. The `Display` output is the human-readable reason that is
/// surfaced to the caller, so the wording is part of the contract.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurchaseRejection {
    /// The account id was absent, zero or negative.
    #[error("Invalid account id")]
    InvalidAccountId,

    /// The request list was absent or empty, or one of its entries was absent.
    #[error("Invalid ticket request")]
    InvalidTicketRequest,

    /// A request carried no (or an unrecognized) ticket type.
    #[error("Invalid type of ticket requested")]
    InvalidTicketType,

    /// A request asked for a number of tickets outside `1..=MAX_TICKETS_PER_PURCHASE`.
    #[error("Invalid number of tickets requested")]
    InvalidTicketCount,

    /// No adult ticket was part of the purchase.
    #[error("An adult ticket purchase is required")]
    AdultRequired,

    /// The purchase exceeds the per-purchase ticket limit.
    #[error("Too many tickets")]
    TooManyTickets,

    /// More infants than adults: every infant sits on an adult's lap.
    #[error("There are not enough adults for infants to seat")]
    NotEnoughAdultsForInfants,
}

impl PurchaseRejection {
    /// Stable machine-readable code, used in structured logs.
    pub fn code(self) -> &'static str {
        match self {
            Self::InvalidAccountId => "invalid_account_id",
            Self::InvalidTicketRequest => "invalid_ticket_request",
            Self::InvalidTicketType => "invalid_ticket_type",
            Self::InvalidTicketCount => "invalid_ticket_count",
            Self::AdultRequired => "adult_required",
            Self::TooManyTickets => "too_many_tickets",
            Self::NotEnoughAdultsForInfants => "not_enough_adults_for_infants",
        }
    }
}
