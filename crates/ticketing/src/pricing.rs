use serde::{Deserialize, Serialize};

use boxoffice_core::{AccountId, DomainResult, ValueObject};

use crate::rules::{TicketTally, check_rules, validate_account, validate_lines};
use crate::ticket::{PurchaseRequest, TicketType};

/// What a valid purchase costs and how many seats it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseQuote {
    pub amount_to_pay: u32,
    pub seats_to_reserve: u32,
}

impl ValueObject for PurchaseQuote {}

impl PurchaseQuote {
    pub fn from_tally(tally: &TicketTally) -> Self {
        TicketType::ALL.iter().fold(
            Self {
                amount_to_pay: 0,
                seats_to_reserve: 0,
            },
            |quote, ticket_type| {
                let pricing = ticket_type.pricing();
                let count = tally.count(*ticket_type);
                Self {
                    amount_to_pay: quote
                        .amount_to_pay
                        .saturating_add(count.saturating_mul(pricing.price)),
                    seats_to_reserve: if pricing.occupies_seat {
                        quote.seats_to_reserve.saturating_add(count)
                    } else {
                        quote.seats_to_reserve
                    },
                }
            },
        )
    }
}

/// A request that passed every rule, with its price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedPurchase {
    pub account_id: AccountId,
    pub tally: TicketTally,
    pub quote: PurchaseQuote,
}

/// Validate and price a purchase without touching any collaborator.
///
/// Pure and deterministic: the same request always yields the same result.
pub fn quote(request: &PurchaseRequest) -> DomainResult<PricedPurchase> {
    let account_id = validate_account(request.account_id)?;
    let lines = validate_lines(request.items())?;
    let tally = TicketTally::from_lines(&lines);
    check_rules(&tally)?;

    Ok(PricedPurchase {
        account_id,
        tally,
        quote: PurchaseQuote::from_tally(&tally),
    })
}
