//! Purchase validation rules.
//!
//! Validation runs in fixed stages and stops at the first failure, so exactly
//! one rejection reason is ever surfaced:
//!
//! ```text
//! account id
//!   ↓
//! request structure (every entry: present → typed → count in range)
//!   ↓
//! adult present → total within limit → infants ≤ adults
//! ```
//!
//! The structural stage scans the whole list before any aggregate rule runs, so
//! a malformed entry is reported even when it sits behind a limit violation.

use boxoffice_core::{AccountId, DomainResult, PurchaseRejection};

use crate::ticket::{MAX_TICKETS_PER_PURCHASE, TicketType, TicketTypeRequest};

/// A ticket request that passed structural validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketLine {
    pub ticket_type: TicketType,
    pub count: u32,
}

pub fn validate_account(raw: Option<i64>) -> DomainResult<AccountId> {
    AccountId::from_optional(raw)
}

pub fn validate_lines(items: Option<&[Option<TicketTypeRequest>]>) -> DomainResult<Vec<TicketLine>> {
    match items {
        Some(items) if !items.is_empty() => items
            .iter()
            .map(|item| validate_line(item.as_ref()))
            .collect(),
        _ => Err(PurchaseRejection::InvalidTicketRequest),
    }
}

fn validate_line(item: Option<&TicketTypeRequest>) -> DomainResult<TicketLine> {
    let request = item.ok_or(PurchaseRejection::InvalidTicketRequest)?;
    let ticket_type = request
        .ticket_type()
        .ok_or(PurchaseRejection::InvalidTicketType)?;

    // A single line can never exceed the whole-purchase limit.
    let count = u32::try_from(request.count())
        .ok()
        .filter(|count| (1..=MAX_TICKETS_PER_PURCHASE).contains(count))
        .ok_or(PurchaseRejection::InvalidTicketCount)?;

    Ok(TicketLine { ticket_type, count })
}

/// Ticket totals per category across a whole purchase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketTally {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl TicketTally {
    pub fn from_lines(lines: &[TicketLine]) -> Self {
        lines.iter().fold(Self::default(), |mut tally, line| {
            let slot = match line.ticket_type {
                TicketType::Adult => &mut tally.adults,
                TicketType::Child => &mut tally.children,
                TicketType::Infant => &mut tally.infants,
            };
            *slot = slot.saturating_add(line.count);
            tally
        })
    }

    pub fn count(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adults,
            TicketType::Child => self.children,
            TicketType::Infant => self.infants,
        }
    }

    pub fn total(&self) -> u32 {
        TicketType::ALL
            .iter()
            .fold(0u32, |acc, t| acc.saturating_add(self.count(*t)))
    }
}

/// An aggregate rule over the whole purchase.
pub type Rule = fn(&TicketTally) -> DomainResult<()>;

/// Aggregate rules, in the order they are checked.
pub const PURCHASE_RULES: [Rule; 3] = [
    require_adult,
    within_ticket_limit,
    infants_have_an_adult,
];

pub fn check_rules(tally: &TicketTally) -> DomainResult<()> {
    PURCHASE_RULES.iter().try_for_each(|rule| rule(tally))
}

fn require_adult(tally: &TicketTally) -> DomainResult<()> {
    if tally.adults == 0 {
        return Err(PurchaseRejection::AdultRequired);
    }
    Ok(())
}

fn within_ticket_limit(tally: &TicketTally) -> DomainResult<()> {
    if tally.total() > MAX_TICKETS_PER_PURCHASE {
        return Err(PurchaseRejection::TooManyTickets);
    }
    Ok(())
}

fn infants_have_an_adult(tally: &TicketTally) -> DomainResult<()> {
    if tally.infants > tally.adults {
        return Err(PurchaseRejection::NotEnoughAdultsForInfants);
    }
    Ok(())
}
