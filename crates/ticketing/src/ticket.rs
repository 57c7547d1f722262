use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use boxoffice_core::ValueObject;

/// Price of one adult ticket, in whole currency units.
pub const ADULT_TICKET_PRICE: u32 = 25;
/// Price of one child ticket, in whole currency units.
pub const CHILD_TICKET_PRICE: u32 = 15;
/// Infants travel free on an adult's lap.
pub const INFANT_TICKET_PRICE: u32 = 0;
/// Upper bound on the number of tickets in a single purchase.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 25;

/// Ticket category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

/// Price and seating rule for one ticket category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketPricing {
    pub price: u32,
    pub occupies_seat: bool,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Pricing table lookup.
    pub const fn pricing(self) -> TicketPricing {
        match self {
            TicketType::Adult => TicketPricing {
                price: ADULT_TICKET_PRICE,
                occupies_seat: true,
            },
            TicketType::Child => TicketPricing {
                price: CHILD_TICKET_PRICE,
                occupies_seat: true,
            },
            TicketType::Infant => TicketPricing {
                price: INFANT_TICKET_PRICE,
                occupies_seat: false,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl core::fmt::Display for TicketType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown ticket type: {0}")]
pub struct UnknownTicketType(pub String);

impl FromStr for TicketType {
    type Err = UnknownTicketType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADULT" => Ok(TicketType::Adult),
            "CHILD" => Ok(TicketType::Child),
            "INFANT" => Ok(TicketType::Infant),
            _ => Err(UnknownTicketType(s.to_string())),
        }
    }
}

/// How many tickets of one category are requested.
///
/// The type is optional because requests arrive from outside the domain: a
/// missing or unrecognized type is a rejectable request, not a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    #[serde(rename = "type", default, deserialize_with = "lenient_ticket_type")]
    ticket_type: Option<TicketType>,
    #[serde(default)]
    count: i32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: i32) -> Self {
        Self {
            ticket_type: Some(ticket_type),
            count,
        }
    }

    /// A request whose category is unknown.
    pub fn untyped(count: i32) -> Self {
        Self {
            ticket_type: None,
            count,
        }
    }

    pub fn ticket_type(&self) -> Option<TicketType> {
        self.ticket_type
    }

    pub fn count(&self) -> i32 {
        self.count
    }
}

impl ValueObject for TicketTypeRequest {}

fn lenient_ticket_type<'de, D>(deserializer: D) -> Result<Option<TicketType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// One purchase call: an account plus the ticket requests to buy for it.
///
/// Every field may be absent so that malformed input can be represented and
/// rejected with the right reason instead of failing to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub items: Option<Vec<Option<TicketTypeRequest>>>,
}

impl PurchaseRequest {
    pub fn new(account_id: i64, items: impl IntoIterator<Item = TicketTypeRequest>) -> Self {
        Self {
            account_id: Some(account_id),
            items: Some(items.into_iter().map(Some).collect()),
        }
    }

    pub fn items(&self) -> Option<&[Option<TicketTypeRequest>]> {
        self.items.as_deref()
    }
}
