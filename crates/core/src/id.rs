//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::PurchaseRejection;

/// Identifier of a purchasing account.
///
/// Always strictly positive. The only way to obtain one is through
/// [`AccountId::new`] (or the `TryFrom`/`FromStr` impls built on it), so a value
/// of this type is proof the account id check has passed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(raw: i64) -> Result<Self, PurchaseRejection> {
        if raw <= 0 {
            return Err(PurchaseRejection::InvalidAccountId);
        }
        Ok(Self(raw))
    }

    /// Validate an account id that may be missing altogether.
    pub fn from_optional(raw: Option<i64>) -> Result<Self, PurchaseRejection> {
        raw.ok_or(PurchaseRejection::InvalidAccountId)
            .and_then(Self::new)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = PurchaseRejection;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for i64 {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

impl FromStr for AccountId {
    type Err = PurchaseRejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<i64>()
            .map_err(|_| PurchaseRejection::InvalidAccountId)?;
        Self::new(raw)
    }
}
