//! Value object trait: equality by value, not identity.
//!
//! Ticket requests, quotes and receipts have **no identity**: two of them with
//! the same attribute values are the same thing.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. The bounds keep them cheap to copy around, comparable in
/// assertions and printable in logs.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Quote {
///     amount: u32,
///     seats: u32,
/// }
///
/// impl ValueObject for Quote {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
