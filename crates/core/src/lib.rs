//! `boxoffice-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the box office
//! crates (no IO, no logging, no collaborators).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainResult, PurchaseRejection};
pub use id::AccountId;
pub use value_object::ValueObject;
