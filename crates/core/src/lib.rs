//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no storage).

pub mod aggregate;
pub mod error;
pub mod money;
pub mod value_object;

pub use aggregate::Aggregate;
pub use error::{DomainError, DomainResult};
pub use money::Money;
pub use value_object::ValueObject;
