//! `service` crate — the request-to-persistence mapping for pets.
//!
//! [`PetService`] turns each inbound operation into one call (two for
//! updates) against an injected [`db::PetStore`].  HTTP concerns live in the
//! `api` crate.

pub mod error;
pub mod outcome;
pub mod pets;

pub use error::ServiceError;
pub use outcome::{Message, SearchOutcome};
pub use pets::PetService;

#[cfg(test)]
mod service_tests;
