//! HTTP handlers.
//!
//! Each handler declares the roles it accepts through its `Authorized<_>` argument,
//! checks out one pooled connection, calls a service, and converts the result to a DTO.

pub mod appointment;
pub mod auth;
pub mod clinic;
pub mod health;
pub mod owner;
pub mod pet;
pub mod report;
pub mod schedule;
pub mod treatment;
pub mod user;
pub mod veterinarian;

#[cfg(test)]
mod test;
