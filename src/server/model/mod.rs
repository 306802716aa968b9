//! Domain models and operation parameters.
//!
//! Repositories convert entity rows into these types, services operate on them, and
//! controllers convert them into DTOs. Parameter types carry request input that has
//! already been normalized and checked at the boundary.

pub mod appointment;
pub mod auth;
pub mod clinic;
pub mod owner;
pub mod pet;
pub mod report;
pub mod schedule;
pub mod treatment;
pub mod user;
pub mod veterinarian;
