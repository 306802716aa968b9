//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Role scoping and the clinic's consistency rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Every write runs its checks and statements in one
//!   transaction that commits on success and rolls back on any error

pub mod appointment;
pub mod auth;
pub mod clinic;
pub mod owner;
pub mod pet;
pub mod report;
pub mod schedule;
pub mod treatment;
pub mod user;
pub mod validator;
pub mod veterinarian;

#[cfg(test)]
mod test;
