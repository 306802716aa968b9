//! Request and response DTOs exchanged over HTTP.
//!
//! These types define the JSON wire format only. Server-side domain models live in
//! `server::model` and convert into these at the controller boundary.

pub mod api;
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
