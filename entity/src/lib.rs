//! SeaORM entity models for the clinic schema.
//!
//! One module per table. Column names match the migration crate so that the same models
//! work against Postgres in production and against the in-memory sqlite schema that
//! `test-utils` builds from these entities.

pub mod prelude;

pub mod appointment;
pub mod clinic;
pub mod pet;
pub mod pet_owner;
pub mod role;
pub mod treatment_record;
pub mod user;
pub mod user_role;
pub mod veterinarian;
pub mod veterinarian_clinic;
pub mod veterinarian_schedule;
