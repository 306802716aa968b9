//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! table in the clinic schema. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so the same methods run on a pooled
//! connection for reads and on an open `DatabaseTransaction` for multi-statement writes.

pub mod appointment;
pub mod clinic;
pub mod owner;
pub mod pet;
pub mod report;
pub mod schedule;
pub mod treatment;
pub mod user;
pub mod veterinarian;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Whether a statement failed on a unique index or primary key.
///
/// Uniqueness is enforced by the database; callers map this to the matching domain error.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Whether a statement failed on the unique index covering `column`.
///
/// Matches the column name inside the driver message, which covers both SQLite
/// (`UNIQUE constraint failed: table.column`) and Postgres default constraint names
/// (`table_column_key`).
pub fn is_unique_violation_on(err: &DbErr, column: &str) -> bool {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => message.contains(column),
        _ => false,
    }
}
