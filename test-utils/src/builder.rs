use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Clinic, Pet};
///
/// let test = TestBuilder::new()
///     .with_table(Pet)
///     .with_table(Clinic)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Composite indexes the entity derive cannot express, created after the tables.
    indexes: Vec<IndexCreateStatement>,

    /// Whether to insert the three role lookup rows after creating the schema.
    seed_roles: bool,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            seed_roles: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user, role, and user_role tables and seeds the role lookup rows.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_account_tables(mut self) -> Self {
        self.seed_roles = true;
        self.with_table(User).with_table(Role).with_table(UserRole)
    }

    /// Adds every table of the clinic schema in dependency order.
    ///
    /// Includes the account tables (with seeded roles) and the one-entry-per-weekday
    /// index on `veterinarian_schedule`, so tests see the same constraints as production.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_clinic_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_clinic_tables(self) -> Self {
        let mut builder = self
            .with_account_tables()
            .with_table(Pet)
            .with_table(PetOwner)
            .with_table(Clinic)
            .with_table(Veterinarian)
            .with_table(VeterinarianClinic)
            .with_table(VeterinarianSchedule)
            .with_table(Appointment)
            .with_table(TreatmentRecord);

        builder.indexes.push(
            Index::create()
                .name("idx_veterinarian_schedule_vet_day")
                .table(VeterinarianSchedule)
                .col(entity::veterinarian_schedule::Column::VeterinarianId)
                .col(entity::veterinarian_schedule::Column::Day)
                .unique()
                .to_owned(),
        );

        builder
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        if self.seed_roles {
            setup.seed_roles().await?;
        }

        Ok(setup)
    }
}
