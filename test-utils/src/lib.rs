//! PawPoint Test Utils
//!
//! Shared testing utilities for the clinic service. Tests run against an in-memory SQLite
//! database whose schema is generated from the `entity` crate, so no Postgres instance is
//! needed to exercise repositories, services, or the HTTP router.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_pets() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_clinic_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let owner = factory::create_user(db).await?;
//!     let (pet, _) = factory::create_owned_pet(db, owner.user_id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
