//! Factory methods for creating test data.
//!
//! Each table has a factory module with a `*Factory` builder for customization and a
//! `create_*` function for quick default creation. Factories expect the schema created by
//! `TestBuilder::with_clinic_tables()` (or the subset the entity needs).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::create_user(&db).await?;
//! let (pet, link) = factory::create_owned_pet(&db, owner.user_id).await?;
//!
//! // Everything an appointment needs, wired together
//! let scenario = factory::helpers::create_appointment_scenario(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let vet_user = factory::user::UserFactory::new(&db)
//!     .email("vet@example.com")
//!     .role("veterinarian")
//!     .build()
//!     .await?;
//! ```

pub mod appointment;
pub mod clinic;
pub mod helpers;
pub mod pet;
pub mod schedule;
pub mod treatment;
pub mod user;
pub mod veterinarian;

pub use appointment::create_appointment;
pub use clinic::create_clinic;
pub use pet::{create_owned_pet, create_pet};
pub use schedule::create_schedule;
pub use treatment::create_treatment;
pub use user::{create_user, create_user_with_role};
pub use veterinarian::{create_veterinarian, link_clinic};
