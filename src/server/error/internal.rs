use thiserror::Error;

/// Internal issues with the codebase or stored data indicating unexpected behavior & possible
/// bugs. Always results in a 500 Internal Server Error with a generic message returned to
/// client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Role lookup table is missing one of the seeded rows.
    #[error("Role '{0}' is not present in the role table")]
    RoleNotSeeded(String),

    /// Stored role name does not match any known role.
    #[error("User {user_id} has unknown role '{role}'")]
    UnknownRole { user_id: i32, role: String },

    /// A blocking task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    TaskJoin(String),
}
