use crate::{
    model::auth::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, internal::InternalError, AppError},
        model::auth::Session,
        service::auth::{password::verify_password, AuthService},
    },
};

impl<'a> AuthService<'a> {
    /// Checks a password and issues an access token.
    ///
    /// Unknown email and wrong password fail identically.
    ///
    /// # Returns
    /// - `Ok(Session)` - Token plus the account it was issued for
    /// - `Err(AppError::BadRequest)` - Email or password missing
    /// - `Err(AuthError::InvalidCredentials)` - No such account or wrong password
    /// - `Err(InternalError::UnknownRole)` - Account has no usable role
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Email and password required".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password.to_string(), credentials.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = credentials.user;
        let role_name = user_repo.find_role_name(user.user_id).await?;
        let role = role_name
            .as_deref()
            .and_then(Role::normalize)
            .ok_or_else(|| InternalError::UnknownRole {
                user_id: user.user_id,
                role: role_name.clone().unwrap_or_default(),
            })?;

        let access_token = self.tokens.issue(user.user_id, role)?;

        tracing::debug!(user_id = user.user_id, %role, "Issued access token");

        Ok(Session {
            access_token,
            role,
            user,
        })
    }
}
