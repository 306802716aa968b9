//! Authentication models: token claims, the verified caller identity, and registration
//! parameters.

use serde::{Deserialize, Serialize};

use crate::{
    model::auth::{LoginResponseDto, ProfileDto, RegisterDto, Role},
    server::{
        error::{auth::AuthError, AppError},
        model::user::User,
        util::parse::parse_subject,
    },
};

/// JWT payload. `sub` carries the user id as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Caller identity taken from a verified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub role: Role,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl Identity {
    /// Converts verified claims into an identity.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Claims carry a numeric subject
    /// - `Err(AuthError::InvalidSubject)` - `sub` is not a user id
    pub fn from_claims(claims: Claims) -> Result<Self, AuthError> {
        Ok(Self {
            user_id: parse_subject(&claims.sub)?,
            role: claims.role,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Which appointments, treatments and pets the caller may see.
    pub fn scope(&self) -> Scope {
        match self.role {
            Role::Admin => Scope::All,
            Role::Veterinarian => Scope::Veterinarian(self.user_id),
            Role::PetOwner => Scope::Owner(self.user_id),
        }
    }

    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            sub: self.user_id.to_string(),
            role: self.role,
            iat: self.issued_at,
            exp: self.expires_at,
        }
    }
}

/// Row visibility derived from the caller's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Admins see every row.
    All,
    /// Rows attached to a veterinarian record linked to this user.
    Veterinarian(i32),
    /// Rows attached to a pet this user owns.
    Owner(i32),
}

/// License details a veterinarian supplies when registering.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseClaim {
    pub license_no: String,
    pub clinic_id: i32,
}

/// Registration input with the role normalized and veterinarian fields checked.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_no: Option<String>,
    pub role: Role,
    /// Present exactly when `role` is `Veterinarian`.
    pub license: Option<LicenseClaim>,
}

impl RegisterParam {
    /// Validates a registration request.
    ///
    /// # Returns
    /// - `Ok(RegisterParam)` - Input is complete for the requested role
    /// - `Err(AuthError::InvalidRole)` - Role is not one of the known roles
    /// - `Err(AppError::BadRequest)` - Required fields missing, or a veterinarian without
    ///   license and clinic
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let role = match dto.role.as_deref() {
            None => Role::PetOwner,
            Some(raw) => Role::normalize(raw).ok_or_else(|| AuthError::InvalidRole(raw.to_string()))?,
        };

        let email = dto.email.trim().to_string();
        if email.is_empty() || dto.password.is_empty() {
            return Err(AppError::BadRequest(
                "Email and password required".to_string(),
            ));
        }
        if dto.first_name.trim().is_empty() || dto.last_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "First and last name required".to_string(),
            ));
        }

        let license = match role {
            Role::Veterinarian => {
                let license_no = dto.license_no.map(|l| l.trim().to_string()).unwrap_or_default();
                match (license_no.is_empty(), dto.clinic_id) {
                    (false, Some(clinic_id)) => Some(LicenseClaim {
                        license_no,
                        clinic_id,
                    }),
                    _ => {
                        return Err(AppError::BadRequest(
                            "Veterinarians must provide license_no and clinic_id".to_string(),
                        ))
                    }
                }
            }
            _ => None,
        };

        Ok(Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email,
            password: dto.password,
            phone_no: dto.phone_no,
            role,
            license,
        })
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub role: Role,
    pub user: User,
}

impl Session {
    pub fn into_dto(self) -> LoginResponseDto {
        LoginResponseDto {
            access_token: self.access_token,
            role: self.role,
            user_id: self.user.user_id,
            first_name: self.user.first_name,
            last_name: self.user.last_name,
        }
    }
}
