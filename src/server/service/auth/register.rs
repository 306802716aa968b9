use sea_orm::{ConnectionTrait, TransactionTrait};

use crate::{
    model::auth::Role,
    server::{
        data::{
            clinic::ClinicRepository, is_unique_violation, user::UserRepository,
            veterinarian::VeterinarianRepository,
        },
        error::{domain::DomainError, internal::InternalError, AppError},
        model::{
            auth::{LicenseClaim, RegisterParam},
            user::CreateUserParam,
        },
        pool::transaction,
        service::{
            auth::{password::hash_password, AuthService},
            validator::DomainValidator,
        },
    },
};

impl<'a> AuthService<'a> {
    /// Creates an account.
    ///
    /// Veterinarians claim an existing, unclaimed license row and are assigned to the given
    /// clinic. The claim is a conditional update, so when two registrations race for the
    /// same license exactly one succeeds and the other gets `LicenseAlreadyClaimed`.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new user
    /// - `Err(DomainError::EmailTaken)` - Email already registered
    /// - `Err(AppError::NotFound)` - Veterinarian's clinic does not exist
    /// - `Err(DomainError::LicenseNotFound | LicenseAlreadyClaimed)` - License cannot be
    ///   claimed
    /// - `Err(InternalError::RoleNotSeeded)` - Role lookup row missing
    pub async fn register(&self, param: RegisterParam) -> Result<i32, AppError> {
        if UserRepository::new(self.db).email_exists(&param.email).await? {
            return Err(DomainError::EmailTaken(param.email).into());
        }

        let veterinarian_id = match &param.license {
            Some(license) => {
                if !ClinicRepository::new(self.db).exists(license.clinic_id).await? {
                    return Err(AppError::NotFound("Clinic not found".to_string()));
                }
                let veterinarian_id = DomainValidator::new(self.db)
                    .validate_license_claim(&license.license_no)
                    .await?;
                Some(veterinarian_id)
            }
            None => None,
        };

        let password_hash = hash_password(param.password.clone()).await?;

        let txn = self.db.begin().await?;
        let result = insert_account(&txn, param, password_hash, veterinarian_id).await;
        let user_id = transaction::finish(txn, result).await?;

        tracing::info!(user_id, "Registered new account");

        Ok(user_id)
    }
}

/// Writes the account rows for a registration whose license, if any, was resolved to
/// `veterinarian_id` beforehand.
///
/// Only the conditional claim decides ownership of the license, so a registration that
/// passed the pre-checks can still lose to one that committed in between.
pub(crate) async fn insert_account<C: ConnectionTrait>(
    db: &C,
    param: RegisterParam,
    password_hash: String,
    veterinarian_id: Option<i32>,
) -> Result<i32, AppError> {
    let user_repo = UserRepository::new(db);

    let email = param.email.clone();
    let user = user_repo
        .create(CreateUserParam {
            first_name: param.first_name,
            last_name: param.last_name,
            email: param.email,
            password_hash,
            phone_no: param.phone_no,
        })
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::from(DomainError::EmailTaken(email))
            } else {
                AppError::from(err)
            }
        })?;

    if !user_repo.assign_role(user.user_id, param.role).await? {
        return Err(InternalError::RoleNotSeeded(param.role.to_string()).into());
    }

    if let (Role::Veterinarian, Some(license), Some(veterinarian_id)) =
        (param.role, param.license, veterinarian_id)
    {
        claim_license(db, user.user_id, veterinarian_id, license).await?;
    }

    Ok(user.user_id)
}

async fn claim_license<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    veterinarian_id: i32,
    license: LicenseClaim,
) -> Result<(), AppError> {
    let vet_repo = VeterinarianRepository::new(db);
    if !vet_repo.claim(veterinarian_id, user_id).await? {
        return Err(DomainError::LicenseAlreadyClaimed(license.license_no).into());
    }

    vet_repo.link_clinic(veterinarian_id, license.clinic_id).await?;

    Ok(())
}
