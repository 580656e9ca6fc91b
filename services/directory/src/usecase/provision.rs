use chrono::Utc;

use userdir_domain::email::NormalizedEmail;
use userdir_domain::id::UserRefId;

use crate::domain::repository::UserWriter;
use crate::domain::types::{NewUser, ProfileUpdate, User};
use crate::error::DirectoryError;

// ── Add ──────────────────────────────────────────────────────────────────────

pub struct AddUserUseCase<W: UserWriter> {
    pub repo: W,
}

impl<W: UserWriter> AddUserUseCase<W> {
    /// Provision a user. Stamps `created == revised == now`, normalizes the
    /// email and starts with no pending reset. Returns the stored record.
    pub async fn execute(&self, input: NewUser) -> Result<User, DirectoryError> {
        let email = NormalizedEmail::new(&input.email);
        if email.is_empty() {
            return Err(DirectoryError::InvalidArgument("empty email"));
        }
        let now = Utc::now();
        let user = User {
            ref_id: input.ref_id,
            firstname: input.firstname,
            lastname: input.lastname,
            email: email.into_inner(),
            initials: input.initials,
            global: input.global,
            password: input.password,
            salt: input.salt,
            reset: String::new(),
            created: now,
            revised: now,
        };
        self.repo.insert(&user).await?;
        tracing::info!(user_id = %user.ref_id, "user added");
        Ok(user)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserInput {
    pub ref_id: UserRefId,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub initials: String,
}

impl From<&User> for UpdateUserInput {
    fn from(user: &User) -> Self {
        Self {
            ref_id: user.ref_id.clone(),
            firstname: user.firstname.clone(),
            lastname: user.lastname.clone(),
            email: user.email.clone(),
            initials: user.initials.clone(),
        }
    }
}

pub struct UpdateUserUseCase<W: UserWriter> {
    pub repo: W,
}

impl<W: UserWriter> UpdateUserUseCase<W> {
    /// Overwrite the profile fields. Password, salt and reset are untouched.
    pub async fn execute(&self, input: UpdateUserInput) -> Result<(), DirectoryError> {
        let email = NormalizedEmail::new(&input.email);
        if email.is_empty() {
            return Err(DirectoryError::InvalidArgument("empty email"));
        }
        self.repo
            .update_profile(&ProfileUpdate {
                ref_id: input.ref_id,
                firstname: input.firstname,
                lastname: input.lastname,
                email,
                initials: input.initials,
                revised: Utc::now(),
            })
            .await
    }
}
