use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
    sea_query::{Expr, Query, SelectStatement},
};

use userdir_core::sea_ext::trim_lower_eq;
use userdir_directory_schema::{accounts, label_roles, organizations, users};
use userdir_domain::credential::OnboardingSerial;
use userdir_domain::email::{NormalizedEmail, normalize_domain};
use userdir_domain::id::{SpaceId, UserRefId};
use userdir_domain::tenant::TenantScope;

use crate::domain::repository::{UserReader, UserWriter};
use crate::domain::types::{ProfileUpdate, User};
use crate::error::DirectoryError;

// ── User store ───────────────────────────────────────────────────────────────

/// sea-orm backed directory store over a borrowed handle.
///
/// Reads work over any `ConnectionTrait` (pool or transaction). Writes are
/// only implemented for `DatabaseTransaction`, so a write outside a
/// transaction does not compile.
pub struct DbUserStore<'c, C> {
    pub conn: &'c C,
}

impl<'c, C> DbUserStore<'c, C> {
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }
}

impl<C> Clone for DbUserStore<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for DbUserStore<'_, C> {}

impl<C: ConnectionTrait> UserReader for DbUserStore<'_, C> {
    async fn find_by_ref_id(&self, ref_id: &UserRefId) -> Result<Option<User>, DirectoryError> {
        let model = users::Entity::find()
            .filter(users::Column::RefId.eq(ref_id.as_str()))
            .one(self.conn)
            .await
            .with_context(|| format!("select user by ref_id {ref_id}"))?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_domain(
        &self,
        domain: &str,
        email: &NormalizedEmail,
    ) -> Result<Option<User>, DirectoryError> {
        let domain = normalize_domain(domain);
        let model = users::Entity::find()
            .join(JoinType::InnerJoin, users::Relation::Accounts.def())
            .join(JoinType::InnerJoin, accounts::Relation::Organization.def())
            .filter(trim_lower_eq(
                (users::Entity, users::Column::Email),
                email.as_str(),
            ))
            .filter(trim_lower_eq(
                (organizations::Entity, organizations::Column::Domain),
                &domain,
            ))
            .one(self.conn)
            .await
            .with_context(|| format!("select user by domain {domain} and email {email}"))?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(
        &self,
        email: &NormalizedEmail,
    ) -> Result<Option<User>, DirectoryError> {
        let model = users::Entity::find()
            .filter(trim_lower_eq(users::Column::Email, email.as_str()))
            .one(self.conn)
            .await
            .with_context(|| format!("select user by email {email}"))?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_reset_token(&self, token: &str) -> Result<Option<User>, DirectoryError> {
        let model = users::Entity::find()
            .filter(users::Column::Reset.eq(token))
            .one(self.conn)
            .await
            .context("select user by reset token")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_serial(
        &self,
        serial: &OnboardingSerial,
    ) -> Result<Option<User>, DirectoryError> {
        let model = users::Entity::find()
            .filter(users::Column::Salt.eq(serial.as_str()))
            .one(self.conn)
            .await
            .context("select user by onboarding serial")?;
        Ok(model.map(user_from_model))
    }

    async fn list_active_in_org(&self, scope: &TenantScope) -> Result<Vec<User>, DirectoryError> {
        let models = by_name(
            users::Entity::find()
                .filter(users::Column::RefId.in_subquery(members_of(scope, true))),
        )
        .all(self.conn)
        .await
        .with_context(|| format!("select active users for org {}", scope.org_id()))?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn list_in_org(&self, scope: &TenantScope) -> Result<Vec<User>, DirectoryError> {
        let models = by_name(
            users::Entity::find()
                .filter(users::Column::RefId.in_subquery(members_of(scope, false))),
        )
        .all(self.conn)
        .await
        .with_context(|| format!("select users for org {}", scope.org_id()))?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn list_space_members(
        &self,
        scope: &TenantScope,
        space: &SpaceId,
    ) -> Result<Vec<User>, DirectoryError> {
        let granted = Query::select()
            .column(label_roles::Column::UserId)
            .from(label_roles::Entity)
            .and_where(label_roles::Column::OrgId.eq(scope.org_id().as_str()))
            .and_where(label_roles::Column::LabelId.eq(space.as_str()))
            .to_owned();
        let models = by_name(
            users::Entity::find()
                .filter(users::Column::RefId.in_subquery(members_of(scope, true)))
                .filter(users::Column::RefId.in_subquery(granted)),
        )
        .all(self.conn)
        .await
        .with_context(|| {
            format!(
                "select space users for org {} space {space}",
                scope.org_id()
            )
        })?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn count_active(&self) -> Result<u64, DirectoryError> {
        let active = Query::select()
            .column(accounts::Column::UserId)
            .from(accounts::Entity)
            .and_where(accounts::Column::Active.eq(true))
            .to_owned();
        let count = users::Entity::find()
            .filter(users::Column::RefId.in_subquery(active))
            .count(self.conn)
            .await
            .context("count active users")?;
        Ok(count)
    }
}

impl UserWriter for DbUserStore<'_, DatabaseTransaction> {
    async fn insert(&self, user: &User) -> Result<(), DirectoryError> {
        users::Entity::insert(users::ActiveModel {
            ref_id: Set(user.ref_id.to_string()),
            firstname: Set(user.firstname.clone()),
            lastname: Set(user.lastname.clone()),
            email: Set(user.email.clone()),
            initials: Set(user.initials.clone()),
            global: Set(user.global),
            password: Set(user.password.clone()),
            salt: Set(user.salt.clone()),
            reset: Set(user.reset.clone()),
            created: Set(user.created),
            revised: Set(user.revised),
            ..Default::default()
        })
        .exec_without_returning(self.conn)
        .await
        .with_context(|| format!("insert user {}", user.ref_id))?;
        Ok(())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), DirectoryError> {
        users::Entity::update_many()
            .col_expr(users::Column::Firstname, Expr::value(update.firstname.clone()))
            .col_expr(users::Column::Lastname, Expr::value(update.lastname.clone()))
            .col_expr(users::Column::Email, Expr::value(update.email.as_str()))
            .col_expr(users::Column::Initials, Expr::value(update.initials.clone()))
            .col_expr(users::Column::Revised, Expr::value(update.revised))
            .filter(users::Column::RefId.eq(update.ref_id.as_str()))
            .exec(self.conn)
            .await
            .with_context(|| format!("update user {}", update.ref_id))?;
        Ok(())
    }

    async fn update_password(
        &self,
        ref_id: &UserRefId,
        salt: &str,
        password: &str,
        revised: DateTime<Utc>,
    ) -> Result<(), DirectoryError> {
        users::Entity::update_many()
            .col_expr(users::Column::Salt, Expr::value(salt))
            .col_expr(users::Column::Password, Expr::value(password))
            .col_expr(users::Column::Reset, Expr::value(""))
            .col_expr(users::Column::Revised, Expr::value(revised))
            .filter(users::Column::RefId.eq(ref_id.as_str()))
            .exec(self.conn)
            .await
            .with_context(|| format!("update password for user {ref_id}"))?;
        Ok(())
    }

    async fn set_reset_token(
        &self,
        email: &NormalizedEmail,
        token: &str,
        revised: DateTime<Utc>,
    ) -> Result<(), DirectoryError> {
        users::Entity::update_many()
            .col_expr(users::Column::Reset, Expr::value(token))
            .col_expr(users::Column::Password, Expr::value(""))
            .col_expr(users::Column::Revised, Expr::value(revised))
            .filter(trim_lower_eq(users::Column::Email, email.as_str()))
            .exec(self.conn)
            .await
            .with_context(|| format!("set reset token for email {email}"))?;
        Ok(())
    }

    async fn remove_membership(
        &self,
        scope: &TenantScope,
        ref_id: &UserRefId,
    ) -> Result<(), DirectoryError> {
        accounts::Entity::delete_many()
            .filter(accounts::Column::UserId.eq(ref_id.as_str()))
            .filter(accounts::Column::OrgId.eq(scope.org_id().as_str()))
            .exec(self.conn)
            .await
            .with_context(|| {
                format!(
                    "delete account for user {ref_id} in org {}",
                    scope.org_id()
                )
            })?;
        Ok(())
    }
}

/// `SELECT user_id FROM accounts WHERE org_id = ? [AND active = true]`
fn members_of(scope: &TenantScope, active_only: bool) -> SelectStatement {
    let mut query = Query::select();
    query
        .column(accounts::Column::UserId)
        .from(accounts::Entity)
        .and_where(accounts::Column::OrgId.eq(scope.org_id().as_str()));
    if active_only {
        query.and_where(accounts::Column::Active.eq(true));
    }
    query
}

/// Listing order shared by every tenant listing. `ref_id` breaks ties so the
/// order is stable for users with identical names.
fn by_name(query: Select<users::Entity>) -> Select<users::Entity> {
    query
        .order_by_asc(users::Column::Firstname)
        .order_by_asc(users::Column::Lastname)
        .order_by_asc(users::Column::RefId)
}

fn user_from_model(model: users::Model) -> User {
    User {
        ref_id: UserRefId(model.ref_id),
        firstname: model.firstname,
        lastname: model.lastname,
        email: model.email,
        initials: model.initials,
        global: model.global,
        password: model.password,
        salt: model.salt,
        reset: model.reset,
        created: model.created,
        revised: model.revised,
    }
}
