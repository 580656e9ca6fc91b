//! Fixture rows for store tests.
//!
//! These write straight through the schema entities, bypassing the directory
//! service, so tests can set up tenants, memberships, and grants the
//! directory itself never writes.

use chrono::Utc;
use sea_orm::{ActiveValue::Set, ConnectionTrait, EntityTrait};

use userdir_directory_schema::{accounts, label_roles, organizations, users};

/// Insert an organization with the given reference id and domain.
pub async fn seed_org<C: ConnectionTrait>(conn: &C, org_id: &str, domain: &str) {
    organizations::Entity::insert(organizations::ActiveModel {
        ref_id: Set(org_id.to_owned()),
        domain: Set(domain.to_owned()),
    })
    .exec_without_returning(conn)
    .await
    .expect("seed organization");
}

/// Insert a membership row linking `user_id` to `org_id`.
pub async fn seed_account<C: ConnectionTrait>(conn: &C, user_id: &str, org_id: &str, active: bool) {
    accounts::Entity::insert(accounts::ActiveModel {
        user_id: Set(user_id.to_owned()),
        org_id: Set(org_id.to_owned()),
        active: Set(active),
    })
    .exec_without_returning(conn)
    .await
    .expect("seed account");
}

/// Grant `user_id` visibility into `space_id` within `org_id`.
pub async fn seed_space_grant<C: ConnectionTrait>(
    conn: &C,
    org_id: &str,
    space_id: &str,
    user_id: &str,
) {
    label_roles::Entity::insert(label_roles::ActiveModel {
        org_id: Set(org_id.to_owned()),
        label_id: Set(space_id.to_owned()),
        user_id: Set(user_id.to_owned()),
    })
    .exec_without_returning(conn)
    .await
    .expect("seed space grant");
}

/// Insert a user row directly, stored exactly as given (no normalization).
///
/// Useful for asserting that lookups normalize the stored side as well.
pub async fn seed_raw_user<C: ConnectionTrait>(
    conn: &C,
    ref_id: &str,
    firstname: &str,
    lastname: &str,
    email: &str,
) {
    let now = Utc::now();
    users::Entity::insert(users::ActiveModel {
        ref_id: Set(ref_id.to_owned()),
        firstname: Set(firstname.to_owned()),
        lastname: Set(lastname.to_owned()),
        email: Set(email.to_owned()),
        initials: Set(String::new()),
        global: Set(false),
        password: Set(String::new()),
        salt: Set(String::new()),
        reset: Set(String::new()),
        created: Set(now),
        revised: Set(now),
        ..Default::default()
    })
    .exec_without_returning(conn)
    .await
    .expect("seed user");
}

/// Count rows in `accounts` for a user, regardless of organization.
pub async fn count_memberships<C: ConnectionTrait>(conn: &C, user_id: &str) -> u64 {
    use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter};

    accounts::Entity::find()
        .filter(accounts::Column::UserId.eq(user_id))
        .count(conn)
        .await
        .expect("count memberships")
}
