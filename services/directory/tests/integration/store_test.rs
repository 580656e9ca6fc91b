use sea_orm::{ConnectionTrait, TransactionTrait};

use userdir_directory::config::DirectoryConfig;
use userdir_directory::domain::repository::{UserReader, UserWriter};
use userdir_directory::error::DirectoryError;
use userdir_directory::infra::db::DbUserStore;
use userdir_directory::state::DirectoryState;
use userdir_directory::usecase::listing::{
    CountActiveUsersUseCase, ListActiveUsersUseCase, ListOrganizationUsersUseCase,
    ListSpaceUsersUseCase,
};
use userdir_directory::usecase::lookup::{
    GetUserByDomainUseCase, GetUserByEmailUseCase, GetUserUseCase,
};
use userdir_domain::email::NormalizedEmail;
use userdir_domain::id::{SpaceId, UserRefId};
use userdir_domain::tenant::TenantScope;
use userdir_testing::TestDb;
use userdir_testing::fixture::{
    count_memberships, seed_account, seed_raw_user, seed_space_grant,
};

use crate::helpers::{add_member, add_user, deactivate, ids, tenant};

#[tokio::test]
async fn should_match_email_lookups_case_and_whitespace_insensitively() {
    let db = TestDb::new().await;
    let scope = tenant(&db, "org-1", "acme.io").await;
    add_user(&db, "u-1", "Ada", "Lovelace", "  Ada@Acme.IO ").await;
    seed_account(db.conn(), "u-1", scope.org_id().as_str(), true).await;

    let by_email = GetUserByEmailUseCase {
        repo: DbUserStore::new(db.conn()),
    };
    let found = by_email.execute("\tADA@acme.io  ").await.unwrap().unwrap();
    assert_eq!(found.ref_id.as_str(), "u-1");
    assert_eq!(found.email, "ada@acme.io");

    let by_domain = GetUserByDomainUseCase {
        repo: DbUserStore::new(db.conn()),
    };
    let found = by_domain
        .execute(" ACME.io", "ada@ACME.io ")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.ref_id.as_str(), "u-1");
}

#[tokio::test]
async fn should_normalize_stored_side_of_email_comparison() {
    let db = TestDb::new().await;
    seed_raw_user(db.conn(), "u-legacy", "Old", "Row", " Legacy@Example.COM ").await;

    let store = DbUserStore::new(db.conn());
    let found = store
        .find_by_email(&NormalizedEmail::new("legacy@example.com"))
        .await
        .unwrap();
    assert_eq!(found.unwrap().ref_id.as_str(), "u-legacy");
}

#[tokio::test]
async fn should_return_none_for_unknown_email() {
    let db = TestDb::new().await;
    add_user(&db, "u-1", "Ada", "Lovelace", "ada@acme.io").await;

    let uc = GetUserByEmailUseCase {
        repo: DbUserStore::new(db.conn()),
    };
    assert!(uc.execute("eve@acme.io").await.unwrap().is_none());
}

#[tokio::test]
async fn should_isolate_domain_lookup_to_the_matching_tenant() {
    let db = TestDb::new().await;
    tenant(&db, "org-a", "acme.io").await;
    tenant(&db, "org-b", "globex.io").await;
    add_user(&db, "u-1", "Ada", "Lovelace", "ada@shared.io").await;
    seed_account(db.conn(), "u-1", "org-b", true).await;

    let uc = GetUserByDomainUseCase {
        repo: DbUserStore::new(db.conn()),
    };
    assert!(
        uc.execute("acme.io", "ada@shared.io")
            .await
            .unwrap()
            .is_none(),
        "user from org-b must not resolve through org-a's domain"
    );
    let found = uc.execute("globex.io", "ada@shared.io").await.unwrap();
    assert_eq!(found.unwrap().ref_id.as_str(), "u-1");
}

#[tokio::test]
async fn should_not_resolve_domain_lookup_without_membership() {
    let db = TestDb::new().await;
    tenant(&db, "org-a", "acme.io").await;
    add_user(&db, "u-1", "Ada", "Lovelace", "ada@acme.io").await;

    let uc = GetUserByDomainUseCase {
        repo: DbUserStore::new(db.conn()),
    };
    assert!(uc.execute("acme.io", "ada@acme.io").await.unwrap().is_none());
}

#[tokio::test]
async fn should_list_org_users_ordered_by_first_then_last_name() {
    let db = TestDb::new().await;
    let scope = tenant(&db, "org-1", "acme.io").await;
    let other = tenant(&db, "org-2", "globex.io").await;
    add_member(&db, "u-zoe", "Zoe", "Adams", "org-1", true).await;
    add_member(&db, "u-amy-b", "Amy", "Brown", "org-1", true).await;
    add_member(&db, "u-amy-a", "Amy", "Able", "org-1", true).await;
    add_member(&db, "u-off", "Bob", "Gone", "org-1", false).await;
    add_member(&db, "u-else", "Cat", "Else", "org-2", true).await;

    let active = ListActiveUsersUseCase {
        repo: DbUserStore::new(db.conn()),
    }
    .execute(&scope)
    .await
    .unwrap();
    assert_eq!(ids(&active), vec!["u-amy-a", "u-amy-b", "u-zoe"]);

    let all = ListOrganizationUsersUseCase {
        repo: DbUserStore::new(db.conn()),
    }
    .execute(&scope)
    .await
    .unwrap();
    assert_eq!(ids(&all), vec!["u-amy-a", "u-amy-b", "u-off", "u-zoe"]);

    let other_users = ListActiveUsersUseCase {
        repo: DbUserStore::new(db.conn()),
    }
    .execute(&other)
    .await
    .unwrap();
    assert_eq!(ids(&other_users), vec!["u-else"]);
}

#[tokio::test]
async fn should_return_empty_listing_for_tenant_without_members() {
    let db = TestDb::new().await;
    let scope = tenant(&db, "org-empty", "empty.io").await;

    let users = ListOrganizationUsersUseCase {
        repo: DbUserStore::new(db.conn()),
    }
    .execute(&scope)
    .await
    .unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn should_list_space_users_with_both_membership_and_grant() {
    let db = TestDb::new().await;
    let scope = tenant(&db, "org-1", "acme.io").await;
    tenant(&db, "org-2", "globex.io").await;
    add_member(&db, "u-both", "Ann", "Both", "org-1", true).await;
    add_member(&db, "u-member-only", "Ben", "Member", "org-1", true).await;
    add_member(&db, "u-inactive", "Cal", "Inactive", "org-1", false).await;
    add_member(&db, "u-foreign", "Dee", "Foreign", "org-2", true).await;
    add_user(&db, "u-grant-only", "Eve", "Grant", "eve@example.com").await;

    seed_space_grant(db.conn(), "org-1", "space-1", "u-both").await;
    seed_space_grant(db.conn(), "org-1", "space-1", "u-inactive").await;
    seed_space_grant(db.conn(), "org-1", "space-1", "u-grant-only").await;
    seed_space_grant(db.conn(), "org-2", "space-1", "u-foreign").await;
    seed_space_grant(db.conn(), "org-1", "space-2", "u-member-only").await;

    let users = ListSpaceUsersUseCase {
        repo: DbUserStore::new(db.conn()),
    }
    .execute(&scope, &SpaceId::from("space-1"))
    .await
    .unwrap();
    assert_eq!(ids(&users), vec!["u-both"]);
}

#[tokio::test]
async fn should_deactivate_only_the_scoped_membership() {
    let db = TestDb::new().await;
    let scope = tenant(&db, "org-1", "acme.io").await;
    let other = tenant(&db, "org-2", "globex.io").await;
    add_member(&db, "u-1", "Ada", "Lovelace", "org-1", true).await;
    seed_account(db.conn(), "u-1", "org-2", true).await;

    deactivate(&db, &scope, "u-1").await;

    let store = DbUserStore::new(db.conn());
    assert!(store.list_active_in_org(&scope).await.unwrap().is_empty());
    assert_eq!(ids(&store.list_active_in_org(&other).await.unwrap()), vec!["u-1"]);
    assert_eq!(count_memberships(db.conn(), "u-1").await, 1);

    // The identity row survives.
    let user = GetUserUseCase { repo: store }
        .execute(&UserRefId::from("u-1"))
        .await
        .unwrap();
    assert_eq!(user.firstname, "Ada");

    // Second call removes nothing and still succeeds.
    deactivate(&db, &scope, "u-1").await;
    assert_eq!(count_memberships(db.conn(), "u-1").await, 1);
}

#[tokio::test]
async fn should_count_zero_on_empty_directory() {
    let db = TestDb::new().await;
    let state = DirectoryState::new(db.clone_conn(), DirectoryConfig::new("sqlite::memory:"));
    assert!(state.is_ready().await);
    assert_eq!(state.count_active_users().execute().await.unwrap(), 0);
}

#[tokio::test]
async fn should_count_distinct_users_with_an_active_membership() {
    let db = TestDb::new().await;
    tenant(&db, "org-1", "acme.io").await;
    tenant(&db, "org-2", "globex.io").await;
    add_member(&db, "u-1", "Ada", "Lovelace", "org-1", true).await;
    seed_account(db.conn(), "u-1", "org-2", true).await;
    add_member(&db, "u-2", "Bob", "Babbage", "org-1", true).await;
    add_member(&db, "u-3", "Cat", "Inactive", "org-2", false).await;
    add_user(&db, "u-4", "Dan", "Loner", "dan@example.com").await;

    let count = DbUserStore::new(db.conn()).count_active().await.unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn should_apply_count_failure_policy() {
    let db = TestDb::new().await;
    db.conn()
        .execute_unprepared("DROP TABLE accounts")
        .await
        .unwrap();

    let fail_open = CountActiveUsersUseCase {
        repo: DbUserStore::new(db.conn()),
        failure_returns_zero: true,
    };
    assert_eq!(fail_open.execute().await.unwrap(), 0);

    let strict = CountActiveUsersUseCase {
        repo: DbUserStore::new(db.conn()),
        failure_returns_zero: false,
    };
    let err = strict.execute().await.unwrap_err();
    assert!(matches!(err, DirectoryError::Persistence(_)));
    assert!(err.to_string().contains("count active users"));
}

#[tokio::test]
async fn should_wrap_store_failures_with_operation_context() {
    let db = TestDb::new().await;
    db.conn()
        .execute_unprepared("DROP TABLE label_roles")
        .await
        .unwrap();
    db.conn().execute_unprepared("DROP TABLE accounts").await.unwrap();
    db.conn().execute_unprepared("DROP TABLE users").await.unwrap();

    let err = GetUserUseCase {
        repo: DbUserStore::new(db.conn()),
    }
    .execute(&UserRefId::from("u-7"))
    .await
    .unwrap_err();
    assert_eq!(err.kind(), "PERSISTENCE");
    assert!(err.to_string().contains("select user by ref_id u-7"));
}

#[tokio::test]
async fn should_see_uncommitted_writes_only_inside_the_transaction() {
    let db = TestDb::new().await;
    let txn = db.conn().begin().await.unwrap();
    let writer = DbUserStore::new(&txn);
    let now = chrono::Utc::now();
    writer
        .insert(&userdir_directory::domain::types::User {
            ref_id: UserRefId::from("u-tx"),
            firstname: "Tx".into(),
            lastname: "User".into(),
            email: "tx@example.com".into(),
            initials: "TU".into(),
            global: true,
            password: String::new(),
            salt: String::new(),
            reset: String::new(),
            created: now,
            revised: now,
        })
        .await
        .unwrap();

    let inside = writer
        .find_by_ref_id(&UserRefId::from("u-tx"))
        .await
        .unwrap();
    assert!(inside.unwrap().global);
    txn.rollback().await.unwrap();

    let after = DbUserStore::new(db.conn())
        .find_by_ref_id(&UserRefId::from("u-tx"))
        .await
        .unwrap();
    assert!(after.is_none());
}

#[tokio::test]
async fn should_scope_listing_by_explicit_tenant_value() {
    let db = TestDb::new().await;
    tenant(&db, "org-1", "acme.io").await;
    add_member(&db, "u-1", "Ada", "Lovelace", "org-1", true).await;

    let store = DbUserStore::new(db.conn());
    let unknown = TenantScope::new("org-unknown");
    assert!(store.list_in_org(&unknown).await.unwrap().is_empty());
    assert!(
        store
            .list_space_members(&unknown, &SpaceId::from("space-1"))
            .await
            .unwrap()
            .is_empty()
    );
}
