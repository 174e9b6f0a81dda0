//! Store behaviour against PostgreSQL. Needs `DATABASE_URL` pointing at a
//! scratch database: `cargo test -- --ignored`.
#![cfg(feature = "postgres")]

mod common;

use common::db_store_context::DbStoreContext;
use serial_test::serial;
use taskgate::{
    models::{
        identity::{NewIdentity, Role},
        task::{NewTask, TaskPost},
    },
    store::{Store, error::Error},
};
use uuid::Uuid;

fn new_identity(email: &str, role: Role) -> NewIdentity {
    NewIdentity {
        name: String::from("Someone"),
        email: String::from(email),
        password_hash: String::from("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"),
        role,
    }
}

#[test]
#[serial]
#[ignore = "requires a PostgreSQL database"]
fn test_identity_round_trip() {
    let ctx = DbStoreContext::from_env();
    let admin = ctx
        .store
        .insert_identity(new_identity("root@x.com", Role::Admin))
        .expect("Failed to insert identity");
    assert_eq!(admin.role, Role::Admin);

    let by_email = ctx
        .store
        .find_identity_by_email("root@x.com")
        .expect("Failed to query")
        .expect("Identity missing");
    assert_eq!(by_email, admin);
    assert_eq!(
        ctx.store.find_identity_by_id(&admin.id).expect("Failed to query"),
        Some(admin)
    );
    assert!(
        ctx.store
            .find_identity_by_id(&Uuid::new_v4())
            .expect("Failed to query")
            .is_none()
    );

    assert!(matches!(
        ctx.store.insert_identity(new_identity("root@x.com", Role::User)),
        Err(Error::DuplicateEmail)
    ));
}

#[test]
#[serial]
#[ignore = "requires a PostgreSQL database"]
fn test_task_round_trip() {
    let ctx = DbStoreContext::from_env();
    let alice = ctx
        .store
        .insert_identity(new_identity("a@x.com", Role::User))
        .expect("Failed to insert identity");
    let bob = ctx
        .store
        .insert_identity(new_identity("b@x.com", Role::User))
        .expect("Failed to insert identity");

    let task = ctx
        .store
        .insert_task(NewTask {
            owner_id: alice.id,
            title: String::from("a1"),
            description: None,
        })
        .expect("Failed to insert task");
    ctx.store
        .insert_task(NewTask {
            owner_id: bob.id,
            title: String::from("b1"),
            description: Some(String::from("bob's")),
        })
        .expect("Failed to insert task");

    assert_eq!(ctx.store.list_tasks().expect("Failed to list").len(), 2);
    assert_eq!(
        ctx.store.list_tasks_by_owner(&alice.id).expect("Failed to list"),
        vec![task.clone()]
    );

    let updated = ctx
        .store
        .update_task(&task.id, TaskPost::new("renamed", Some("desc")))
        .expect("Failed to update")
        .expect("Task missing");
    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.owner_id, alice.id);
    assert!(
        ctx.store
            .update_task(&Uuid::new_v4(), TaskPost::new("x", None))
            .expect("Failed to update")
            .is_none()
    );

    assert!(ctx.store.delete_task(&task.id).expect("Failed to delete"));
    assert!(!ctx.store.delete_task(&task.id).expect("Failed to delete"));
    assert!(ctx.store.find_task_by_id(&task.id).expect("Failed to query").is_none());
}
