use std::sync::Arc;
use std::time::Duration;

use stockroom_catalog::Item;
use stockroom_db::{CatalogStore, StoreError};
use tempfile::TempDir;

fn store() -> CatalogStore {
    CatalogStore::open_in_memory().unwrap()
}

#[test]
fn added_item_appears_exactly_once() {
    let store = store();
    let item = Item::new("Tool", 2, "Screwdriver");
    store.insert_or_replace(&item).unwrap();

    let all = store.list_all().unwrap();
    let matches: Vec<&Item> = all.iter().filter(|i| i.id == item.id).collect();
    assert_eq!(matches, vec![&item]);
}

#[test]
fn removed_item_is_gone_and_second_remove_is_a_no_op() {
    let store = store();
    let item = Item::new("Tool", 2, "Screwdriver");
    store.insert_or_replace(&item).unwrap();

    assert!(store.delete(&item).unwrap());
    assert!(!store.delete(&item).unwrap());
    assert!(store.list_all().unwrap().iter().all(|i| i.id != item.id));
}

#[test]
fn update_of_unknown_item_is_not_an_error() {
    let store = store();
    assert!(!store.update(&Item::new("Tool", 1, "Ghost")).unwrap());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn modify_keeps_identity_and_other_fields() {
    let store = store();
    let item = Item::new("Tool", 2, "Screwdriver");
    store.insert_or_replace(&item).unwrap();

    let other = Item::new("Tool", 1, "Impostor");
    let updated = store
        .modify(&item.id, |i| {
            i.quantity = 10;
            i.id = other.id.clone();
        })
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, item.id);
    assert_eq!(updated, item.clone().with_quantity(10));
    assert_eq!(store.find(&item.id).unwrap(), Some(updated));
    assert_eq!(store.find(&other.id).unwrap(), None);
}

#[test]
fn modify_of_unknown_item_returns_none() {
    let store = store();
    let ghost = Item::new("Tool", 1, "Ghost");
    assert_eq!(store.modify(&ghost.id, |i| i.quantity = 5).unwrap(), None);
}

#[test]
fn new_subscriber_receives_current_state_immediately() {
    let store = store();
    let item = Item::new("Tool", 2, "Screwdriver");
    store.insert_or_replace(&item).unwrap();

    let mut sub = store.observe_all().unwrap();
    let snapshot = sub.try_next().expect("current state replayed");
    assert_eq!(*snapshot, vec![item]);
    assert!(sub.try_next().is_none());
}

#[test]
fn every_commit_publishes_a_full_ordered_snapshot() {
    let store = store();
    let mut sub = store.observe_all().unwrap();
    assert!(sub.try_next().unwrap().is_empty());

    store.insert_or_replace(&Item::new("Tool", 1, "Hammer")).unwrap();
    assert_eq!(sub.try_next().unwrap().len(), 1);

    store
        .insert_or_replace(&Item::new("Electronics", 3, "Laptop"))
        .unwrap();
    let snapshot = sub.try_next().unwrap();
    let categories: Vec<&str> = snapshot.iter().map(|i| i.category.as_str()).collect();
    assert_eq!(categories, vec!["Electronics", "Tool"]);
}

#[test]
fn no_op_writes_publish_nothing() {
    let store = store();
    let mut sub = store.observe_all().unwrap();
    sub.try_next().unwrap();

    let ghost = Item::new("Tool", 1, "Ghost");
    store.update(&ghost).unwrap();
    store.delete(&ghost).unwrap();
    assert!(sub.try_next().is_none());
}

#[test]
fn slow_subscriber_sees_only_latest_snapshot() {
    let store = store();
    let mut sub = store.observe_all().unwrap();
    sub.try_next().unwrap();

    for n in 0..5 {
        store
            .insert_or_replace(&Item::new("Tool", n, format!("Item {n}")))
            .unwrap();
    }

    assert_eq!(sub.try_next().unwrap().len(), 5);
    assert!(sub.try_next().is_none());
}

#[test]
fn dropping_one_subscription_leaves_others_running() {
    let store = store();
    let first = store.observe_all().unwrap();
    let mut second = store.observe_all().unwrap();
    drop(first);

    store.insert_or_replace(&Item::new("Tool", 1, "Hammer")).unwrap();
    assert_eq!(second.try_next().unwrap().len(), 1);
}

#[tokio::test]
async fn next_waits_for_commits_from_other_threads() {
    let store = Arc::new(store());
    let mut sub = store.observe_all().unwrap();
    assert!(sub.next().await.unwrap().is_empty());

    let writer = Arc::clone(&store);
    let handle = tokio::task::spawn_blocking(move || {
        writer
            .insert_or_replace(&Item::new("Furniture", 4, "Chair"))
            .unwrap();
    });

    let snapshot = tokio::time::timeout(Duration::from_secs(5), sub.next())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(snapshot[0].description, "Chair");
    handle.await.unwrap();
}

#[tokio::test]
async fn closing_the_store_ends_subscriptions() {
    let store = store();
    let mut sub = store.observe_all().unwrap();
    sub.next().await.unwrap();

    store.close().unwrap();
    assert!(store.is_closed());
    assert!(sub.next().await.is_none());
    assert!(matches!(store.list_all(), Err(StoreError::Closed)));
    assert!(matches!(store.observe_all(), Err(StoreError::Closed)));
}

#[test]
fn data_survives_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("inventory.db");
    let item = Item::new("Tool", 2, "Screwdriver").with_image("content://media/7");

    {
        let store = CatalogStore::open(&path).unwrap();
        store.insert_or_replace(&item).unwrap();
        store.close().unwrap();
    }

    let store = CatalogStore::open(&path).unwrap();
    assert_eq!(store.list_all().unwrap(), vec![item.clone()]);
    let mut sub = store.observe_all().unwrap();
    assert_eq!(*sub.try_next().unwrap(), vec![item]);
}

#[test]
fn sqlite_failure_rolls_back_and_publishes_nothing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("inventory.db");
    let store = CatalogStore::open(&path).unwrap();
    let kept = Item::new("Tool", 2, "Screwdriver");
    store.insert_or_replace(&kept).unwrap();

    let mut sub = store.observe_all().unwrap();
    sub.try_next().unwrap();

    // A second connection makes every insert fail inside SQLite.
    let other = rusqlite::Connection::open(&path).unwrap();
    other
        .execute_batch(
            "CREATE TRIGGER reject_inserts BEFORE INSERT ON products
             BEGIN SELECT RAISE(ABORT, 'inventory is read-only'); END;",
        )
        .unwrap();
    drop(other);

    let err = store
        .insert_or_replace(&Item::new("Electronics", 1, "Laptop"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Storage(_)), "got {err:?}");
    assert!(sub.try_next().is_none());
    assert_eq!(store.list_all().unwrap(), vec![kept]);
}
