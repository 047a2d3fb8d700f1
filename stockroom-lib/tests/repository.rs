use std::sync::Arc;

use stockroom_lib::*;

fn repo() -> CatalogRepository {
    CatalogRepository::new(Arc::new(CatalogStore::open_in_memory().unwrap()))
}

#[tokio::test]
async fn add_then_list_contains_item_once() {
    let repo = repo();
    let item = repo.add(Item::new("Tool", 2, "Screwdriver")).await.unwrap();

    let all = repo.list_all().await.unwrap();
    let matching: Vec<&Item> = all.iter().filter(|i| i.id == item.id).collect();
    assert_eq!(matching, vec![&item]);
}

#[tokio::test]
async fn remove_then_list_has_no_entry() {
    let repo = repo();
    let item = repo.add(Item::new("Tool", 2, "Screwdriver")).await.unwrap();
    repo.add(Item::new("Tool", 1, "Hammer")).await.unwrap();

    assert!(repo.remove(&item).await.unwrap());
    let all = repo.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(all.iter().all(|i| i.id != item.id));
}

#[tokio::test]
async fn find_returns_single_item_by_id() {
    let repo = repo();
    let item = repo.add(Item::new("Tool", 2, "Screwdriver")).await.unwrap();
    repo.add(Item::new("Tool", 1, "Hammer")).await.unwrap();

    assert_eq!(repo.find(&item.id).await.unwrap(), Some(item.clone()));
    repo.remove(&item).await.unwrap();
    assert_eq!(repo.find(&item.id).await.unwrap(), None);
}

#[tokio::test]
async fn removing_twice_is_safe() {
    let repo = repo();
    let item = repo.add(Item::new("Tool", 2, "Screwdriver")).await.unwrap();

    assert!(repo.remove(&item).await.unwrap());
    assert!(!repo.remove(&item).await.unwrap());
}

#[tokio::test]
async fn change_quantity_touches_only_quantity() {
    let repo = repo();
    let item = repo
        .add(Item::new("Tool", 2, "Screwdriver").with_image("content://media/3"))
        .await
        .unwrap();

    let updated = repo.change_quantity(&item.id, 10).await.unwrap().unwrap();
    assert_eq!(updated, item.clone().with_quantity(10));

    let all = repo.list_all().await.unwrap();
    let stored = all.iter().find(|i| i.id == item.id).unwrap();
    assert_eq!(stored.quantity, 10);
    assert_eq!(stored.category, "Tool");
    assert_eq!(stored.description, "Screwdriver");
    assert_eq!(stored.image_ref.as_deref(), Some("content://media/3"));
}

#[tokio::test]
async fn change_quantity_of_missing_item_is_a_no_op() {
    let repo = repo();
    let ghost = Item::new("Tool", 1, "Ghost");
    assert_eq!(repo.change_quantity(&ghost.id, 5).await.unwrap(), None);
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn attach_image_overwrites_previous_reference() {
    let repo = repo();
    let item = repo.add(Item::new("Tool", 2, "Screwdriver")).await.unwrap();

    repo.attach_image(&item.id, "content://media/1").await.unwrap();
    let updated = repo
        .attach_image(&item.id, "file:///pictures/2.jpg")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, item.id);
    assert_eq!(updated.image(), Some("file:///pictures/2.jpg"));
    assert_eq!(updated.quantity, 2);
}

#[tokio::test]
async fn update_replaces_all_fields() {
    let repo = repo();
    let item = repo.add(Item::new("Tool", 2, "Screwdriver")).await.unwrap();

    let mut edited = item.clone();
    edited.category = "Hardware".into();
    edited.description = "Flathead".into();
    assert!(repo.update(edited.clone()).await.unwrap());
    assert_eq!(repo.list_all().await.unwrap(), vec![edited]);
}

#[tokio::test]
async fn seed_on_empty_inserts_three_ordered_items() {
    let repo = repo();
    assert!(repo.list_all().await.unwrap().is_empty());

    assert_eq!(seed_if_empty(&repo).await.unwrap(), 3);

    let all = repo.list_all().await.unwrap();
    let categories: Vec<&str> = all.iter().map(|i| i.category.as_str()).collect();
    assert_eq!(categories, vec!["Electronics", "Furniture", "Tool"]);

    let defaults = default_items();
    for expected in &defaults {
        assert!(all.iter().any(|i| i.category == expected.category
            && i.description == expected.description
            && i.quantity == expected.quantity));
    }
}

#[tokio::test]
async fn seed_skips_non_empty_store() {
    let repo = repo();
    repo.add(Item::new("Tool", 1, "Hammer")).await.unwrap();

    assert_eq!(seed_if_empty(&repo).await.unwrap(), 0);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn add_then_change_quantity_scenario() {
    let repo = repo();
    let mut sub = repo.observe_all().unwrap();

    let item = ItemDraft::new("Tool", "2", "Screwdriver").validate().unwrap();
    let item = repo.add(item).await.unwrap();
    let quantity = parse_quantity("10").unwrap();
    repo.change_quantity(&item.id, quantity).await.unwrap();

    let snapshot = sub.next().await.unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].quantity, 10);
    assert_eq!(snapshot[0].category, "Tool");
    assert_eq!(snapshot[0].description, "Screwdriver");
}

#[tokio::test]
async fn search_filters_a_fresh_read() {
    let repo = repo();
    seed_if_empty(&repo).await.unwrap();

    let found = search(&repo, Some("ELECT".to_string())).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].category, "Electronics");

    assert_eq!(search(&repo, None).await.unwrap().len(), 3);
    assert_eq!(search(&repo, Some(String::new())).await.unwrap().len(), 3);
}

#[tokio::test]
async fn storage_failure_after_close_is_reported() {
    let repo = repo();
    repo.store().close().unwrap();

    let err = repo.add(Item::new("Tool", 1, "Hammer")).await.unwrap_err();
    assert!(matches!(err, CatalogError::Storage(StoreError::Closed)));
    assert!(!err.is_validation());
    assert!(repo.observe_all().is_err());
}
