use catalog_core::{ProductId, ProductInput, ProductRepository};

use crate::InMemoryProductRepository;

fn input(name: &str, price: f64, quantity: i64) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        description: format!("{} description", name),
        price,
        quantity,
    }
}

#[tokio::test]
async fn insert_assigns_fresh_increasing_ids() {
    let repo = InMemoryProductRepository::new();

    let first = repo.insert(&input("Pen", 1.5, 100)).await.unwrap();
    let second = repo.insert(&input("Notebook", 3.0, 40)).await.unwrap();

    assert_eq!(first.id, ProductId(1));
    assert_eq!(second.id, ProductId(2));
    assert_eq!(first.name, "Pen");
    assert_eq!(first.price, 1.5);
    assert_eq!(first.quantity, 100);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let repo = InMemoryProductRepository::new();

    let first = repo.insert(&input("Pen", 1.5, 100)).await.unwrap();
    assert!(repo.delete(&first.id).await.unwrap());

    let second = repo.insert(&input("Notebook", 3.0, 40)).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn find_all_is_ordered_and_stable() {
    let repo = InMemoryProductRepository::new();
    repo.insert(&input("Pen", 1.5, 100)).await.unwrap();
    repo.insert(&input("Notebook", 3.0, 40)).await.unwrap();
    repo.insert(&input("Eraser", 0.5, 250)).await.unwrap();

    let first_listing = repo.find_all().await.unwrap();
    let second_listing = repo.find_all().await.unwrap();

    let ids: Vec<i64> = first_listing.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(first_listing, second_listing);
}

#[tokio::test]
async fn update_replaces_all_fields() {
    let repo = InMemoryProductRepository::new();
    let created = repo.insert(&input("Pen", 1.5, 100)).await.unwrap();

    let updated = repo
        .update(&created.id, &input("Fountain pen", 12.0, 5))
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Fountain pen");
    assert_eq!(updated.description, "Fountain pen description");
    assert_eq!(updated.price, 12.0);
    assert_eq!(updated.quantity, 5);

    let fetched = repo.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_missing_row_returns_none() {
    let repo = InMemoryProductRepository::new();
    let result = repo
        .update(&ProductId(99), &input("Ghost", 1.0, 1))
        .await
        .unwrap();
    assert!(result.is_none());
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_removes_exactly_one_row_and_is_not_repeatable() {
    let repo = InMemoryProductRepository::new();
    let pen = repo.insert(&input("Pen", 1.5, 100)).await.unwrap();
    let notebook = repo.insert(&input("Notebook", 3.0, 40)).await.unwrap();

    assert!(repo.delete(&pen.id).await.unwrap());
    assert!(!repo.delete(&pen.id).await.unwrap());

    let remaining = repo.find_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, notebook.id);
}
