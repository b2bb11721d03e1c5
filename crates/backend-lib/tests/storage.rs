// ==========================
// crates/backend-lib/tests/storage.rs
// ==========================
use backend_lib::error::AppError;
use backend_lib::store::{Account, AccountStore, FlatFileAccountStore};
use gatekeeper_common::Role;
use tempfile::TempDir;

fn account(id: &str, email: &str) -> Account {
    Account {
        id: id.to_string(),
        email: email.to_string(),
        name: "Ana".to_string(),
        password_hash: "$scrypt$fake-hash".to_string(),
        role: Role::Admin,
    }
}

#[tokio::test]
async fn test_flat_file_create_and_find() {
    let temp_dir = TempDir::new().unwrap();
    let store = FlatFileAccountStore::new(temp_dir.path()).unwrap();

    store.create(&account("id-1", "ana@x.com")).await.unwrap();

    // One JSON document per account, named by id
    let path = temp_dir.path().join("accounts").join("id-1.json");
    assert!(path.exists());

    let found = store.find_by_email("ana@x.com").await.unwrap().unwrap();
    assert_eq!(found.id, "id-1");
    assert_eq!(found.name, "Ana");
    assert_eq!(found.role, Role::Admin);

    // An unknown email is absent, not an error
    let missing = store.find_by_email("nobody@x.com").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_flat_file_rejects_duplicate_email() {
    let temp_dir = TempDir::new().unwrap();
    let store = FlatFileAccountStore::new(temp_dir.path()).unwrap();

    store.create(&account("id-1", "ana@x.com")).await.unwrap();

    let err = store
        .create(&account("id-2", "ana@x.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Storage(_)));

    // The original record survives
    let found = store.find_by_email("ana@x.com").await.unwrap().unwrap();
    assert_eq!(found.id, "id-1");
}

#[tokio::test]
async fn test_flat_file_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = FlatFileAccountStore::new(temp_dir.path()).unwrap();
        store.create(&account("id-1", "ana@x.com")).await.unwrap();
    }

    // A fresh store over the same root sees the persisted account
    let reopened = FlatFileAccountStore::new(temp_dir.path()).unwrap();
    let found = reopened.find_by_email("ana@x.com").await.unwrap().unwrap();
    assert_eq!(found.id, "id-1");
}
