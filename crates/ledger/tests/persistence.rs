use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use ledger::{App, Money, SnapshotStore, TransactionKind, View};

fn build(dir: &TempDir) -> App {
    App::builder()
        .store(SnapshotStore::new(dir.path()))
        .build()
        .unwrap()
}

#[test]
fn restart_reads_the_same_state() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = build(&dir);
    app.signup("Alice", "alice@example.com", "Corner Shop")
        .unwrap();
    let book_id = app.active_business().unwrap().books[0].id;
    app.open_book(book_id).unwrap();
    app.add_transaction(
        TransactionKind::Income,
        Money::new(100_00),
        "opening sale",
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
    )
    .unwrap();
    let second = app.create_business("Second Shop").unwrap();
    drop(app);

    let app = build(&dir);
    assert!(app.is_signed_in());
    assert_eq!(app.session().unwrap().name, "Alice");
    assert_eq!(app.businesses().len(), 2);
    // The business cursor survives a restart; book, view and filter do not.
    assert_eq!(app.active_business().unwrap().id, second);
    assert!(app.active_book().is_none());
    assert_eq!(app.view(), View::Dashboard);

    let shop = &app.businesses()[0];
    assert_eq!(shop.books[0].transactions.len(), 1);
    assert_eq!(shop.books[0].transactions[0].description, "opening sale");
}

#[test]
fn logout_survives_restart_and_login_restores_the_tree() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = build(&dir);
    app.signup("Alice", "alice@example.com", "Corner Shop")
        .unwrap();
    app.create_book("Savings").unwrap();
    app.logout();
    drop(app);

    let mut app = build(&dir);
    assert!(!app.is_signed_in());
    assert!(app.session().is_none());

    app.login("alice@example.com").unwrap();
    assert_eq!(app.session().unwrap().name, "Alice");
    assert_eq!(app.active_business().unwrap().books.len(), 2);
}

#[test]
fn corrupt_key_resets_to_the_signed_out_default() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = build(&dir);
    app.signup("Alice", "alice@example.com", "Corner Shop")
        .unwrap();
    drop(app);

    fs::write(dir.path().join("businesses.json"), "not json").unwrap();

    let app = build(&dir);
    assert!(!app.is_signed_in());
    assert!(app.session().is_none());
    assert!(app.businesses().is_empty());
    assert!(app.active_business().is_none());
}

#[test]
fn missing_directory_starts_fresh_and_saving_creates_it() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("state").join("snapshots");

    let mut app = App::builder()
        .store(SnapshotStore::new(&nested))
        .build()
        .unwrap();
    assert!(!app.is_signed_in());
    assert!(app.businesses().is_empty());

    app.signup("Alice", "alice@example.com", "Corner Shop")
        .unwrap();
    drop(app);

    assert!(nested.join("businesses.json").exists());
    let app = App::builder()
        .store(SnapshotStore::new(&nested))
        .build()
        .unwrap();
    assert!(app.is_signed_in());
    assert_eq!(app.businesses().len(), 1);
}

#[test]
fn deleting_a_business_cascades_into_the_snapshot() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = build(&dir);
    app.signup("Alice", "alice@example.com", "Corner Shop")
        .unwrap();
    let doomed = app.create_business("Doomed Shop").unwrap();
    let book = app.create_book("Ledger").unwrap();
    app.open_book(book).unwrap();
    app.add_transaction(
        TransactionKind::Expense,
        Money::new(5_00),
        "stamps",
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
    )
    .unwrap();

    app.delete_business(doomed).unwrap();
    drop(app);

    let raw = fs::read_to_string(dir.path().join("businesses.json")).unwrap();
    assert!(!raw.contains(&doomed.to_string()));
    assert!(!raw.contains(&book.to_string()));
    assert!(!raw.contains("stamps"));

    let app = build(&dir);
    assert_eq!(app.businesses().len(), 1);
    assert_eq!(app.active_business().unwrap().name, "Corner Shop");
}

#[test]
fn stale_business_cursor_falls_back_to_the_first_business() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = build(&dir);
    app.signup("Alice", "alice@example.com", "Corner Shop")
        .unwrap();
    drop(app);

    // Point the cursor at a business that no longer exists.
    fs::write(
        dir.path().join("active_business.json"),
        format!("\"{}\"", uuid::Uuid::new_v4()),
    )
    .unwrap();

    let app = build(&dir);
    assert_eq!(app.active_business().unwrap().name, "Corner Shop");
}
