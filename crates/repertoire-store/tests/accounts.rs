use repertoire_core::domain::{Dashboard, Role};
use repertoire_store::error::StoreErrorKind;
use repertoire_store::repo::hash_password;
use repertoire_store::Store;

fn store() -> Store {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    store
}

#[test]
fn authenticate_resolves_role() {
    let store = store();
    let accounts = store.accounts();

    let admin = accounts
        .create("+243800000000", "s3cret", Role::Admin)
        .expect("create admin");
    accounts
        .create("+243811111111", "hunter2", Role::User)
        .expect("create user");

    let principal = accounts
        .authenticate(" +243800000000 ", " s3cret ")
        .expect("authenticate")
        .expect("match");
    assert_eq!(principal.id, admin.id);
    assert_eq!(principal.role, Role::Admin);
    assert_eq!(principal.landing_view(), Dashboard::Admin);

    let user = accounts
        .authenticate("+243811111111", "hunter2")
        .expect("authenticate")
        .expect("match");
    assert_eq!(user.landing_view(), Dashboard::User);
}

#[test]
fn authenticate_rejects_wrong_password() {
    let store = store();
    let accounts = store.accounts();
    accounts
        .create("+243800000000", "s3cret", Role::User)
        .expect("create");

    let result = accounts
        .authenticate("+243800000000", "wrong")
        .expect("authenticate");
    assert!(result.is_none());
    let unknown = accounts
        .authenticate("+243899999999", "s3cret")
        .expect("authenticate");
    assert!(unknown.is_none());
}

#[test]
fn passwords_are_stored_hashed() {
    let store = store();
    store
        .accounts()
        .create("+243800000000", "s3cret", Role::User)
        .expect("create");

    let stored: String = store
        .provider()
        .connect()
        .expect("connect")
        .query_row(
            "SELECT mot_de_passe FROM comptes WHERE numero_telephone = ?1;",
            ["+243800000000"],
            |row| row.get(0),
        )
        .expect("stored hash");
    assert_eq!(stored, hash_password("s3cret"));
    assert_ne!(stored, "s3cret");
}

#[test]
fn create_rejects_duplicates_and_blanks() {
    let store = store();
    let accounts = store.accounts();
    accounts
        .create("+243800000000", "s3cret", Role::User)
        .expect("create");

    let duplicate = accounts
        .create("+243800000000", "other", Role::Admin)
        .unwrap_err();
    assert_eq!(duplicate.kind(), StoreErrorKind::DuplicateAccount);

    let blank = accounts.create("  ", "pw", Role::User).unwrap_err();
    assert!(blank.is_precondition());
    let no_password = accounts.create("+243811111111", " ", Role::User).unwrap_err();
    assert!(no_password.is_precondition());
}

#[test]
fn duplicate_is_detected_by_the_unique_constraint() {
    let store = store();
    let first = store.accounts();
    let second = store.accounts();
    first
        .create("+243800000000", "s3cret", Role::User)
        .expect("create");

    let duplicate = second
        .create(" +243800000000 ", "other", Role::Admin)
        .unwrap_err();
    assert_eq!(duplicate.kind(), StoreErrorKind::DuplicateAccount);
    assert_eq!(duplicate.to_string(), "duplicate account: +243800000000");

    let count: i64 = store
        .provider()
        .connect()
        .expect("connect")
        .query_row("SELECT COUNT(*) FROM comptes;", [], |row| row.get(0))
        .expect("count");
    assert_eq!(count, 1);
}
