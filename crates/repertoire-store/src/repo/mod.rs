pub mod accounts;
pub mod contacts;

pub use accounts::{hash_password, AccountsRepo};
pub use contacts::{ContactsRepo, SearchField};
