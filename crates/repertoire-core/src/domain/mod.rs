pub mod account;
pub mod contact;
pub mod email;

pub use account::{Dashboard, Principal, Role};
pub use contact::{Contact, ContactField, ContactNew};
pub use email::normalize_email;
