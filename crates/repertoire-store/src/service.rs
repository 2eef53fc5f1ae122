use crate::error::{StoreError, StoreErrorKind};
use crate::repo::{ContactsRepo, SearchField};
use repertoire_core::domain::Contact;
use thiserror::Error;

/// What a UI caller needs to decide between "fix your input" and "try again
/// later". Only arguments the caller supplied count as invalid; anything the
/// store hands back, bad rows included, is unavailability. Store detail stays
/// in the source chain for logging.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid request: {0}")]
    Invalid(String),
    #[error("contact store unavailable")]
    Unavailable(#[source] StoreError),
}

impl ServiceError {
    /// A notice safe to show to an end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ServiceError::Invalid(_) => "The contact is incomplete or invalid.",
            ServiceError::Unavailable(_) => "The operation could not be completed.",
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err.kind() {
            StoreErrorKind::Precondition => ServiceError::Invalid(err.to_string()),
            _ => ServiceError::Unavailable(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Forwards to the gateway's fallible operations so store failures reach the
/// caller instead of being swallowed.
#[derive(Clone)]
pub struct ContactService {
    contacts: ContactsRepo,
}

impl ContactService {
    pub fn new(contacts: ContactsRepo) -> Self {
        Self { contacts }
    }

    pub fn get_all(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.try_get_all()?)
    }

    pub fn add(&self, contact: &mut Contact) -> Result<bool> {
        Ok(self.contacts.try_create(contact)?)
    }

    pub fn update(&self, contact: &Contact) -> Result<bool> {
        Ok(self.contacts.try_update(contact)?)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.contacts.try_delete(id)?)
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Contact>> {
        Ok(self.contacts.try_find_by_id(id)?)
    }

    pub fn search(&self, term: &str) -> Result<Vec<Contact>> {
        Ok(self.contacts.try_search(term)?)
    }

    pub fn search_by(&self, field: SearchField, term: &str) -> Result<Vec<Contact>> {
        Ok(self.contacts.try_search_by(field, term)?)
    }

    pub fn list_for_compte(&self, compte_id: i64) -> Result<Vec<Contact>> {
        Ok(self.contacts.try_list_for_compte(compte_id)?)
    }
}
