use crate::domain::email::normalize_email;
use crate::error::CoreError;
use crate::rules::{ensure_non_negative, optional_text, require_text};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Id,
    Nom,
    Postnom,
    Email,
    NumeroTelephone,
    Genre,
    PhotoContact,
    CompteId,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Id => "id",
            ContactField::Nom => "nom",
            ContactField::Postnom => "postnom",
            ContactField::Email => "email",
            ContactField::NumeroTelephone => "numero_telephone",
            ContactField::Genre => "genre",
            ContactField::PhotoContact => "photo_contact",
            ContactField::CompteId => "compte_id",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for building a transient contact. Every field goes through the
/// matching setter, so the first invalid one rejects the whole value.
#[derive(Debug, Clone, Default)]
pub struct ContactNew {
    pub nom: String,
    pub postnom: String,
    pub email: String,
    pub numero_telephone: String,
    pub genre: String,
    pub adresse: Option<String>,
    pub photo_contact: i64,
    pub compte_id: i64,
}

/// A directory entry for one person.
///
/// Equality and hashing only look at `id`: two values describe the same
/// contact when the store gave them the same id. An `id` of 0 marks a
/// transient contact that has not been persisted yet.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Contact {
    id: i64,
    nom: String,
    postnom: String,
    email: String,
    numero_telephone: String,
    genre: String,
    adresse: Option<String>,
    photo_contact: i64,
    compte_id: i64,
}

impl Contact {
    pub fn new(input: ContactNew) -> Result<Self, CoreError> {
        let mut contact = Contact::default();
        contact.set_nom(&input.nom)?;
        contact.set_postnom(&input.postnom)?;
        contact.set_email(&input.email)?;
        contact.set_numero_telephone(&input.numero_telephone)?;
        contact.set_genre(&input.genre)?;
        contact.set_adresse(input.adresse.as_deref());
        contact.set_photo_contact(input.photo_contact)?;
        contact.set_compte_id(input.compte_id)?;
        Ok(contact)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn nom(&self) -> &str {
        &self.nom
    }

    pub fn postnom(&self) -> &str {
        &self.postnom
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn numero_telephone(&self) -> &str {
        &self.numero_telephone
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn adresse(&self) -> Option<&str> {
        self.adresse.as_deref()
    }

    pub fn photo_contact(&self) -> i64 {
        self.photo_contact
    }

    pub fn compte_id(&self) -> i64 {
        self.compte_id
    }

    pub fn is_transient(&self) -> bool {
        self.id == 0
    }

    pub fn set_id(&mut self, id: i64) -> Result<(), CoreError> {
        self.id = ensure_non_negative(ContactField::Id, id)?;
        Ok(())
    }

    pub fn set_nom(&mut self, nom: &str) -> Result<(), CoreError> {
        self.nom = require_text(ContactField::Nom, nom)?;
        Ok(())
    }

    pub fn set_postnom(&mut self, postnom: &str) -> Result<(), CoreError> {
        self.postnom = require_text(ContactField::Postnom, postnom)?;
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), CoreError> {
        self.email = normalize_email(email).ok_or(CoreError::MissingField(ContactField::Email))?;
        Ok(())
    }

    pub fn set_numero_telephone(&mut self, numero_telephone: &str) -> Result<(), CoreError> {
        self.numero_telephone = require_text(ContactField::NumeroTelephone, numero_telephone)?;
        Ok(())
    }

    pub fn set_genre(&mut self, genre: &str) -> Result<(), CoreError> {
        self.genre = require_text(ContactField::Genre, genre)?;
        Ok(())
    }

    pub fn set_adresse(&mut self, adresse: Option<&str>) {
        self.adresse = optional_text(adresse);
    }

    pub fn set_photo_contact(&mut self, photo_contact: i64) -> Result<(), CoreError> {
        self.photo_contact = ensure_non_negative(ContactField::PhotoContact, photo_contact)?;
        Ok(())
    }

    pub fn set_compte_id(&mut self, compte_id: i64) -> Result<(), CoreError> {
        self.compte_id = ensure_non_negative(ContactField::CompteId, compte_id)?;
        Ok(())
    }

    /// Presence check only; formats are enforced by the setters.
    pub fn is_valid(&self) -> bool {
        !self.nom.is_empty()
            && !self.postnom.is_empty()
            && !self.email.is_empty()
            && !self.numero_telephone.is_empty()
            && !self.genre.is_empty()
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact #{} - {} {} ({})",
            self.id, self.nom, self.postnom, self.numero_telephone
        )
    }
}
