use crate::error::{Result, StoreError};
use crate::provider::ConnectionProvider;
use repertoire_core::domain::{Contact, ContactNew};
use rusqlite::{params, Connection, Params};
use std::fmt;
use std::sync::Arc;
use tracing::{error, warn};

const SELECT_CONTACTS: &str =
    "SELECT id, nom, postnom, email, numero_telephone, genre, adresse, photo_contact, compte_id
     FROM contacts";

/// Columns a scoped search may target. The column name in the query comes
/// from here, never from caller text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Nom,
    Postnom,
}

impl SearchField {
    pub fn column(&self) -> &'static str {
        match self {
            SearchField::Nom => "nom",
            SearchField::Postnom => "postnom",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Gateway between [`Contact`] values and the `contacts` table.
///
/// Every operation opens its own connection through the provider and drops it
/// before returning. The plain methods absorb store failures: they log them
/// and answer `false`, an empty list or `None`. Only caller bugs (an
/// incomplete contact handed to `create` or `update`, a blank scoped search)
/// come back as [`StoreError::Precondition`]. The `try_` variants surface
/// every error.
///
/// Rows that no longer satisfy the contact rules are skipped with a warning
/// so one bad row does not hide the others.
#[derive(Clone)]
pub struct ContactsRepo {
    provider: Arc<dyn ConnectionProvider>,
}

impl ContactsRepo {
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }

    /// Inserts `contact` and writes the store-assigned id back into it.
    pub fn create(&self, contact: &mut Contact) -> Result<bool> {
        Ok(absorb("create", self.try_create(contact))?.unwrap_or(false))
    }

    /// Overwrites every mutable column of the row with the contact's id.
    /// Non-positive ids answer `false` without reaching the store.
    pub fn update(&self, contact: &Contact) -> Result<bool> {
        Ok(absorb("update", self.try_update(contact))?.unwrap_or(false))
    }

    pub fn delete(&self, id: i64) -> bool {
        absorb("delete", self.try_delete(id))
            .ok()
            .flatten()
            .unwrap_or(false)
    }

    pub fn find_by_id(&self, id: i64) -> Option<Contact> {
        absorb("find_by_id", self.try_find_by_id(id))
            .ok()
            .flatten()
            .flatten()
    }

    pub fn get_all(&self) -> Vec<Contact> {
        absorb("get_all", self.try_get_all())
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Substring match on nom, postnom or numero_telephone. A blank term
    /// lists everything.
    pub fn search(&self, term: &str) -> Vec<Contact> {
        absorb("search", self.try_search(term))
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Substring match on a single column. The term must not be blank.
    pub fn search_by(&self, field: SearchField, term: &str) -> Result<Vec<Contact>> {
        Ok(absorb("search_by", self.try_search_by(field, term))?.unwrap_or_default())
    }

    pub fn list_for_compte(&self, compte_id: i64) -> Vec<Contact> {
        absorb("list_for_compte", self.try_list_for_compte(compte_id))
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    pub fn try_create(&self, contact: &mut Contact) -> Result<bool> {
        ensure_complete(contact, "create")?;
        let conn = self.provider.connect()?;
        let inserted = conn.execute(
            "INSERT INTO contacts (nom, postnom, email, numero_telephone, genre, adresse, photo_contact, compte_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                contact.nom(),
                contact.postnom(),
                contact.email(),
                contact.numero_telephone(),
                contact.genre(),
                contact.adresse(),
                contact.photo_contact(),
                contact.compte_id(),
            ],
        )?;
        if inserted == 0 {
            return Ok(false);
        }
        contact.set_id(conn.last_insert_rowid())?;
        Ok(true)
    }

    pub fn try_update(&self, contact: &Contact) -> Result<bool> {
        if contact.id() <= 0 {
            return Ok(false);
        }
        ensure_complete(contact, "update")?;
        let conn = self.provider.connect()?;
        let updated = conn.execute(
            "UPDATE contacts
             SET nom = ?2, postnom = ?3, email = ?4, numero_telephone = ?5, genre = ?6, adresse = ?7, photo_contact = ?8
             WHERE id = ?1;",
            params![
                contact.id(),
                contact.nom(),
                contact.postnom(),
                contact.email(),
                contact.numero_telephone(),
                contact.genre(),
                contact.adresse(),
                contact.photo_contact(),
            ],
        )?;
        Ok(updated > 0)
    }

    pub fn try_delete(&self, id: i64) -> Result<bool> {
        if id <= 0 {
            return Ok(false);
        }
        let conn = self.provider.connect()?;
        let deleted = conn.execute("DELETE FROM contacts WHERE id = ?1;", [id])?;
        Ok(deleted > 0)
    }

    pub fn try_find_by_id(&self, id: i64) -> Result<Option<Contact>> {
        if id <= 0 {
            return Ok(None);
        }
        let conn = self.provider.connect()?;
        let mut contacts =
            query_contacts(&conn, &format!("{SELECT_CONTACTS} WHERE id = ?1;"), [id])?;
        Ok(contacts.pop())
    }

    pub fn try_get_all(&self) -> Result<Vec<Contact>> {
        let conn = self.provider.connect()?;
        query_contacts(&conn, &format!("{SELECT_CONTACTS};"), params![])
    }

    pub fn try_search(&self, term: &str) -> Result<Vec<Contact>> {
        if term.trim().is_empty() {
            return self.try_get_all();
        }
        let pattern = contains_pattern(term);
        let conn = self.provider.connect()?;
        query_contacts(
            &conn,
            &format!(
                "{SELECT_CONTACTS}
                 WHERE nom LIKE ?1 ESCAPE '\\'
                    OR postnom LIKE ?1 ESCAPE '\\'
                    OR numero_telephone LIKE ?1 ESCAPE '\\';"
            ),
            [pattern],
        )
    }

    pub fn try_search_by(&self, field: SearchField, term: &str) -> Result<Vec<Contact>> {
        if term.trim().is_empty() {
            return Err(StoreError::Precondition(format!(
                "search by {field} requires a term"
            )));
        }
        let pattern = contains_pattern(term);
        let conn = self.provider.connect()?;
        query_contacts(
            &conn,
            &format!(
                "{SELECT_CONTACTS} WHERE {} LIKE ?1 ESCAPE '\\';",
                field.column()
            ),
            [pattern],
        )
    }

    pub fn try_list_for_compte(&self, compte_id: i64) -> Result<Vec<Contact>> {
        let conn = self.provider.connect()?;
        query_contacts(
            &conn,
            &format!("{SELECT_CONTACTS} WHERE compte_id = ?1;"),
            [compte_id],
        )
    }
}

fn absorb<T>(op: &'static str, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_precondition() => Err(err),
        Err(err) => {
            error!(op, error = %err, "contact store operation failed");
            Ok(None)
        }
    }
}

fn ensure_complete(contact: &Contact, op: &str) -> Result<()> {
    if !contact.is_valid() {
        return Err(StoreError::Precondition(format!(
            "{op} requires nom, postnom, email, numero_telephone and genre"
        )));
    }
    Ok(())
}

fn query_contacts<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<Vec<Contact>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut contacts = Vec::new();
    while let Some(row) = rows.next()? {
        let id: i64 = row.get(0)?;
        match contact_from_row(row) {
            Ok(contact) => contacts.push(contact),
            Err(StoreError::Core(err)) => {
                warn!(id, error = %err, "skipping invalid contact row");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(contacts)
}

fn contact_from_row(row: &rusqlite::Row<'_>) -> Result<Contact> {
    let mut contact = Contact::new(ContactNew {
        nom: row.get(1)?,
        postnom: row.get(2)?,
        email: row.get(3)?,
        numero_telephone: row.get(4)?,
        genre: row.get(5)?,
        adresse: row.get(6)?,
        photo_contact: row.get(7)?,
        compte_id: row.get(8)?,
    })?;
    contact.set_id(row.get(0)?)?;
    Ok(contact)
}

fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn escape_like_keeps_plain_text() {
        assert_eq!(escape_like("+243 81"), "+243 81");
    }
}
