use crate::error::{Result, StoreError};
use crate::provider::ConnectionProvider;
use repertoire_core::domain::{Principal, Role};
use rusqlite::{params, ErrorCode, OptionalExtension};
use sha2::{Digest, Sha256};
use std::str::FromStr;
use std::sync::Arc;

/// Lookups against the `comptes` table. Store errors are returned as-is so
/// the login flow can tell a rejected password from an unreachable database.
#[derive(Clone)]
pub struct AccountsRepo {
    provider: Arc<dyn ConnectionProvider>,
}

impl AccountsRepo {
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }

    pub fn create(&self, numero_telephone: &str, password: &str, role: Role) -> Result<Principal> {
        let numero_telephone = numero_telephone.trim();
        if numero_telephone.is_empty() {
            return Err(StoreError::Precondition(
                "account requires a numero_telephone".to_string(),
            ));
        }
        let password = password.trim();
        if password.is_empty() {
            return Err(StoreError::Precondition(
                "account requires a password".to_string(),
            ));
        }

        let conn = self.provider.connect()?;
        let insert_result = conn.execute(
            "INSERT INTO comptes (numero_telephone, mot_de_passe, role) VALUES (?1, ?2, ?3);",
            params![numero_telephone, hash_password(password), role.as_str()],
        );
        if let Err(err) = insert_result {
            if let rusqlite::Error::SqliteFailure(ref failure, _) = err {
                if failure.code == ErrorCode::ConstraintViolation
                    && failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                {
                    return Err(StoreError::DuplicateAccount(numero_telephone.to_string()));
                }
            }
            return Err(err.into());
        }
        Ok(Principal {
            id: conn.last_insert_rowid(),
            numero_telephone: numero_telephone.to_string(),
            role,
        })
    }

    /// Returns the account whose phone number and password both match.
    pub fn authenticate(&self, numero_telephone: &str, password: &str) -> Result<Option<Principal>> {
        let conn = self.provider.connect()?;
        let row: Option<(i64, String, String)> = conn
            .query_row(
                "SELECT id, numero_telephone, role FROM comptes
                 WHERE numero_telephone = ?1 AND mot_de_passe = ?2;",
                params![numero_telephone.trim(), hash_password(password.trim())],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        match row {
            Some((id, numero_telephone, role)) => Ok(Some(Principal {
                id,
                numero_telephone,
                role: Role::from_str(&role)?,
            })),
            None => Ok(None),
        }
    }
}

/// Lowercase hex SHA-256 of the password.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::hash_password;

    #[test]
    fn hash_password_is_sha256_hex() {
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
