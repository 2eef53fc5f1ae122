pub mod db;
pub mod error;
pub mod migrate;
pub mod paths;
pub mod provider;
pub mod repo;
pub mod service;

use crate::error::Result;
use crate::provider::{ConnectionProvider, FileProvider, MemoryProvider};
use std::path::Path;
use std::sync::Arc;

/// Entry point that owns the connection provider and hands out repositories
/// sharing it.
#[derive(Clone)]
pub struct Store {
    provider: Arc<dyn ConnectionProvider>,
}

impl Store {
    /// Opens (creating when missing) the database file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let provider = FileProvider::new(path);
        drop(provider.connect()?);
        db::restrict_db_permissions(path)?;
        Ok(Self::with_provider(Arc::new(provider)))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::with_provider(Arc::new(MemoryProvider::new()?)))
    }

    pub fn with_provider(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }

    pub fn migrate(&self) -> Result<()> {
        let mut conn = self.provider.connect()?;
        migrate::run_migrations(&mut conn)
    }

    pub fn schema_version(&self) -> Result<i64> {
        let conn = self.provider.connect()?;
        migrate::schema_version(&conn)
    }

    pub fn provider(&self) -> Arc<dyn ConnectionProvider> {
        Arc::clone(&self.provider)
    }

    pub fn contacts(&self) -> repo::ContactsRepo {
        repo::ContactsRepo::new(self.provider())
    }

    pub fn accounts(&self) -> repo::AccountsRepo {
        repo::AccountsRepo::new(self.provider())
    }

    pub fn contact_service(&self) -> service::ContactService {
        service::ContactService::new(self.contacts())
    }
}
