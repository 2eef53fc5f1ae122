use crate::db;
use crate::error::Result;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::trace;
use uuid::Uuid;

/// Hands out a fresh connection for a single unit of work. The caller owns
/// the connection and drops it before returning.
pub trait ConnectionProvider: Send + Sync {
    fn connect(&self) -> Result<Connection>;
}

/// Opens the database file at `path` on every call.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConnectionProvider for FileProvider {
    fn connect(&self) -> Result<Connection> {
        trace!(path = %self.path.display(), "opening connection");
        db::open(&self.path)
    }
}

/// A private in-memory database that lives as long as the provider.
///
/// Each provider gets its own shared-cache name, and a keep-alive connection
/// stops SQLite from discarding the database between calls.
pub struct MemoryProvider {
    uri: String,
    _keepalive: Mutex<Connection>,
}

impl MemoryProvider {
    pub fn new() -> Result<Self> {
        let uri = format!(
            "file:repertoire-{}?mode=memory&cache=shared",
            Uuid::new_v4().simple()
        );
        let keepalive = db::open_uri(&uri)?;
        Ok(Self {
            uri,
            _keepalive: Mutex::new(keepalive),
        })
    }
}

impl ConnectionProvider for MemoryProvider {
    fn connect(&self) -> Result<Connection> {
        db::open_uri(&self.uri)
    }
}
