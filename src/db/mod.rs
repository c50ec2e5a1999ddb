//! SQLite database module for the tenant record store
//!
//! Each tenant owns one SQLite file. Records of every type share a single
//! generic table keyed by (record_type, name); domain fields live in a JSON
//! column so new record types never need DDL.
//!
//! ## Tables
//!
//! - `records` - All tenant records (type, name, data JSON, nested-set bounds)
//! - `schema_version` - Migration bookkeeping

pub mod schema;
pub mod records;
pub mod record_types;
pub mod tree;

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use tracing::{info, debug};

use crate::error::SetupError;

/// SQLite database for one tenant's records
pub struct TenantDb {
    conn: Mutex<Connection>,
}

impl TenantDb {
    /// Open or create the tenant database at the given path
    pub fn open(db_path: &Path) -> Result<Self, SetupError> {
        info!("Opening tenant database at {:?}", db_path);

        let conn = Connection::open(db_path)
            .map_err(|e| SetupError::Internal(format!("Failed to open SQLite: {}", e)))?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")
            .map_err(|e| SetupError::Internal(format!("Failed to set PRAGMA: {}", e)))?;

        let db = Self {
            conn: Mutex::new(conn),
        };

        db.init_schema()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self, SetupError> {
        debug!("Opening in-memory tenant database");

        let conn = Connection::open_in_memory()
            .map_err(|e| SetupError::Internal(format!("Failed to open in-memory SQLite: {}", e)))?;

        let db = Self {
            conn: Mutex::new(conn),
        };

        db.init_schema()?;

        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<(), SetupError> {
        let conn = self.conn.lock()
            .map_err(|e| SetupError::Internal(format!("Lock poisoned: {}", e)))?;

        schema::init_schema(&conn)?;

        Ok(())
    }

    /// Run a read operation against the connection
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, SetupError>
    where
        F: FnOnce(&Connection) -> Result<T, SetupError>,
    {
        let conn = self.conn.lock()
            .map_err(|e| SetupError::Internal(format!("Lock poisoned: {}", e)))?;
        f(&conn)
    }

    /// Execute a write operation with exclusive access (for transactions)
    pub fn with_conn_mut<F, T>(&self, f: F) -> Result<T, SetupError>
    where
        F: FnOnce(&mut Connection) -> Result<T, SetupError>,
    {
        let mut conn = self.conn.lock()
            .map_err(|e| SetupError::Internal(format!("Lock poisoned: {}", e)))?;
        f(&mut conn)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats, SetupError> {
        self.with_conn(|conn| {
            let record_count: i64 = conn
                .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))
                .map_err(|e| SetupError::Internal(format!("Query failed: {}", e)))?;

            let type_count: i64 = conn
                .query_row("SELECT COUNT(DISTINCT record_type) FROM records", [], |row| row.get(0))
                .map_err(|e| SetupError::Internal(format!("Query failed: {}", e)))?;

            let tree_count: i64 = conn
                .query_row("SELECT COUNT(*) FROM records WHERE lft IS NOT NULL", [], |row| row.get(0))
                .map_err(|e| SetupError::Internal(format!("Query failed: {}", e)))?;

            Ok(DbStats {
                record_count: record_count as u64,
                type_count: type_count as u64,
                tree_count: tree_count as u64,
            })
        })
    }
}

/// Database statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct DbStats {
    pub record_count: u64,
    pub type_count: u64,
    pub tree_count: u64,
}

// Re-exports
pub use records::{RecordRow, RecordSpec, SeedOptions, SeedReport};
