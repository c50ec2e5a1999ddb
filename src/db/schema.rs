//! Database schema definitions

use rusqlite::Connection;
use tracing::info;

use crate::error::SetupError;

/// Current schema version for migrations
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> Result<(), SetupError> {
    // Check current schema version
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        info!("Creating new tenant schema v{}", SCHEMA_VERSION);
        create_tables(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    } else if current_version < SCHEMA_VERSION {
        info!("Migrating schema from v{} to v{}", current_version, SCHEMA_VERSION);
        migrate_schema(conn, current_version)?;
    } else {
        info!("Tenant schema is up to date (v{})", current_version);
    }

    Ok(())
}

/// Get current schema version (0 if not initialized)
fn get_schema_version(conn: &Connection) -> Result<i32, SetupError> {
    // Create schema_version table if it doesn't exist
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL)",
        [],
    ).map_err(|e| SetupError::Internal(format!("Failed to create schema_version table: {}", e)))?;

    let version: i32 = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| row.get(0))
        .unwrap_or(0);

    Ok(version)
}

/// Set schema version
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SetupError> {
    conn.execute("DELETE FROM schema_version", [])
        .map_err(|e| SetupError::Internal(format!("Failed to clear schema_version: {}", e)))?;
    conn.execute("INSERT INTO schema_version (version) VALUES (?)", [version])
        .map_err(|e| SetupError::Internal(format!("Failed to set schema_version: {}", e)))?;
    Ok(())
}

/// Create all tables
fn create_tables(conn: &Connection) -> Result<(), SetupError> {
    conn.execute_batch(RECORDS_SCHEMA)
        .map_err(|e| SetupError::Internal(format!("Failed to create records table: {}", e)))?;

    conn.execute_batch(INDEXES_SCHEMA)
        .map_err(|e| SetupError::Internal(format!("Failed to create indexes: {}", e)))?;

    Ok(())
}

/// Migrate schema from older version
fn migrate_schema(conn: &Connection, from_version: i32) -> Result<(), SetupError> {
    // Add migration steps here as schema evolves
    match from_version {
        _ => {}
    }

    set_schema_version(conn, SCHEMA_VERSION)?;
    Ok(())
}

/// Records table schema
const RECORDS_SCHEMA: &str = r#"
-- Generic tenant document store
-- One row per record, keyed by (record_type, name); all domain fields
-- live in the data JSON column. Singletons are rows whose name equals
-- their record_type.
CREATE TABLE IF NOT EXISTS records (
    record_type TEXT NOT NULL,
    name TEXT NOT NULL,

    -- Flat attribute mapping as JSON (scalars plus child-row arrays)
    data TEXT NOT NULL DEFAULT '{}',

    -- Nested-set bounds, maintained only for tree record types
    lft INTEGER,
    rgt INTEGER,

    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now')),

    PRIMARY KEY (record_type, name)
);
"#;

/// Index definitions for fast queries
const INDEXES_SCHEMA: &str = r#"
CREATE INDEX IF NOT EXISTS idx_records_type ON records(record_type);
CREATE INDEX IF NOT EXISTS idx_records_lft ON records(record_type, lft);
"#;
