//! Record CRUD operations over the generic `records` table
//!
//! Every tenant record lives here, keyed by (record_type, name). Domain
//! fields are a flat JSON mapping in the `data` column; field-match queries
//! go through SQLite's json_extract. The bulk seeding path is duplicate
//! tolerant: a (record_type, name) that already exists counts as skipped,
//! never as an error, so seeding routines can be re-run from the top.

use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::db::tree;
use crate::error::SetupError;

/// Record row from the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRow {
    pub record_type: String,
    pub name: String,
    pub data: Map<String, Value>,
    pub lft: Option<i64>,
    pub rgt: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl RecordRow {
    fn from_row(row: &Row) -> Result<Self, rusqlite::Error> {
        let raw: String = row.get("data")?;
        let data = serde_json::from_str(&raw).unwrap_or_default();
        Ok(Self {
            record_type: row.get("record_type")?,
            name: row.get("name")?,
            data,
            lft: row.get("lft")?,
            rgt: row.get("rgt")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// String field accessor (None when absent or not a string)
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(|v| v.as_str())
    }

    /// Integer field accessor
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.data.get(field).and_then(|v| v.as_i64())
    }

    /// Flag accessor: JSON true/false or 1/0 both count
    pub fn get_flag(&self, field: &str) -> bool {
        match self.data.get(field) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_i64().unwrap_or(0) != 0,
            _ => false,
        }
    }
}

/// A record to be written: type, natural key, field mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSpec {
    pub record_type: String,
    pub name: String,
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl RecordSpec {
    pub fn new(record_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
            data: Map::new(),
        }
    }

    /// Builder-style field setter
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }
}

/// Options for the bulk seeding path
///
/// `maintain_tree` controls whether freshly inserted records of tree types
/// are placed into the nested set as they land. Callers that insert a large
/// sibling batch turn it off and run one rebuild pass afterwards.
#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub maintain_tree: bool,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self { maintain_tree: true }
    }
}

/// Result of a bulk seeding pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedReport {
    pub inserted: u64,
    pub skipped: u64,
    pub errors: Vec<String>,
}

impl SeedReport {
    /// Fold another report into this one
    pub fn merge(&mut self, other: SeedReport) {
        self.inserted += other.inserted;
        self.skipped += other.skipped;
        self.errors.extend(other.errors);
    }
}

/// Check whether a record exists by (record_type, name)
pub fn record_exists(conn: &Connection, record_type: &str, name: &str) -> Result<bool, SetupError> {
    let exists: bool = conn
        .query_row(
            "SELECT 1 FROM records WHERE record_type = ? AND name = ?",
            params![record_type, name],
            |_| Ok(true),
        )
        .unwrap_or(false);

    Ok(exists)
}

/// Find the name of the first record of a type whose fields match all the
/// given (field, value) pairs. Matching goes through json_extract, so values
/// compare as SQL scalars.
pub fn find_matching(
    conn: &Connection,
    record_type: &str,
    filters: &[(&str, Value)],
) -> Result<Option<String>, SetupError> {
    let mut sql = String::from("SELECT name FROM records WHERE record_type = ?");
    let mut bound: Vec<rusqlite::types::Value> =
        vec![rusqlite::types::Value::Text(record_type.to_string())];

    for (field, value) in filters {
        sql.push_str(&format!(" AND json_extract(data, '$.{}') = ?", field));
        bound.push(scalar_param(value));
    }
    sql.push_str(" ORDER BY name LIMIT 1");

    debug!("Field match query: {}", sql);

    let param_refs: Vec<&dyn rusqlite::ToSql> =
        bound.iter().map(|p| p as &dyn rusqlite::ToSql).collect();

    let name: Option<String> = conn
        .query_row(&sql, param_refs.as_slice(), |row| row.get(0))
        .optional()
        .map_err(|e| SetupError::Internal(format!("Field match failed: {}", e)))?;

    Ok(name)
}

/// Convert a JSON value to the SQL scalar json_extract would yield for it
fn scalar_param(value: &Value) -> rusqlite::types::Value {
    match value {
        Value::Null => rusqlite::types::Value::Null,
        Value::Bool(b) => rusqlite::types::Value::Integer(*b as i64),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                rusqlite::types::Value::Integer(i)
            } else {
                rusqlite::types::Value::Real(n.as_f64().unwrap_or(0.0))
            }
        }
        Value::String(s) => rusqlite::types::Value::Text(s.clone()),
        other => rusqlite::types::Value::Text(other.to_string()),
    }
}

/// Get a record by (record_type, name)
pub fn get_record(
    conn: &Connection,
    record_type: &str,
    name: &str,
) -> Result<Option<RecordRow>, SetupError> {
    conn.query_row(
        "SELECT * FROM records WHERE record_type = ? AND name = ?",
        params![record_type, name],
        |row| RecordRow::from_row(row),
    )
    .optional()
    .map_err(|e| SetupError::Internal(format!("Record fetch failed: {}", e)))
}

/// Get a single field of a record
pub fn get_field(
    conn: &Connection,
    record_type: &str,
    name: &str,
    field: &str,
) -> Result<Option<Value>, SetupError> {
    Ok(get_record(conn, record_type, name)?
        .and_then(|row| row.data.get(field).cloned()))
}

/// List record names of a type, ordered by name
pub fn list_names(conn: &Connection, record_type: &str) -> Result<Vec<String>, SetupError> {
    let mut stmt = conn
        .prepare("SELECT name FROM records WHERE record_type = ? ORDER BY name")
        .map_err(|e| SetupError::Internal(format!("Prepare failed: {}", e)))?;

    let names: Vec<String> = stmt
        .query_map(params![record_type], |row| row.get(0))
        .map_err(|e| SetupError::Internal(format!("Query failed: {}", e)))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SetupError::Internal(format!("Row parse failed: {}", e)))?;

    Ok(names)
}

/// Count records of a type
pub fn count_records(conn: &Connection, record_type: &str) -> Result<u64, SetupError> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM records WHERE record_type = ?",
            params![record_type],
            |row| row.get(0),
        )
        .map_err(|e| SetupError::Internal(format!("Count failed: {}", e)))?;

    Ok(count as u64)
}

/// Insert a single record; a (record_type, name) collision is a Duplicate
pub fn insert_record(conn: &Connection, spec: &RecordSpec) -> Result<(), SetupError> {
    let data = serde_json::to_string(&spec.data)?;

    conn.execute(
        "INSERT INTO records (record_type, name, data) VALUES (?, ?, ?)",
        params![spec.record_type, spec.name, data],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            SetupError::Duplicate {
                record_type: spec.record_type.clone(),
                name: spec.name.clone(),
            }
        }
        other => SetupError::Internal(format!("Insert failed: {}", other)),
    })?;

    Ok(())
}

/// Merge fields into a record's data mapping
pub fn update_fields(
    conn: &Connection,
    record_type: &str,
    name: &str,
    fields: &[(&str, Value)],
) -> Result<(), SetupError> {
    let mut row = get_record(conn, record_type, name)?.ok_or_else(|| SetupError::NotFound {
        record_type: record_type.to_string(),
        name: name.to_string(),
    })?;

    for (field, value) in fields {
        row.data.insert(field.to_string(), value.clone());
    }

    let data = serde_json::to_string(&row.data)?;
    conn.execute(
        "UPDATE records SET data = ?, updated_at = datetime('now')
         WHERE record_type = ? AND name = ?",
        params![data, record_type, name],
    )
    .map_err(|e| SetupError::Internal(format!("Update failed: {}", e)))?;

    Ok(())
}

/// Set one field of a record
pub fn set_field(
    conn: &Connection,
    record_type: &str,
    name: &str,
    field: &str,
    value: Value,
) -> Result<(), SetupError> {
    update_fields(conn, record_type, name, &[(field, value)])
}

/// Get a singleton's data mapping (empty when the singleton was never written)
///
/// Singletons are records whose name equals their record_type, one per tenant.
pub fn get_singleton(conn: &Connection, record_type: &str) -> Result<Map<String, Value>, SetupError> {
    Ok(get_record(conn, record_type, record_type)?
        .map(|row| row.data)
        .unwrap_or_default())
}

/// Merge fields into a singleton, creating it on first write
pub fn update_singleton(
    conn: &Connection,
    record_type: &str,
    fields: &[(&str, Value)],
) -> Result<(), SetupError> {
    conn.execute(
        "INSERT OR IGNORE INTO records (record_type, name, data) VALUES (?, ?, '{}')",
        params![record_type, record_type],
    )
    .map_err(|e| SetupError::Internal(format!("Singleton init failed: {}", e)))?;

    update_fields(conn, record_type, record_type, fields)
}

/// Merge a whole field mapping into a singleton, creating it on first write
pub fn merge_singleton(
    conn: &Connection,
    record_type: &str,
    fields: Map<String, Value>,
) -> Result<(), SetupError> {
    conn.execute(
        "INSERT OR IGNORE INTO records (record_type, name, data) VALUES (?, ?, '{}')",
        params![record_type, record_type],
    )
    .map_err(|e| SetupError::Internal(format!("Singleton init failed: {}", e)))?;

    let mut row = get_record(conn, record_type, record_type)?.ok_or_else(|| {
        SetupError::NotFound {
            record_type: record_type.to_string(),
            name: record_type.to_string(),
        }
    })?;

    for (field, value) in fields {
        row.data.insert(field, value);
    }

    let data = serde_json::to_string(&row.data)?;
    conn.execute(
        "UPDATE records SET data = ?, updated_at = datetime('now')
         WHERE record_type = ? AND name = ?",
        params![data, record_type, record_type],
    )
    .map_err(|e| SetupError::Internal(format!("Update failed: {}", e)))?;

    Ok(())
}

/// Bulk seed records (duplicate tolerant, for installers)
///
/// Existing (record_type, name) pairs are counted as skipped. Freshly
/// inserted records of tree types are placed into the nested set unless
/// `maintain_tree` is off.
pub fn bulk_seed(
    conn: &mut Connection,
    specs: Vec<RecordSpec>,
    options: &SeedOptions,
) -> Result<SeedReport, SetupError> {
    let tx = conn
        .transaction()
        .map_err(|e| SetupError::Internal(format!("Transaction failed: {}", e)))?;

    let mut inserted = 0u64;
    let mut skipped = 0u64;
    let mut errors = vec![];

    for spec in specs {
        // Check if already exists
        let exists: bool = tx
            .query_row(
                "SELECT 1 FROM records WHERE record_type = ? AND name = ?",
                params![spec.record_type, spec.name],
                |_| Ok(true),
            )
            .unwrap_or(false);

        if exists {
            skipped += 1;
            continue;
        }

        let data = match serde_json::to_string(&spec.data) {
            Ok(data) => data,
            Err(e) => {
                errors.push(format!("{} {}: {}", spec.record_type, spec.name, e));
                continue;
            }
        };

        let result = tx.execute(
            "INSERT INTO records (record_type, name, data) VALUES (?, ?, ?)",
            params![spec.record_type, spec.name, data],
        );

        match result {
            Ok(_) => {
                inserted += 1;

                if options.maintain_tree {
                    if let Some(parent_field) = tree::parent_field_of(&spec.record_type) {
                        let parent = spec
                            .data
                            .get(parent_field)
                            .and_then(|v| v.as_str())
                            .filter(|s| !s.is_empty())
                            .map(|s| s.to_string());

                        if let Err(e) =
                            tree::place_in_tree(&tx, &spec.record_type, &spec.name, parent.as_deref())
                        {
                            errors.push(format!("{} {}: {}", spec.record_type, spec.name, e));
                        }
                    }
                }
            }
            Err(e) => {
                errors.push(format!("{} {}: {}", spec.record_type, spec.name, e));
            }
        }
    }

    tx.commit()
        .map_err(|e| SetupError::Internal(format!("Commit failed: {}", e)))?;

    Ok(SeedReport {
        inserted,
        skipped,
        errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::TenantDb;

    fn seed_specs() -> Vec<RecordSpec> {
        vec![
            RecordSpec::new("Designation", "Analyst"),
            RecordSpec::new("Designation", "Engineer"),
            RecordSpec::new("Mode of Payment", "Cash").field("type", "Cash"),
        ]
    }

    #[test]
    fn test_bulk_seed_skips_existing() {
        let db = TenantDb::open_in_memory().unwrap();

        let first = db
            .with_conn_mut(|conn| bulk_seed(conn, seed_specs(), &SeedOptions::default()))
            .unwrap();
        assert_eq!(first.inserted, 3);
        assert_eq!(first.skipped, 0);
        assert!(first.errors.is_empty());

        let second = db
            .with_conn_mut(|conn| bulk_seed(conn, seed_specs(), &SeedOptions::default()))
            .unwrap();
        assert_eq!(second.inserted, 0);
        assert_eq!(second.skipped, 3);
        assert!(second.errors.is_empty());
    }

    #[test]
    fn test_insert_duplicate_is_error() {
        let db = TenantDb::open_in_memory().unwrap();
        let spec = RecordSpec::new("Project Type", "Internal");

        db.with_conn(|conn| insert_record(conn, &spec)).unwrap();
        let err = db.with_conn(|conn| insert_record(conn, &spec)).unwrap_err();
        assert!(matches!(err, SetupError::Duplicate { .. }));
    }

    #[test]
    fn test_find_matching_on_fields() {
        let db = TenantDb::open_in_memory().unwrap();
        let spec = RecordSpec::new("Account", "Checking - TC")
            .field("account_type", "Bank")
            .field("is_group", 1)
            .field("company", "Test Co");

        db.with_conn(|conn| insert_record(conn, &spec)).unwrap();

        let hit = db
            .with_conn(|conn| {
                find_matching(
                    conn,
                    "Account",
                    &[
                        ("account_type", Value::from("Bank")),
                        ("is_group", Value::from(1)),
                        ("company", Value::from("Test Co")),
                    ],
                )
            })
            .unwrap();
        assert_eq!(hit.as_deref(), Some("Checking - TC"));

        let miss = db
            .with_conn(|conn| {
                find_matching(
                    conn,
                    "Account",
                    &[("account_type", Value::from("Cash"))],
                )
            })
            .unwrap();
        assert!(miss.is_none());
    }

    #[test]
    fn test_singleton_round_trip() {
        let db = TenantDb::open_in_memory().unwrap();

        db.with_conn(|conn| {
            update_singleton(
                conn,
                "Selling Settings",
                &[("so_required", Value::from("No"))],
            )
        })
        .unwrap();
        db.with_conn(|conn| {
            update_singleton(
                conn,
                "Selling Settings",
                &[("dn_required", Value::from("No"))],
            )
        })
        .unwrap();

        let data = db
            .with_conn(|conn| get_singleton(conn, "Selling Settings"))
            .unwrap();
        assert_eq!(data.get("so_required"), Some(&Value::from("No")));
        assert_eq!(data.get("dn_required"), Some(&Value::from("No")));
    }

    #[test]
    fn test_update_missing_record_is_not_found() {
        let db = TenantDb::open_in_memory().unwrap();
        let err = db
            .with_conn(|conn| set_field(conn, "Company", "Ghost", "country", Value::from("x")))
            .unwrap_err();
        assert!(matches!(err, SetupError::NotFound { .. }));
    }
}
