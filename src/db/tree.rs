//! Nested-set maintenance for hierarchical record types
//!
//! Tree record types carry a parent-reference field in their data mapping
//! and nested-set bounds (lft/rgt) in dedicated columns. Bounds can be kept
//! current on every insert (`place_in_tree`) or recomputed wholesale from
//! parent pointers (`rebuild_tree`) after a batch that skipped placement.

use std::collections::HashMap;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::db::record_types;
use crate::error::SetupError;

/// Tree record types and their parent-reference fields
pub const TREE_TYPES: &[(&str, &str)] = &[
    (record_types::ITEM_GROUP, "parent_item_group"),
    (record_types::TERRITORY, "parent_territory"),
    (record_types::CUSTOMER_GROUP, "parent_customer_group"),
    (record_types::SUPPLIER_GROUP, "parent_supplier_group"),
    (record_types::SALES_PERSON, "parent_sales_person"),
    (record_types::ASSESSMENT_GROUP, "parent_assessment_group"),
    (record_types::DEPARTMENT, "parent_department"),
    (record_types::WAREHOUSE, "parent_warehouse"),
    (record_types::ACCOUNT, "parent_account"),
    (record_types::COMPANY, "parent_company"),
];

/// Parent-reference field for a record type, None for flat types
pub fn parent_field_of(record_type: &str) -> Option<&'static str> {
    TREE_TYPES
        .iter()
        .find(|(rt, _)| *rt == record_type)
        .map(|(_, field)| *field)
}

/// Name of the root record of a tree type (empty parent field)
pub fn get_root(conn: &Connection, record_type: &str) -> Result<Option<String>, SetupError> {
    let parent_field = parent_field_of(record_type).ok_or_else(|| {
        SetupError::InvalidInput(format!("{} is not a tree record type", record_type))
    })?;

    let sql = format!(
        "SELECT name FROM records WHERE record_type = ?
         AND (json_extract(data, '$.{0}') IS NULL OR json_extract(data, '$.{0}') = '')
         ORDER BY name LIMIT 1",
        parent_field
    );

    conn.query_row(&sql, params![record_type], |row| row.get(0))
        .optional()
        .map_err(|e| SetupError::Internal(format!("Root lookup failed: {}", e)))
}

/// Place one freshly inserted record into the nested set
///
/// Roots open a new interval after the current maximum; children are spliced
/// in at their parent's right bound, shifting everything to the right of it.
pub fn place_in_tree(
    conn: &Connection,
    record_type: &str,
    name: &str,
    parent: Option<&str>,
) -> Result<(), SetupError> {
    match parent {
        None => {
            let max_rgt: i64 = conn
                .query_row(
                    "SELECT COALESCE(MAX(rgt), 0) FROM records WHERE record_type = ?",
                    params![record_type],
                    |row| row.get(0),
                )
                .map_err(|e| SetupError::Internal(format!("Tree bound query failed: {}", e)))?;

            conn.execute(
                "UPDATE records SET lft = ?, rgt = ? WHERE record_type = ? AND name = ?",
                params![max_rgt + 1, max_rgt + 2, record_type, name],
            )
            .map_err(|e| SetupError::Internal(format!("Tree placement failed: {}", e)))?;
        }
        Some(parent_name) => {
            let parent_rgt: Option<i64> = conn
                .query_row(
                    "SELECT rgt FROM records WHERE record_type = ? AND name = ?",
                    params![record_type, parent_name],
                    |row| row.get(0),
                )
                .optional()
                .map_err(|e| SetupError::Internal(format!("Parent lookup failed: {}", e)))?
                .flatten();

            let parent_rgt = parent_rgt.ok_or_else(|| SetupError::NotFound {
                record_type: record_type.to_string(),
                name: parent_name.to_string(),
            })?;

            // Open a two-wide gap at the parent's right bound
            conn.execute(
                "UPDATE records SET rgt = rgt + 2 WHERE record_type = ? AND rgt >= ?",
                params![record_type, parent_rgt],
            )
            .map_err(|e| SetupError::Internal(format!("Tree shift failed: {}", e)))?;
            conn.execute(
                "UPDATE records SET lft = lft + 2 WHERE record_type = ? AND lft > ?",
                params![record_type, parent_rgt],
            )
            .map_err(|e| SetupError::Internal(format!("Tree shift failed: {}", e)))?;

            conn.execute(
                "UPDATE records SET lft = ?, rgt = ? WHERE record_type = ? AND name = ?",
                params![parent_rgt, parent_rgt + 1, record_type, name],
            )
            .map_err(|e| SetupError::Internal(format!("Tree placement failed: {}", e)))?;
        }
    }

    Ok(())
}

/// Recompute all nested-set bounds of a tree type from parent pointers
///
/// Children are visited in name order under each parent, roots in name
/// order, so the numbering is deterministic. Records left unvisited (orphan
/// parents, cycles) are an error.
pub fn rebuild_tree(
    conn: &Connection,
    record_type: &str,
    parent_field: &str,
) -> Result<(), SetupError> {
    let sql = format!(
        "SELECT name, json_extract(data, '$.{}') FROM records WHERE record_type = ? ORDER BY name",
        parent_field
    );

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| SetupError::Internal(format!("Prepare failed: {}", e)))?;

    let pairs: Vec<(String, Option<String>)> = stmt
        .query_map(params![record_type], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
        })
        .map_err(|e| SetupError::Internal(format!("Query failed: {}", e)))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SetupError::Internal(format!("Row parse failed: {}", e)))?;

    let total = pairs.len();
    let mut children: HashMap<Option<String>, Vec<String>> = HashMap::new();
    for (name, parent) in pairs {
        let parent = parent.filter(|p| !p.is_empty());
        children.entry(parent).or_default().push(name);
    }

    // Depth-first numbering, forest-aware (multiple roots allowed)
    let mut bounds: Vec<(String, i64, i64)> = Vec::with_capacity(total);
    let mut counter = 1i64;
    let roots = children.remove(&None).unwrap_or_default();
    for root in roots {
        assign_bounds(&root, &mut counter, &mut children, &mut bounds);
    }

    if bounds.len() != total {
        return Err(SetupError::Internal(format!(
            "Tree rebuild for {} visited {} of {} records (orphan parent or cycle)",
            record_type,
            bounds.len(),
            total
        )));
    }

    let mut update = conn
        .prepare("UPDATE records SET lft = ?, rgt = ? WHERE record_type = ? AND name = ?")
        .map_err(|e| SetupError::Internal(format!("Prepare failed: {}", e)))?;

    for (name, lft, rgt) in &bounds {
        update
            .execute(params![lft, rgt, record_type, name])
            .map_err(|e| SetupError::Internal(format!("Bound update failed: {}", e)))?;
    }

    debug!("Rebuilt {} tree over {} records", record_type, total);

    Ok(())
}

fn assign_bounds(
    name: &str,
    counter: &mut i64,
    children: &mut HashMap<Option<String>, Vec<String>>,
    out: &mut Vec<(String, i64, i64)>,
) {
    let lft = *counter;
    *counter += 1;

    if let Some(kids) = children.remove(&Some(name.to_string())) {
        for kid in kids {
            assign_bounds(&kid, counter, children, out);
        }
    }

    let rgt = *counter;
    *counter += 1;
    out.push((name.to_string(), lft, rgt));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::records::{bulk_seed, get_record, RecordSpec, SeedOptions};
    use crate::db::TenantDb;

    fn group(name: &str, parent: &str) -> RecordSpec {
        RecordSpec::new(record_types::ITEM_GROUP, name)
            .field("item_group_name", name)
            .field("parent_item_group", parent)
            .field("is_group", if parent.is_empty() { 1 } else { 0 })
    }

    #[test]
    fn test_incremental_placement_root_and_children() {
        let db = TenantDb::open_in_memory().unwrap();

        let specs = vec![
            group("All Item Groups", ""),
            group("Products", "All Item Groups"),
            group("Services", "All Item Groups"),
        ];
        let report = db
            .with_conn_mut(|conn| bulk_seed(conn, specs, &SeedOptions::default()))
            .unwrap();
        assert_eq!(report.inserted, 3);
        assert!(report.errors.is_empty());

        let (root, products, services) = db
            .with_conn(|conn| {
                Ok((
                    get_record(conn, record_types::ITEM_GROUP, "All Item Groups")?.unwrap(),
                    get_record(conn, record_types::ITEM_GROUP, "Products")?.unwrap(),
                    get_record(conn, record_types::ITEM_GROUP, "Services")?.unwrap(),
                ))
            })
            .unwrap();

        // Root encloses both children
        assert!(root.lft.unwrap() < products.lft.unwrap());
        assert!(products.rgt.unwrap() < root.rgt.unwrap());
        assert!(root.lft.unwrap() < services.lft.unwrap());
        assert!(services.rgt.unwrap() < root.rgt.unwrap());
        assert_eq!(root.rgt.unwrap() - root.lft.unwrap(), 5);
    }

    #[test]
    fn test_rebuild_matches_parent_pointers() {
        let db = TenantDb::open_in_memory().unwrap();

        // Insert without placement, then rebuild
        let specs = vec![
            group("All Item Groups", ""),
            group("Products", "All Item Groups"),
            group("Hardware", "Products"),
            group("Software", "Products"),
            group("Services", "All Item Groups"),
        ];
        db.with_conn_mut(|conn| {
            bulk_seed(conn, specs, &SeedOptions { maintain_tree: false })
        })
        .unwrap();

        db.with_conn(|conn| {
            rebuild_tree(conn, record_types::ITEM_GROUP, "parent_item_group")
        })
        .unwrap();

        let rows = db
            .with_conn(|conn| {
                Ok([
                    get_record(conn, record_types::ITEM_GROUP, "All Item Groups")?.unwrap(),
                    get_record(conn, record_types::ITEM_GROUP, "Products")?.unwrap(),
                    get_record(conn, record_types::ITEM_GROUP, "Hardware")?.unwrap(),
                ])
            })
            .unwrap();

        let [root, products, hardware] = rows;
        assert_eq!(root.lft, Some(1));
        assert_eq!(root.rgt, Some(10));
        assert!(products.lft.unwrap() < hardware.lft.unwrap());
        assert!(hardware.rgt.unwrap() < products.rgt.unwrap());
    }

    #[test]
    fn test_rebuild_rejects_orphans() {
        let db = TenantDb::open_in_memory().unwrap();

        let specs = vec![group("Dangling", "No Such Parent")];
        db.with_conn_mut(|conn| {
            bulk_seed(conn, specs, &SeedOptions { maintain_tree: false })
        })
        .unwrap();

        let err = db
            .with_conn(|conn| rebuild_tree(conn, record_types::ITEM_GROUP, "parent_item_group"))
            .unwrap_err();
        assert!(matches!(err, SetupError::Internal(_)));
    }

    #[test]
    fn test_get_root() {
        let db = TenantDb::open_in_memory().unwrap();

        let specs = vec![
            group("All Item Groups", ""),
            group("Products", "All Item Groups"),
        ];
        db.with_conn_mut(|conn| bulk_seed(conn, specs, &SeedOptions::default()))
            .unwrap();

        let root = db
            .with_conn(|conn| get_root(conn, record_types::ITEM_GROUP))
            .unwrap();
        assert_eq!(root.as_deref(), Some("All Item Groups"));
    }
}
