//! Department tree installation
//!
//! The root group is placed into the nested set as it lands; the thirteen
//! leaves are a pure sibling batch, so they skip incremental placement and
//! one rebuild pass numbers the whole tree from the parent pointers.

use tracing::info;

use crate::db::{record_types, records, tree, SeedOptions, SeedReport, TenantDb};
use crate::error::SetupError;
use crate::fixtures::master;

/// Create the "All Departments" root and the default departments of a company
pub fn install_departments(db: &TenantDb, company_name: &str) -> Result<SeedReport, SetupError> {
    info!(company = %company_name, "Installing department tree");

    let mut specs = master::department_records(company_name);
    let root = specs.remove(0);

    let mut report = db.with_conn_mut(|conn| {
        records::bulk_seed(conn, vec![root], &SeedOptions::default())
    })?;

    report.merge(db.with_conn_mut(|conn| {
        let leaves = records::bulk_seed(conn, specs, &SeedOptions { maintain_tree: false })?;
        tree::rebuild_tree(conn, record_types::DEPARTMENT, "parent_department")?;
        Ok(leaves)
    })?);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::records::get_record;

    #[test]
    fn test_department_tree_is_consistent() {
        let db = TenantDb::open_in_memory().unwrap();

        let report = install_departments(&db, "Maple Works").unwrap();
        assert_eq!(report.inserted, 14);
        assert!(report.errors.is_empty());

        let (root, accounts, legal) = db
            .with_conn(|conn| {
                Ok((
                    get_record(conn, record_types::DEPARTMENT, "All Departments")?.unwrap(),
                    get_record(conn, record_types::DEPARTMENT, "Accounts")?.unwrap(),
                    get_record(conn, record_types::DEPARTMENT, "Legal")?.unwrap(),
                ))
            })
            .unwrap();

        assert!(root.get_flag("is_group"));
        assert_eq!(root.get_str("parent_department"), Some(""));
        assert_eq!(accounts.get_str("parent_department"), Some("All Departments"));
        assert_eq!(accounts.get_str("company"), Some("Maple Works"));

        // 14 nodes: the root interval spans 1..=28 after the rebuild
        assert_eq!(root.lft, Some(1));
        assert_eq!(root.rgt, Some(28));
        for leaf in [&accounts, &legal] {
            assert_eq!(leaf.rgt.unwrap() - leaf.lft.unwrap(), 1);
            assert!(root.lft.unwrap() < leaf.lft.unwrap());
            assert!(leaf.rgt.unwrap() < root.rgt.unwrap());
        }
    }

    #[test]
    fn test_install_departments_is_repeatable() {
        let db = TenantDb::open_in_memory().unwrap();

        install_departments(&db, "Maple Works").unwrap();
        let second = install_departments(&db, "Maple Works").unwrap();
        assert_eq!(second.inserted, 0);
        assert_eq!(second.skipped, 14);
        assert!(second.errors.is_empty());
    }
}
