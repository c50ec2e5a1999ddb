//! Global search priorities

use rusqlite::Connection;
use tracing::debug;

use crate::error::SetupError;
use crate::settings::GlobalSearchSettings;

/// Record types surfaced by global search, in priority order
pub const SEARCH_PRIORITIES: &[&str] = &[
    "Customer",
    "Supplier",
    "Item",
    "Warehouse",
    "Account",
    "Payment Entry",
    "Project",
    "Sales Invoice",
    "Sales Order",
    "Quotation",
    "Work Order",
    "Purchase Order",
    "Purchase Receipt",
    "Purchase Invoice",
    "Delivery Note",
    "Stock Entry",
    "Material Request",
    "Delivery Trip",
    "Pick List",
    "Salary Slip",
    "Leave Application",
    "Expense Claim",
    "Payment Request",
    "Lead",
    "Opportunity",
    "Item Price",
    "Blanket Order",
    "BOM",
    "Journal Entry",
];

/// Rewrite the search settings singleton from the priority catalog
pub fn refresh_global_search(conn: &Connection) -> Result<(), SetupError> {
    let mut settings = GlobalSearchSettings::load(conn)?;
    settings.search_priorities = SEARCH_PRIORITIES.iter().map(|s| s.to_string()).collect();
    settings.save(conn)?;

    debug!(
        record_types = SEARCH_PRIORITIES.len(),
        "Refreshed global search priorities"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::TenantDb;

    #[test]
    fn test_refresh_overwrites_priorities() {
        let db = TenantDb::open_in_memory().unwrap();

        db.with_conn(|conn| {
            let mut settings = GlobalSearchSettings::load(conn)?;
            settings.search_priorities = vec!["Stale Entry".to_string()];
            settings.save(conn)?;
            refresh_global_search(conn)
        })
        .unwrap();

        let settings = db.with_conn(GlobalSearchSettings::load).unwrap();
        assert_eq!(settings.search_priorities.len(), SEARCH_PRIORITIES.len());
        assert_eq!(settings.search_priorities[0], "Customer");
        assert!(!settings.search_priorities.contains(&"Stale Entry".to_string()));
    }
}
