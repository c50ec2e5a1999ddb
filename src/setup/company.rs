//! Company and fiscal year installation
//!
//! Creates the fiscal year and company records, materializes the standard
//! chart of accounts for the company and creates its default warehouse set.

use chrono::{Datelike, NaiveDate};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::db::{record_types, records, tree, RecordSpec, SeedOptions, SeedReport, TenantDb};
use crate::error::SetupError;
use crate::fixtures::{coa, master};
use crate::setup::SetupArgs;

/// Label of a fiscal year: the bare start year when the period stays inside
/// one calendar year, otherwise "start-start+1"
pub fn fiscal_year_label(start: NaiveDate, end: NaiveDate) -> String {
    if start.year() == end.year() {
        start.year().to_string()
    } else {
        format!("{}-{}", start.year(), start.year() + 1)
    }
}

/// Create the fiscal year and company, then the company's accounts and
/// warehouses
pub fn install_company(db: &TenantDb, args: &SetupArgs) -> Result<SeedReport, SetupError> {
    let label = fiscal_year_label(args.fy_start_date, args.fy_end_date);

    info!(
        company = %args.company_name,
        fiscal_year = %label,
        "Installing company"
    );

    let specs = vec![
        RecordSpec::new(record_types::FISCAL_YEAR, &label)
            .field("year", label.as_str())
            .field("year_start_date", args.fy_start_date.to_string())
            .field("year_end_date", args.fy_end_date.to_string()),
        RecordSpec::new(record_types::COMPANY, &args.company_name)
            .field("company_name", args.company_name.as_str())
            .field("abbr", args.company_abbr.as_str())
            .field("default_currency", args.currency.as_str())
            .field("country", args.country.as_str())
            .field("create_chart_of_accounts_based_on", "Standard Template")
            .field("chart_of_accounts", args.chart_of_accounts.as_str())
            .field("enable_perpetual_inventory", 1)
            .field("domains", Value::from(args.domains.clone())),
    ];

    let mut report = db.with_conn_mut(|conn| {
        records::bulk_seed(conn, specs, &SeedOptions::default())
    })?;

    report.merge(create_company_accounts(db, args)?);
    report.merge(create_default_warehouses(db, args)?);

    Ok(report)
}

/// Materialize the chart of accounts for the company and rebuild the
/// account tree
///
/// Only the bundled standard template exists; an unknown template name falls
/// back to it so the rest of the setup keeps its account prerequisites.
fn create_company_accounts(db: &TenantDb, args: &SetupArgs) -> Result<SeedReport, SetupError> {
    if args.chart_of_accounts != coa::STANDARD_TEMPLATE {
        warn!(
            chart = %args.chart_of_accounts,
            "Unknown chart template, using the standard chart"
        );
    }

    let specs = coa::chart_records(&args.company_name, &args.company_abbr)?;
    let account_count = specs.len();

    // Sibling batch: skip incremental placement, rebuild once at the end
    let report = db.with_conn_mut(|conn| {
        let report = records::bulk_seed(conn, specs, &SeedOptions { maintain_tree: false })?;
        tree::rebuild_tree(conn, record_types::ACCOUNT, "parent_account")?;
        Ok(report)
    })?;

    debug!(accounts = account_count, "Chart of accounts materialized");

    Ok(report)
}

/// Create the default warehouse group and leaves for the company
fn create_default_warehouses(db: &TenantDb, args: &SetupArgs) -> Result<SeedReport, SetupError> {
    let specs = master::default_warehouse_records(&args.company_name, &args.company_abbr);
    db.with_conn_mut(|conn| records::bulk_seed(conn, specs, &SeedOptions::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::records::get_record;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn test_args() -> SetupArgs {
        SetupArgs {
            country: "India".to_string(),
            company_name: "Maple Works".to_string(),
            company_abbr: "MW".to_string(),
            currency: "INR".to_string(),
            chart_of_accounts: "Standard".to_string(),
            fy_start_date: ymd(2024, 4, 1),
            fy_end_date: ymd(2025, 3, 31),
            domains: vec!["Manufacturing".to_string()],
            bank_account: None,
        }
    }

    #[test]
    fn test_fiscal_year_label() {
        assert_eq!(fiscal_year_label(ymd(2024, 4, 1), ymd(2025, 3, 31)), "2024-2025");
        assert_eq!(fiscal_year_label(ymd(2024, 1, 1), ymd(2024, 12, 31)), "2024");
    }

    #[test]
    fn test_install_company_creates_fiscal_year_and_company() {
        let db = TenantDb::open_in_memory().unwrap();
        let report = install_company(&db, &test_args()).unwrap();
        assert!(report.errors.is_empty());

        let (fiscal_year, company) = db
            .with_conn(|conn| {
                Ok((
                    get_record(conn, record_types::FISCAL_YEAR, "2024-2025")?.unwrap(),
                    get_record(conn, record_types::COMPANY, "Maple Works")?.unwrap(),
                ))
            })
            .unwrap();

        assert_eq!(fiscal_year.get_str("year_start_date"), Some("2024-04-01"));
        assert_eq!(company.get_str("abbr"), Some("MW"));
        assert_eq!(company.get_str("default_currency"), Some("INR"));
        assert!(company.get_flag("enable_perpetual_inventory"));
    }

    #[test]
    fn test_install_company_materializes_accounts() {
        let db = TenantDb::open_in_memory().unwrap();
        install_company(&db, &test_args()).unwrap();

        let (bank_group, debtors, root) = db
            .with_conn(|conn| {
                Ok((
                    get_record(conn, record_types::ACCOUNT, "Bank Accounts - MW")?.unwrap(),
                    get_record(conn, record_types::ACCOUNT, "Debtors - MW")?.unwrap(),
                    get_record(conn, record_types::ACCOUNT, "Application of Funds (Assets) - MW")?
                        .unwrap(),
                ))
            })
            .unwrap();

        assert_eq!(bank_group.get_str("account_type"), Some("Bank"));
        assert!(bank_group.get_flag("is_group"));
        assert_eq!(debtors.get_str("root_type"), Some("Asset"));

        // Rebuild gave the root enclosing bounds
        assert!(root.lft.unwrap() < bank_group.lft.unwrap());
        assert!(bank_group.rgt.unwrap() < root.rgt.unwrap());
    }

    #[test]
    fn test_install_company_creates_default_warehouses() {
        let db = TenantDb::open_in_memory().unwrap();
        install_company(&db, &test_args()).unwrap();

        let (transit, stores) = db
            .with_conn(|conn| {
                Ok((
                    get_record(conn, record_types::WAREHOUSE, "Goods In Transit - MW")?.unwrap(),
                    get_record(conn, record_types::WAREHOUSE, "Stores - MW")?.unwrap(),
                ))
            })
            .unwrap();

        assert_eq!(transit.get_str("warehouse_type"), Some("Transit"));
        assert_eq!(stores.get_str("parent_warehouse"), Some("All Warehouses - MW"));
        assert_eq!(stores.get_str("company"), Some("Maple Works"));
    }

    #[test]
    fn test_install_company_is_repeatable() {
        let db = TenantDb::open_in_memory().unwrap();

        let first = install_company(&db, &test_args()).unwrap();
        assert!(first.errors.is_empty());

        let second = install_company(&db, &test_args()).unwrap();
        assert_eq!(second.inserted, 0);
        assert!(second.errors.is_empty());
        assert_eq!(first.inserted, second.skipped);
    }
}
