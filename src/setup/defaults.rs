//! Tenant defaults installation
//!
//! Runs after the company exists: standard price lists, the enabled tenant
//! currency, the global defaults, stock and e-commerce settings, the active
//! business domains and the optional default bank account.

use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use tracing::{debug, info};

use crate::db::{record_types, records, tree, RecordSpec, SeedOptions, SeedReport, TenantDb};
use crate::error::SetupError;
use crate::settings::{DomainSettings, ECommerceSettings, GlobalDefaults, StockSettings};
use crate::setup::SetupArgs;

/// Install the tenant defaults for a freshly created company
pub fn install_defaults(db: &TenantDb, args: &SetupArgs) -> Result<SeedReport, SetupError> {
    info!(
        company = %args.company_name,
        currency = %args.currency,
        "Installing tenant defaults"
    );

    let specs = vec![
        RecordSpec::new(record_types::PRICE_LIST, "Standard Buying")
            .field("price_list_name", "Standard Buying")
            .field("enabled", 1)
            .field("buying", 1)
            .field("selling", 0)
            .field("currency", args.currency.as_str()),
        RecordSpec::new(record_types::PRICE_LIST, "Standard Selling")
            .field("price_list_name", "Standard Selling")
            .field("enabled", 1)
            .field("buying", 0)
            .field("selling", 1)
            .field("currency", args.currency.as_str()),
    ];
    let report = db.with_conn_mut(|conn| {
        records::bulk_seed(conn, specs, &SeedOptions::default())
    })?;

    db.with_conn(|conn| {
        enable_currency(conn, &args.currency)?;
        set_global_defaults(conn, args)?;
        update_stock_settings(conn, &args.company_name)?;
        set_active_domains(conn, &args.domains)?;
        update_shopping_cart_settings(conn, args)
    })?;

    create_bank_account(db, args, true)?;

    Ok(report)
}

/// Enable the tenant currency, creating its record when absent
fn enable_currency(conn: &Connection, currency: &str) -> Result<(), SetupError> {
    if records::record_exists(conn, record_types::CURRENCY, currency)? {
        records::set_field(conn, record_types::CURRENCY, currency, "enabled", Value::from(1))
    } else {
        let spec = RecordSpec::new(record_types::CURRENCY, currency)
            .field("currency_name", currency)
            .field("enabled", 1);
        records::insert_record(conn, &spec)
    }
}

/// Point the global defaults at the installed company
///
/// The current fiscal year is the one with the earliest start date, so a
/// tenant carrying several fiscal years always resolves the same way.
fn set_global_defaults(conn: &Connection, args: &SetupArgs) -> Result<(), SetupError> {
    let mut defaults = GlobalDefaults::load(conn)?;
    if let Some(fiscal_year) = earliest_fiscal_year(conn)? {
        defaults.current_fiscal_year = fiscal_year;
    }
    defaults.default_currency = args.currency.clone();
    defaults.default_company = args.company_name.clone();
    defaults.country = args.country.clone();
    defaults.save(conn)
}

/// Fiscal year with the earliest start date, None when none exist
fn earliest_fiscal_year(conn: &Connection) -> Result<Option<String>, SetupError> {
    conn.query_row(
        "SELECT name FROM records WHERE record_type = ?
         ORDER BY json_extract(data, '$.year_start_date') LIMIT 1",
        params![record_types::FISCAL_YEAR],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| SetupError::Internal(format!("Fiscal year lookup failed: {}", e)))
}

fn update_stock_settings(conn: &Connection, company_name: &str) -> Result<(), SetupError> {
    let mut stock = StockSettings::load(conn)?;
    stock.item_naming_by = "Item Code".to_string();
    stock.valuation_method = "FIFO".to_string();
    if let Some(stores) = records::find_matching(
        conn,
        record_types::WAREHOUSE,
        &[("warehouse_name", Value::from("Stores"))],
    )? {
        stock.default_warehouse = stores;
    }
    stock.stock_uom = "Nos".to_string();
    stock.auto_indent = 1;
    stock.auto_insert_price_list_rate_if_missing = 1;
    stock.automatically_set_serial_nos_based_on_fifo = 1;
    stock.set_qty_in_transactions_based_on_serial_no_input = 1;
    stock.email_footer_address = company_name.to_string();
    stock.save(conn)
}

fn set_active_domains(conn: &Connection, domains: &[String]) -> Result<(), SetupError> {
    let mut settings = DomainSettings::load(conn)?;
    settings.active_domains = domains.to_vec();
    settings.save(conn)
}

fn update_shopping_cart_settings(conn: &Connection, args: &SetupArgs) -> Result<(), SetupError> {
    let mut cart = ECommerceSettings::load(conn)?;
    cart.enabled = 1;
    cart.company = args.company_name.clone();
    if let Some(selling) = records::find_matching(
        conn,
        record_types::PRICE_LIST,
        &[("selling", Value::from(1))],
    )? {
        cart.price_list = selling;
    }
    cart.default_customer_group = "Individual".to_string();
    cart.quotation_series = "QTN-".to_string();
    cart.save(conn)
}

/// Create the default bank account under the company's Bank group account
///
/// Does nothing when no account name was requested or when the company has
/// no Bank group account to put it under. A requested name that collides
/// with a root account is rejected; one that collides with an account the
/// chart import already created is treated as satisfied, but not recorded
/// as the company default.
pub fn create_bank_account(
    db: &TenantDb,
    args: &SetupArgs,
    set_default: bool,
) -> Result<(), SetupError> {
    let bank_account = match args.bank_account.as_deref().filter(|s| !s.is_empty()) {
        Some(name) => name,
        None => return Ok(()),
    };

    db.with_conn(|conn| {
        let group = records::find_matching(
            conn,
            record_types::ACCOUNT,
            &[
                ("account_type", Value::from("Bank")),
                ("is_group", Value::from(1)),
                ("root_type", Value::from("Asset")),
                ("company", Value::from(args.company_name.as_str())),
            ],
        )?;
        let group = match group {
            Some(group) => group,
            None => {
                debug!(
                    company = %args.company_name,
                    "No Bank group account, skipping bank account creation"
                );
                return Ok(());
            }
        };

        let abbr = records::get_field(conn, record_types::COMPANY, &args.company_name, "abbr")?
            .and_then(|v| v.as_str().map(String::from))
            .unwrap_or_default();
        let account_name = if abbr.is_empty() {
            bank_account.to_string()
        } else {
            format!("{} - {}", bank_account, abbr)
        };

        if let Some(existing) = records::get_record(conn, record_types::ACCOUNT, &account_name)? {
            let is_root = existing
                .get_str("parent_account")
                .map_or(true, |p| p.is_empty());
            if is_root {
                return Err(SetupError::ProtectedAccount(bank_account.to_string()));
            }
            // Already created by the chart import
            return Ok(());
        }

        let spec = RecordSpec::new(record_types::ACCOUNT, &account_name)
            .field("account_name", bank_account)
            .field("account_type", "Bank")
            .field("parent_account", group.as_str())
            .field("company", args.company_name.as_str())
            .field("root_type", "Asset")
            .field("report_type", "Balance Sheet")
            .field("is_group", 0);
        records::insert_record(conn, &spec)?;
        tree::place_in_tree(conn, record_types::ACCOUNT, &account_name, Some(group.as_str()))?;

        if set_default {
            records::set_field(
                conn,
                record_types::COMPANY,
                &args.company_name,
                "default_bank_account",
                Value::from(account_name.as_str()),
            )?;
        }

        info!(account = %account_name, "Created default bank account");
        Ok(())
    })
}
