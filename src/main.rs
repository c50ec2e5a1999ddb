//! Tenant setup command
//!
//! Seeds a fresh tenant database with the default reference data: master
//! records for the country, the company with its chart of accounts, the
//! department tree and the tenant defaults. Re-running against the same
//! database skips everything that already exists.
//!
//! ## Usage
//!
//! ```bash
//! # Seed a tenant from a profile
//! ledgerkit-setup --config setup.toml
//!
//! # Profile fields can be overridden on the command line
//! ledgerkit-setup --config setup.toml --db /tenants/acme.db --bank-account "Primary Checking"
//!
//! # Or run without a profile
//! ledgerkit-setup --company-name "Acme Tools" --country Germany --currency EUR \
//!     --fy-start-date 2024-01-01 --fy-end-date 2024-12-31 --domain Manufacturing
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;
use ledgerkit_setup::{Installer, SetupConfig, TenantDb};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ledgerkit-setup")]
#[command(about = "Seed a tenant database with default reference data")]
struct Args {
    /// Path to a setup profile (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tenant database path
    #[arg(long)]
    db: Option<PathBuf>,

    /// Company name
    #[arg(long, env = "LEDGERKIT_COMPANY_NAME")]
    company_name: Option<String>,

    /// Company abbreviation (derived from the name when omitted)
    #[arg(long)]
    company_abbr: Option<String>,

    /// Localization country
    #[arg(long, env = "LEDGERKIT_COUNTRY")]
    country: Option<String>,

    /// Default currency code
    #[arg(long)]
    currency: Option<String>,

    /// Chart of accounts template name
    #[arg(long)]
    chart_of_accounts: Option<String>,

    /// First day of the first fiscal year (YYYY-MM-DD)
    #[arg(long)]
    fy_start_date: Option<NaiveDate>,

    /// Last day of the first fiscal year (YYYY-MM-DD)
    #[arg(long)]
    fy_end_date: Option<NaiveDate>,

    /// Active business domain (repeatable)
    #[arg(long = "domain")]
    domains: Vec<String>,

    /// Default bank account name
    #[arg(long)]
    bank_account: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("ledgerkit_setup=info".parse()?),
        )
        .init();

    let args = Args::parse();

    // Load profile
    let mut config = if let Some(config_path) = &args.config {
        SetupConfig::load(config_path)?
    } else {
        SetupConfig::default()
    };

    // Apply CLI overrides
    if let Some(db) = args.db {
        config.db_path = db;
    }
    if let Some(company_name) = args.company_name {
        config.company_name = company_name;
    }
    if let Some(company_abbr) = args.company_abbr {
        config.company_abbr = company_abbr;
    }
    if let Some(country) = args.country {
        config.country = country;
    }
    if let Some(currency) = args.currency {
        config.currency = currency;
    }
    if let Some(chart) = args.chart_of_accounts {
        config.chart_of_accounts = chart;
    }
    if let Some(start) = args.fy_start_date {
        config.fy_start_date = start;
    }
    if let Some(end) = args.fy_end_date {
        config.fy_end_date = end;
    }
    if !args.domains.is_empty() {
        config.domains = args.domains;
    }
    if let Some(bank_account) = args.bank_account {
        config.bank_account = Some(bank_account);
    }

    config.validate()?;

    info!(
        db = %config.db_path.display(),
        company = %config.company_name,
        country = %config.country,
        "Starting tenant setup"
    );

    let db = Arc::new(TenantDb::open(&config.db_path)?);
    let installer = Installer::new(Arc::clone(&db));
    let report = installer.run(&config.to_args())?;

    let totals = report.totals();
    for error in &totals.errors {
        warn!(error = %error, "Seed error");
    }
    info!(
        inserted = totals.inserted,
        skipped = totals.skipped,
        errors = totals.errors.len(),
        "Tenant setup finished"
    );

    if let Ok(stats) = db.stats() {
        info!(
            records = stats.record_count,
            record_types = stats.type_count,
            "Tenant database stats"
        );
    }

    Ok(())
}
