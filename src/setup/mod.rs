//! Tenant setup orchestration
//!
//! The installer runs the phases of a fresh-tenant setup in a fixed order:
//! base fixtures for the country, the company with its chart of accounts and
//! warehouses, the department tree, then tenant defaults (price lists,
//! currency, settings singletons, optional bank account). Every phase is
//! duplicate tolerant, so a failed run can be repeated from the top.

pub mod address;
pub mod company;
pub mod defaults;
pub mod departments;
pub mod install;
pub mod search;

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::db::{SeedReport, TenantDb};
use crate::error::SetupError;

/// Parameters of one tenant setup run
#[derive(Debug, Clone)]
pub struct SetupArgs {
    pub country: String,
    pub company_name: String,
    pub company_abbr: String,
    pub currency: String,
    pub chart_of_accounts: String,
    pub fy_start_date: NaiveDate,
    pub fy_end_date: NaiveDate,
    pub domains: Vec<String>,
    pub bank_account: Option<String>,
}

/// Per-phase seed summaries of one installation run
#[derive(Debug, Default, Serialize)]
pub struct InstallReport {
    pub fixtures: SeedReport,
    pub company: SeedReport,
    pub departments: SeedReport,
    pub defaults: SeedReport,
}

impl InstallReport {
    /// All phases folded into one summary
    pub fn totals(&self) -> SeedReport {
        let mut totals = SeedReport::default();
        totals.merge(self.fixtures.clone());
        totals.merge(self.company.clone());
        totals.merge(self.departments.clone());
        totals.merge(self.defaults.clone());
        totals
    }
}

/// Runs the full default-data installation against one tenant database
pub struct Installer {
    db: Arc<TenantDb>,
}

impl Installer {
    pub fn new(db: Arc<TenantDb>) -> Self {
        Self { db }
    }

    /// Run every setup phase in order and collect the seed summaries
    pub fn run(&self, args: &SetupArgs) -> Result<InstallReport, SetupError> {
        if args.company_name.trim().is_empty() {
            return Err(SetupError::InvalidInput(
                "company name must not be empty".to_string(),
            ));
        }
        if args.fy_start_date >= args.fy_end_date {
            return Err(SetupError::InvalidInput(format!(
                "fiscal year start {} must precede end {}",
                args.fy_start_date, args.fy_end_date
            )));
        }

        info!(
            company = %args.company_name,
            country = %args.country,
            "Starting tenant installation"
        );

        let report = InstallReport {
            fixtures: install::install_base_fixtures(&self.db, &args.country)?,
            company: company::install_company(&self.db, args)?,
            departments: departments::install_departments(&self.db, &args.company_name)?,
            defaults: defaults::install_defaults(&self.db, args)?,
        };

        let totals = report.totals();
        info!(
            inserted = totals.inserted,
            skipped = totals.skipped,
            errors = totals.errors.len(),
            "Tenant installation finished"
        );

        Ok(report)
    }
}
