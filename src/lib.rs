//! LedgerKit tenant setup - default-data installer
//!
//! Populates a fresh tenant's record store with the reference data a new
//! deployment needs before the first transaction: master records localized
//! for a country, a company with its fiscal year, chart of accounts and
//! warehouses, a department tree, settings singletons and bundled catalogs
//! (units of measure, email templates, supplier-scorecard defaults).
//!
//! ## Architecture
//!
//! - **Record store**: one SQLite file per tenant; every record shares one
//!   generic table keyed by (record_type, name) with its fields in a JSON
//!   column. Hierarchical types carry nested-set bounds.
//! - **Fixtures**: the bundled data. Fixed record lists, JSON catalogs and
//!   HTML template bodies compiled into the binary.
//! - **Setup phases**: base fixtures, company, departments, defaults. Each
//!   phase is duplicate tolerant and reports inserted/skipped counts, so an
//!   interrupted run is repeated from the top.
//!
//! ## Idempotence
//!
//! Two strategies, used deliberately side by side: the bulk seed path skips
//! any (record_type, name) that exists, while the UOM bootstrap checks its
//! own keys (UOM name, conversion from/to pair) because conversion records
//! carry generated names.

pub mod config;
pub mod db;
pub mod error;
pub mod fixtures;
pub mod settings;
pub mod setup;

// Re-exports
pub use config::SetupConfig;
pub use db::{DbStats, SeedReport, TenantDb};
pub use error::SetupError;
pub use setup::{InstallReport, Installer, SetupArgs};
