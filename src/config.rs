//! Setup profile configuration

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::setup::SetupArgs;

/// Setup profile loaded from a TOML file
///
/// Dates are quoted ISO strings ("2024-04-01"). Every field except
/// `company_name` has a usable default; the company name must come from the
/// profile or a CLI override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupConfig {
    /// Tenant database file
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Localization country
    #[serde(default = "default_country")]
    pub country: String,

    /// Company name
    #[serde(default)]
    pub company_name: String,

    /// Company abbreviation (derived from the name when empty)
    #[serde(default)]
    pub company_abbr: String,

    /// Default currency code
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Chart of accounts template name
    #[serde(default = "default_chart")]
    pub chart_of_accounts: String,

    /// First day of the first fiscal year
    #[serde(default = "default_fy_start")]
    pub fy_start_date: NaiveDate,

    /// Last day of the first fiscal year
    #[serde(default = "default_fy_end")]
    pub fy_end_date: NaiveDate,

    /// Active business domains
    #[serde(default)]
    pub domains: Vec<String>,

    /// Default bank account name (skipped when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("tenant.db")
}

fn default_country() -> String {
    "United States".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_chart() -> String {
    "Standard".to_string()
}

fn default_fy_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(Utc::now().year(), 1, 1).unwrap_or_default()
}

fn default_fy_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(Utc::now().year(), 12, 31).unwrap_or_default()
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            country: default_country(),
            company_name: String::new(),
            company_abbr: String::new(),
            currency: default_currency(),
            chart_of_accounts: default_chart(),
            fy_start_date: default_fy_start(),
            fy_end_date: default_fy_end(),
            domains: Vec::new(),
            bank_account: None,
        }
    }
}

impl SetupConfig {
    /// Load a profile from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SetupError> {
        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|e| SetupError::Config(format!("{}: {}", path.as_ref().display(), e)))
    }

    /// Save the profile to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SetupError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SetupError::Config(format!("Profile serialization failed: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject profiles that cannot drive an installation
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.company_name.trim().is_empty() {
            return Err(SetupError::Config("company_name must be set".to_string()));
        }
        if self.currency.trim().is_empty() {
            return Err(SetupError::Config("currency must be set".to_string()));
        }
        if self.fy_start_date >= self.fy_end_date {
            return Err(SetupError::Config(format!(
                "fy_start_date {} must precede fy_end_date {}",
                self.fy_start_date, self.fy_end_date
            )));
        }
        Ok(())
    }

    /// Company abbreviation: the configured one, or word initials
    pub fn abbr(&self) -> String {
        if !self.company_abbr.trim().is_empty() {
            return self.company_abbr.trim().to_string();
        }
        self.company_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(5)
            .collect::<String>()
            .to_uppercase()
    }

    /// Installation arguments for this profile
    pub fn to_args(&self) -> SetupArgs {
        SetupArgs {
            country: self.country.clone(),
            company_name: self.company_name.clone(),
            company_abbr: self.abbr(),
            currency: self.currency.clone(),
            chart_of_accounts: self.chart_of_accounts.clone(),
            fy_start_date: self.fy_start_date,
            fy_end_date: self.fy_end_date,
            domains: self.domains.clone(),
            bank_account: self.bank_account.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_profile_fills_defaults() {
        let config: SetupConfig = toml::from_str(
            r#"
            company_name = "Maple Works"
            fy_start_date = "2024-04-01"
            fy_end_date = "2025-03-31"
            "#,
        )
        .unwrap();

        assert_eq!(config.country, "United States");
        assert_eq!(config.currency, "USD");
        assert_eq!(config.chart_of_accounts, "Standard");
        assert_eq!(config.db_path, PathBuf::from("tenant.db"));
        assert_eq!(
            config.fy_start_date,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_profiles() {
        let mut config = SetupConfig::default();
        assert!(config.validate().is_err());

        config.company_name = "Maple Works".to_string();
        config.validate().unwrap();

        config.fy_end_date = config.fy_start_date;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_abbr_derived_from_initials() {
        let mut config = SetupConfig::default();
        config.company_name = "Maple Works Trading Company".to_string();
        assert_eq!(config.abbr(), "MWTC");

        config.company_abbr = "mw".to_string();
        assert_eq!(config.abbr(), "mw");
    }

    #[test]
    fn test_profile_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setup.toml");

        let mut config = SetupConfig::default();
        config.company_name = "Maple Works".to_string();
        config.domains = vec!["Retail".to_string()];
        config.save(&path).unwrap();

        let loaded = SetupConfig::load(&path).unwrap();
        assert_eq!(loaded.company_name, "Maple Works");
        assert_eq!(loaded.domains, vec!["Retail".to_string()]);
        assert_eq!(loaded.fy_start_date, config.fy_start_date);
        assert!(loaded.bank_account.is_none());
    }
}
