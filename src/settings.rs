//! Typed views over the settings singletons
//!
//! Each settings record is a singleton row in the record store (name equals
//! record_type). The structs here load with field defaults filled in, get
//! mutated by the installer, and save by merging their fields back into the
//! stored mapping, so fields written by other tools survive a save.

use rusqlite::Connection;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::db::{record_types, records};
use crate::error::SetupError;

fn load<T: DeserializeOwned + Default>(
    conn: &Connection,
    record_type: &str,
) -> Result<T, SetupError> {
    let map = records::get_singleton(conn, record_type)?;
    if map.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_value(Value::Object(map))
        .map_err(|e| SetupError::Parse(format!("{} singleton: {}", record_type, e)))
}

fn save<T: Serialize>(conn: &Connection, record_type: &str, value: &T) -> Result<(), SetupError> {
    let fields = match serde_json::to_value(value)? {
        Value::Object(map) => map,
        other => {
            return Err(SetupError::Internal(format!(
                "{} singleton serialized to non-object: {}",
                record_type, other
            )))
        }
    };
    records::merge_singleton(conn, record_type, fields)
}

/// Selling Settings singleton
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellingSettings {
    #[serde(default = "default_cust_master_name")]
    pub cust_master_name: String,
    #[serde(default)]
    pub customer_group: String,
    #[serde(default)]
    pub territory: String,
    #[serde(default = "default_no")]
    pub so_required: String,
    #[serde(default = "default_no")]
    pub dn_required: String,
    #[serde(default)]
    pub allow_multiple_items: i64,
    #[serde(default = "default_sales_update_frequency")]
    pub sales_update_frequency: String,
}

fn default_cust_master_name() -> String {
    "Customer Name".to_string()
}

fn default_no() -> String {
    "No".to_string()
}

fn default_sales_update_frequency() -> String {
    "Each Transaction".to_string()
}

impl Default for SellingSettings {
    fn default() -> Self {
        Self {
            cust_master_name: default_cust_master_name(),
            customer_group: String::new(),
            territory: String::new(),
            so_required: default_no(),
            dn_required: default_no(),
            allow_multiple_items: 0,
            sales_update_frequency: default_sales_update_frequency(),
        }
    }
}

impl SellingSettings {
    pub fn load(conn: &Connection) -> Result<Self, SetupError> {
        load(conn, record_types::SELLING_SETTINGS)
    }

    pub fn save(&self, conn: &Connection) -> Result<(), SetupError> {
        save(conn, record_types::SELLING_SETTINGS, self)
    }
}

/// Buying Settings singleton
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyingSettings {
    #[serde(default = "default_supp_master_name")]
    pub supp_master_name: String,
    #[serde(default = "default_no")]
    pub po_required: String,
    #[serde(default = "default_no")]
    pub pr_required: String,
    #[serde(default)]
    pub maintain_same_rate: i64,
    #[serde(default)]
    pub allow_multiple_items: i64,
}

fn default_supp_master_name() -> String {
    "Supplier Name".to_string()
}

impl Default for BuyingSettings {
    fn default() -> Self {
        Self {
            supp_master_name: default_supp_master_name(),
            po_required: default_no(),
            pr_required: default_no(),
            maintain_same_rate: 0,
            allow_multiple_items: 0,
        }
    }
}

impl BuyingSettings {
    pub fn load(conn: &Connection) -> Result<Self, SetupError> {
        load(conn, record_types::BUYING_SETTINGS)
    }

    pub fn save(&self, conn: &Connection) -> Result<(), SetupError> {
        save(conn, record_types::BUYING_SETTINGS, self)
    }
}

/// Stock Settings singleton
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockSettings {
    #[serde(default)]
    pub item_naming_by: String,
    #[serde(default)]
    pub valuation_method: String,
    #[serde(default)]
    pub default_warehouse: String,
    #[serde(default)]
    pub stock_uom: String,
    #[serde(default)]
    pub auto_indent: i64,
    #[serde(default)]
    pub auto_insert_price_list_rate_if_missing: i64,
    #[serde(default)]
    pub automatically_set_serial_nos_based_on_fifo: i64,
    #[serde(default)]
    pub set_qty_in_transactions_based_on_serial_no_input: i64,
    #[serde(default)]
    pub email_footer_address: String,
}

impl StockSettings {
    pub fn load(conn: &Connection) -> Result<Self, SetupError> {
        load(conn, record_types::STOCK_SETTINGS)
    }

    pub fn save(&self, conn: &Connection) -> Result<(), SetupError> {
        save(conn, record_types::STOCK_SETTINGS, self)
    }
}

/// Global Defaults singleton
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalDefaults {
    #[serde(default)]
    pub current_fiscal_year: String,
    #[serde(default)]
    pub default_currency: String,
    #[serde(default)]
    pub default_company: String,
    #[serde(default)]
    pub country: String,
}

impl GlobalDefaults {
    pub fn load(conn: &Connection) -> Result<Self, SetupError> {
        load(conn, record_types::GLOBAL_DEFAULTS)
    }

    pub fn save(&self, conn: &Connection) -> Result<(), SetupError> {
        save(conn, record_types::GLOBAL_DEFAULTS, self)
    }
}

/// Domain Settings singleton (active business domains)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainSettings {
    #[serde(default)]
    pub active_domains: Vec<String>,
}

impl DomainSettings {
    pub fn load(conn: &Connection) -> Result<Self, SetupError> {
        load(conn, record_types::DOMAIN_SETTINGS)
    }

    pub fn save(&self, conn: &Connection) -> Result<(), SetupError> {
        save(conn, record_types::DOMAIN_SETTINGS, self)
    }
}

/// Item Variant Settings singleton (fields exempted from variant copy)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemVariantSettings {
    #[serde(default)]
    pub fields: Vec<String>,
}

impl ItemVariantSettings {
    pub fn load(conn: &Connection) -> Result<Self, SetupError> {
        load(conn, record_types::ITEM_VARIANT_SETTINGS)
    }

    pub fn save(&self, conn: &Connection) -> Result<(), SetupError> {
        save(conn, record_types::ITEM_VARIANT_SETTINGS, self)
    }
}

/// E Commerce Settings singleton
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ECommerceSettings {
    #[serde(default)]
    pub enabled: i64,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub price_list: String,
    #[serde(default)]
    pub default_customer_group: String,
    #[serde(default)]
    pub quotation_series: String,
}

impl ECommerceSettings {
    pub fn load(conn: &Connection) -> Result<Self, SetupError> {
        load(conn, record_types::ECOMMERCE_SETTINGS)
    }

    pub fn save(&self, conn: &Connection) -> Result<(), SetupError> {
        save(conn, record_types::ECOMMERCE_SETTINGS, self)
    }
}

/// Global Search Settings singleton (ordered record-type priorities)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalSearchSettings {
    #[serde(default)]
    pub search_priorities: Vec<String>,
}

impl GlobalSearchSettings {
    pub fn load(conn: &Connection) -> Result<Self, SetupError> {
        load(conn, record_types::GLOBAL_SEARCH_SETTINGS)
    }

    pub fn save(&self, conn: &Connection) -> Result<(), SetupError> {
        save(conn, record_types::GLOBAL_SEARCH_SETTINGS, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::TenantDb;

    #[test]
    fn test_settings_save_then_load() {
        let db = TenantDb::open_in_memory().unwrap();

        db.with_conn(|conn| {
            let mut selling = SellingSettings::load(conn)?;
            selling.customer_group = "All Customer Groups".to_string();
            selling.allow_multiple_items = 1;
            selling.save(conn)
        })
        .unwrap();

        let selling = db.with_conn(|conn| SellingSettings::load(conn)).unwrap();
        assert_eq!(selling.customer_group, "All Customer Groups");
        assert_eq!(selling.allow_multiple_items, 1);
        // Field defaults still present
        assert_eq!(selling.cust_master_name, "Customer Name");
        assert_eq!(selling.so_required, "No");
    }

    #[test]
    fn test_save_merges_foreign_fields() {
        let db = TenantDb::open_in_memory().unwrap();

        // A field the typed struct does not know about
        db.with_conn(|conn| {
            records::update_singleton(
                conn,
                record_types::STOCK_SETTINGS,
                &[("over_delivery_receipt_allowance", Value::from(10))],
            )
        })
        .unwrap();

        db.with_conn(|conn| {
            let mut stock = StockSettings::load(conn)?;
            stock.valuation_method = "FIFO".to_string();
            stock.save(conn)
        })
        .unwrap();

        let raw = db
            .with_conn(|conn| records::get_singleton(conn, record_types::STOCK_SETTINGS))
            .unwrap();
        assert_eq!(
            raw.get("over_delivery_receipt_allowance"),
            Some(&Value::from(10))
        );
        assert_eq!(raw.get("valuation_method"), Some(&Value::from("FIFO")));
    }
}
