//! Base fixture installation
//!
//! Seeds the country-localized master records, email templates, address
//! template, settings defaults and the UOM catalogs. The record list goes
//! through the duplicate-tolerant bulk path; the UOM bootstrap deliberately
//! checks its own keys instead (name for UOMs, from/to pair for conversion
//! factors), since conversion records carry generated names the bulk path
//! could not match across runs.

use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::db::{record_types, records, tree, RecordSpec, SeedOptions, SeedReport, TenantDb};
use crate::error::SetupError;
use crate::fixtures::{master, scorecard, templates, uom};
use crate::settings::{BuyingSettings, ItemVariantSettings, SellingSettings};
use crate::setup::{address, search};

/// Fields never copied from a template item onto its variants
const VARIANT_EXEMPT_FIELDS: &[&str] = &[
    "naming_series",
    "item_code",
    "item_name",
    "published_in_website",
    "standard_rate",
    "opening_stock",
    "image",
    "variant_of",
    "valuation_rate",
    "description",
    "has_variants",
    "attributes",
];

/// Install the master and reference records for a country
///
/// Scorecard defaults first, then the full record list, the country's
/// address template, the secondary defaults and finally the global-search
/// priorities. Safe to re-run: existing records are skipped.
pub fn install_base_fixtures(db: &TenantDb, country: &str) -> Result<SeedReport, SetupError> {
    info!(country = %country, "Installing base fixtures");

    let mut report = db.with_conn_mut(|conn| {
        records::bulk_seed(conn, scorecard::default_records(), &SeedOptions::default())
    })?;

    let mut specs = master::base_records(country);
    specs.extend(templates::email_template_records());
    report.merge(db.with_conn_mut(|conn| {
        records::bulk_seed(conn, specs, &SeedOptions::default())
    })?);

    db.with_conn(|conn| address::set_up_address_templates(conn, country))?;

    report.merge(apply_secondary_defaults(db)?);

    db.with_conn(search::refresh_global_search)?;

    info!(
        inserted = report.inserted,
        skipped = report.skipped,
        "Base fixtures installed"
    );

    Ok(report)
}

/// Apply the settings defaults that need no company yet
///
/// Selling and buying settings, the UOM catalogs and the item variant
/// exemption list. The selling defaults point at the customer-group and
/// territory tree roots seeded by the record list.
pub fn apply_secondary_defaults(db: &TenantDb) -> Result<SeedReport, SetupError> {
    db.with_conn(|conn| {
        let mut selling = SellingSettings::load(conn)?;
        selling.cust_master_name = "Customer Name".to_string();
        selling.so_required = "No".to_string();
        selling.dn_required = "No".to_string();
        selling.allow_multiple_items = 1;
        selling.sales_update_frequency = "Each Transaction".to_string();
        if let Some(root) = tree::get_root(conn, record_types::CUSTOMER_GROUP)? {
            selling.customer_group = root;
        }
        if let Some(root) = tree::get_root(conn, record_types::TERRITORY)? {
            selling.territory = root;
        }
        selling.save(conn)?;

        let mut buying = BuyingSettings::load(conn)?;
        buying.supp_master_name = "Supplier Name".to_string();
        buying.po_required = "No".to_string();
        buying.pr_required = "No".to_string();
        buying.maintain_same_rate = 1;
        buying.allow_multiple_items = 1;
        buying.save(conn)
    })?;

    let report = add_uom_data(db)?;

    db.with_conn(|conn| {
        let mut variants = ItemVariantSettings::load(conn)?;
        variants.fields = VARIANT_EXEMPT_FIELDS.iter().map(|f| f.to_string()).collect();
        variants.save(conn)
    })?;

    Ok(report)
}

/// Bootstrap the UOM catalog and conversion factors from the bundled data
///
/// UOMs are checked by name before insertion. Conversion factors have no
/// natural name, so the category is ensured first and the (from_uom, to_uom)
/// pair is checked by field match; fresh entries get a generated name.
pub fn add_uom_data(db: &TenantDb) -> Result<SeedReport, SetupError> {
    let definitions = uom::uom_definitions()?;
    let conversions = uom::uom_conversions()?;

    db.with_conn(|conn| {
        let mut report = SeedReport::default();

        for def in &definitions {
            if records::record_exists(conn, record_types::UOM, &def.uom_name)? {
                report.skipped += 1;
                continue;
            }
            let spec = RecordSpec::new(record_types::UOM, &def.uom_name)
                .field("uom_name", def.uom_name.as_str())
                .field("must_be_whole_number", def.must_be_whole_number)
                .field("enabled", 1);
            records::insert_record(conn, &spec)?;
            report.inserted += 1;
        }

        for conv in &conversions {
            if !records::record_exists(conn, record_types::UOM_CATEGORY, &conv.category)? {
                let spec = RecordSpec::new(record_types::UOM_CATEGORY, &conv.category)
                    .field("category_name", conv.category.as_str());
                records::insert_record(conn, &spec)?;
                report.inserted += 1;
            }

            let existing = records::find_matching(
                conn,
                record_types::UOM_CONVERSION_FACTOR,
                &[
                    ("from_uom", Value::from(conv.from_uom.as_str())),
                    ("to_uom", Value::from(conv.to_uom.as_str())),
                ],
            )?;
            if existing.is_some() {
                report.skipped += 1;
                continue;
            }

            let spec = RecordSpec::new(
                record_types::UOM_CONVERSION_FACTOR,
                Uuid::new_v4().to_string(),
            )
            .field("category", conv.category.as_str())
            .field("from_uom", conv.from_uom.as_str())
            .field("to_uom", conv.to_uom.as_str())
            .field("value", conv.value);
            records::insert_record(conn, &spec)?;
            report.inserted += 1;
        }

        debug!(
            uoms = definitions.len(),
            conversions = conversions.len(),
            "UOM catalogs bootstrapped"
        );

        Ok(report)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uom_bootstrap_runs_once() {
        let db = TenantDb::open_in_memory().unwrap();

        let definitions = uom::uom_definitions().unwrap();
        let conversions = uom::uom_conversions().unwrap();
        let categories: std::collections::BTreeSet<&str> =
            conversions.iter().map(|c| c.category.as_str()).collect();

        let first = add_uom_data(&db).unwrap();
        assert_eq!(
            first.inserted as usize,
            definitions.len() + conversions.len() + categories.len()
        );
        assert_eq!(first.skipped, 0);

        // Categories are ensured silently, so only UOMs and factors count
        let second = add_uom_data(&db).unwrap();
        assert_eq!(second.inserted, 0);
        assert_eq!(
            second.skipped as usize,
            definitions.len() + conversions.len()
        );

        let (category_count, factor) = db
            .with_conn(|conn| {
                Ok((
                    records::count_records(conn, record_types::UOM_CATEGORY)?,
                    records::find_matching(
                        conn,
                        record_types::UOM_CONVERSION_FACTOR,
                        &[
                            ("from_uom", Value::from("Kilogram")),
                            ("to_uom", Value::from("Gram")),
                        ],
                    )?,
                ))
            })
            .unwrap();
        assert_eq!(category_count as usize, categories.len());
        assert!(factor.is_some());
    }

    #[test]
    fn test_secondary_defaults_pick_tree_roots() {
        let db = TenantDb::open_in_memory().unwrap();

        db.with_conn_mut(|conn| {
            records::bulk_seed(conn, master::base_records("Sweden"), &SeedOptions::default())
        })
        .unwrap();

        apply_secondary_defaults(&db).unwrap();

        let selling = db.with_conn(SellingSettings::load).unwrap();
        assert_eq!(selling.customer_group, "All Customer Groups");
        assert_eq!(selling.territory, "All Territories");
        assert_eq!(selling.sales_update_frequency, "Each Transaction");

        let buying = db.with_conn(BuyingSettings::load).unwrap();
        assert_eq!(buying.maintain_same_rate, 1);
        assert_eq!(buying.po_required, "No");

        let variants = db.with_conn(ItemVariantSettings::load).unwrap();
        assert!(variants.fields.contains(&"has_variants".to_string()));
    }

    #[test]
    fn test_base_fixtures_rerun_skips_everything() {
        let db = TenantDb::open_in_memory().unwrap();

        let first = install_base_fixtures(&db, "Germany").unwrap();
        assert!(first.inserted > 0);
        assert!(first.errors.is_empty());

        let count_after_first = db.stats().unwrap().record_count;

        let second = install_base_fixtures(&db, "Germany").unwrap();
        assert_eq!(second.inserted, 0);
        assert!(second.errors.is_empty());
        assert_eq!(db.stats().unwrap().record_count, count_after_first);
    }
}
