//! Address template setup

use rusqlite::Connection;
use serde_json::Value;
use tracing::debug;

use crate::db::{record_types, records, RecordSpec};
use crate::error::SetupError;
use crate::fixtures::templates;

/// Ensure the country has a default address template with the bundled body
///
/// The fixture list seeds an empty template record for the country; this
/// fills its body and marks it default, creating the record when a caller
/// runs it standalone.
pub fn set_up_address_templates(conn: &Connection, country: &str) -> Result<(), SetupError> {
    if records::record_exists(conn, record_types::ADDRESS_TEMPLATE, country)? {
        records::update_fields(
            conn,
            record_types::ADDRESS_TEMPLATE,
            country,
            &[
                ("template", Value::from(templates::DEFAULT_ADDRESS_TEMPLATE)),
                ("is_default", Value::from(1)),
            ],
        )?;
    } else {
        let spec = RecordSpec::new(record_types::ADDRESS_TEMPLATE, country)
            .field("country", country)
            .field("template", templates::DEFAULT_ADDRESS_TEMPLATE)
            .field("is_default", 1);
        records::insert_record(conn, &spec)?;
    }

    debug!(country = %country, "Address template set up");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::records::get_record;
    use crate::db::TenantDb;

    #[test]
    fn test_fills_existing_template_record() {
        let db = TenantDb::open_in_memory().unwrap();

        db.with_conn(|conn| {
            let empty = RecordSpec::new(record_types::ADDRESS_TEMPLATE, "France")
                .field("country", "France");
            records::insert_record(conn, &empty)?;
            set_up_address_templates(conn, "France")
        })
        .unwrap();

        let row = db
            .with_conn(|conn| get_record(conn, record_types::ADDRESS_TEMPLATE, "France"))
            .unwrap()
            .unwrap();
        assert!(row.get_flag("is_default"));
        assert!(row.get_str("template").unwrap().contains("address_line1"));
    }

    #[test]
    fn test_creates_template_record_standalone() {
        let db = TenantDb::open_in_memory().unwrap();

        db.with_conn(|conn| set_up_address_templates(conn, "Japan")).unwrap();

        let row = db
            .with_conn(|conn| get_record(conn, record_types::ADDRESS_TEMPLATE, "Japan"))
            .unwrap()
            .unwrap();
        assert_eq!(row.get_str("country"), Some("Japan"));
        assert!(row.get_flag("is_default"));
    }
}
