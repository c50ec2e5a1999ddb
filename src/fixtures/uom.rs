//! Bundled UOM catalogs
//!
//! Two JSON assets: the unit definitions and the one-directional conversion
//! factors. Conversion entries also name the category that groups them.

use serde::Deserialize;

use crate::error::SetupError;

const UOM_DATA: &str = include_str!("../../data/uom_data.json");
const UOM_CONVERSION_DATA: &str = include_str!("../../data/uom_conversion_data.json");

/// One unit definition from the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct UomDef {
    pub uom_name: String,
    #[serde(default)]
    pub must_be_whole_number: i64,
}

/// One conversion factor entry: value units of `to_uom` per `from_uom`
#[derive(Debug, Clone, Deserialize)]
pub struct UomConversion {
    pub category: String,
    pub from_uom: String,
    pub to_uom: String,
    pub value: f64,
}

pub fn uom_definitions() -> Result<Vec<UomDef>, SetupError> {
    serde_json::from_str(UOM_DATA)
        .map_err(|e| SetupError::Parse(format!("uom_data.json: {}", e)))
}

pub fn uom_conversions() -> Result<Vec<UomConversion>, SetupError> {
    serde_json::from_str(UOM_CONVERSION_DATA)
        .map_err(|e| SetupError::Parse(format!("uom_conversion_data.json: {}", e)))
}
