//! Bundled default data
//!
//! The literal record tables and static assets the installer seeds from:
//! master/reference records, the industry catalog, UOM catalogs, email
//! template bodies and the standard chart of accounts. Everything here is
//! data construction only; writing goes through the setup phases.

pub mod master;
pub mod industry;
pub mod uom;
pub mod templates;
pub mod scorecard;
pub mod coa;
