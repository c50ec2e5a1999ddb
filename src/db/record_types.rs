//! Record type names used by the installer
//!
//! One constant per record type so callers never spell a type name inline.
//! Singleton types double as their record name (one row per tenant).

// Organizational scaffolding
pub const COMPANY: &str = "Company";
pub const FISCAL_YEAR: &str = "Fiscal Year";
pub const DEPARTMENT: &str = "Department";
pub const ACCOUNT: &str = "Account";
pub const WAREHOUSE: &str = "Warehouse";
pub const WAREHOUSE_TYPE: &str = "Warehouse Type";

// Master / reference data
pub const DOMAIN: &str = "Domain";
pub const ADDRESS_TEMPLATE: &str = "Address Template";
pub const ITEM_GROUP: &str = "Item Group";
pub const SALARY_COMPONENT: &str = "Salary Component";
pub const EXPENSE_CLAIM_TYPE: &str = "Expense Claim Type";
pub const LEAVE_TYPE: &str = "Leave Type";
pub const EMPLOYMENT_TYPE: &str = "Employment Type";
pub const STOCK_ENTRY_TYPE: &str = "Stock Entry Type";
pub const DESIGNATION: &str = "Designation";
pub const TERRITORY: &str = "Territory";
pub const CUSTOMER_GROUP: &str = "Customer Group";
pub const SUPPLIER_GROUP: &str = "Supplier Group";
pub const SALES_PERSON: &str = "Sales Person";
pub const MODE_OF_PAYMENT: &str = "Mode of Payment";
pub const ACTIVITY_TYPE: &str = "Activity Type";
pub const ITEM_ATTRIBUTE: &str = "Item Attribute";
pub const ISSUE_PRIORITY: &str = "Issue Priority";
pub const JOB_APPLICANT_SOURCE: &str = "Job Applicant Source";
pub const EMAIL_ACCOUNT: &str = "Email Account";
pub const PARTY_TYPE: &str = "Party Type";
pub const OPPORTUNITY_TYPE: &str = "Opportunity Type";
pub const PROJECT_TYPE: &str = "Project Type";
pub const OFFER_TERM: &str = "Offer Term";
pub const PRINT_HEADING: &str = "Print Heading";
pub const ASSESSMENT_GROUP: &str = "Assessment Group";
pub const SHARE_TYPE: &str = "Share Type";
pub const MARKET_SEGMENT: &str = "Market Segment";
pub const SALES_STAGE: &str = "Sales Stage";
pub const INDUSTRY_TYPE: &str = "Industry Type";
pub const LEAD_SOURCE: &str = "Lead Source";
pub const SALES_PARTNER_TYPE: &str = "Sales Partner Type";
pub const EMAIL_TEMPLATE: &str = "Email Template";
pub const CURRENCY: &str = "Currency";
pub const PRICE_LIST: &str = "Price List";

// Units of measure
pub const UOM: &str = "UOM";
pub const UOM_CATEGORY: &str = "UOM Category";
pub const UOM_CONVERSION_FACTOR: &str = "UOM Conversion Factor";

// Supplier scorecard defaults
pub const SUPPLIER_SCORECARD_STANDING: &str = "Supplier Scorecard Standing";
pub const SUPPLIER_SCORECARD_VARIABLE: &str = "Supplier Scorecard Variable";

// Settings singletons
pub const SELLING_SETTINGS: &str = "Selling Settings";
pub const BUYING_SETTINGS: &str = "Buying Settings";
pub const STOCK_SETTINGS: &str = "Stock Settings";
pub const GLOBAL_DEFAULTS: &str = "Global Defaults";
pub const DOMAIN_SETTINGS: &str = "Domain Settings";
pub const ITEM_VARIANT_SETTINGS: &str = "Item Variant Settings";
pub const ECOMMERCE_SETTINGS: &str = "E Commerce Settings";
pub const GLOBAL_SEARCH_SETTINGS: &str = "Global Search Settings";
