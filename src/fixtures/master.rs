//! Master and reference record tables
//!
//! The fixed record list every tenant starts with. Country-sensitive entries
//! (home territory, bank payment mode label) are resolved here; everything
//! else is literal.

use serde_json::json;

use crate::db::record_types as rt;
use crate::db::RecordSpec;
use crate::fixtures::industry;

pub const DEFAULT_LEAD_SOURCES: &[&str] = &[
    "Existing Customer",
    "Reference",
    "Advertisement",
    "Cold Calling",
    "Exhibition",
    "Supplier Reference",
    "Mass Mailing",
    "Customer's Vendor",
    "Campaign",
    "Walk In",
];

pub const DEFAULT_SALES_PARTNER_TYPES: &[&str] = &[
    "Channel Partner",
    "Distributor",
    "Dealer",
    "Agent",
    "Retailer",
    "Implementation Partner",
    "Reseller",
];

/// The full base record list for a tenant in the given country
pub fn base_records(country: &str) -> Vec<RecordSpec> {
    // The bank payment mode goes by a localized label in the United States
    let bank_mode = if country == "United States" { "Check" } else { "Cheque" };
    // Apostrophes never survive into territory names
    let home_territory = country.replace('\'', "");

    let mut records = vec![
        // domains
        domain("Distribution"),
        domain("Manufacturing"),
        domain("Retail"),
        domain("Services"),
        domain("Education"),
        domain("Healthcare"),
        domain("Agriculture"),
        domain("Non Profit"),

        // ensure at least an empty Address Template exists for this country
        RecordSpec::new(rt::ADDRESS_TEMPLATE, country).field("country", country),

        // item group
        item_group("All Item Groups", "", 1),
        item_group("Products", "All Item Groups", 0).field("show_in_website", 1),
        item_group("Raw Material", "All Item Groups", 0),
        item_group("Services", "All Item Groups", 0),
        item_group("Sub Assemblies", "All Item Groups", 0),
        item_group("Consumable", "All Item Groups", 0),

        // salary component
        salary_component("Income Tax", "Deduction").field("is_income_tax_component", 1),
        salary_component("Basic", "Earning"),
        salary_component("Arrear", "Earning"),
        salary_component("Leave Encashment", "Earning"),

        // expense claim type
        expense_claim_type("Calls"),
        expense_claim_type("Food"),
        expense_claim_type("Medical"),
        expense_claim_type("Others"),
        expense_claim_type("Travel"),

        // leave type
        leave_type("Casual Leave")
            .field("allow_encashment", 1)
            .field("is_carry_forward", 1)
            .field("max_continuous_days_allowed", "3")
            .field("include_holiday", 1),
        leave_type("Compensatory Off")
            .field("allow_encashment", 0)
            .field("is_carry_forward", 0)
            .field("include_holiday", 1)
            .field("is_compensatory", 1),
        leave_type("Sick Leave")
            .field("allow_encashment", 0)
            .field("is_carry_forward", 0)
            .field("include_holiday", 1),
        leave_type("Privilege Leave")
            .field("allow_encashment", 0)
            .field("is_carry_forward", 0)
            .field("include_holiday", 1),
        leave_type("Leave Without Pay")
            .field("allow_encashment", 0)
            .field("is_carry_forward", 0)
            .field("is_lwp", 1)
            .field("include_holiday", 1),

        // employment type
        employment_type("Full-time"),
        employment_type("Part-time"),
        employment_type("Probation"),
        employment_type("Contract"),
        employment_type("Commission"),
        employment_type("Piecework"),
        employment_type("Intern"),
        employment_type("Apprentice"),

        // stock entry type
        stock_entry_type("Material Issue"),
        stock_entry_type("Material Receipt"),
        stock_entry_type("Material Transfer"),
        stock_entry_type("Manufacture"),
        stock_entry_type("Repack"),
        stock_entry_type("Send to Subcontractor"),
        stock_entry_type("Material Transfer for Manufacture"),
        stock_entry_type("Material Consumption for Manufacture"),

        // designation
        designation("CEO"),
        designation("Manager"),
        designation("Analyst"),
        designation("Engineer"),
        designation("Accountant"),
        designation("Secretary"),
        designation("Associate"),
        designation("Administrative Officer"),
        designation("Business Development Manager"),
        designation("HR Manager"),
        designation("Project Manager"),
        designation("Head of Marketing and Sales"),
        designation("Software Developer"),
        designation("Designer"),
        designation("Researcher"),

        // territory: home country plus Rest Of The World under one root
        territory("All Territories", "", 1),
        territory(&home_territory, "All Territories", 0),
        territory("Rest Of The World", "All Territories", 0),

        // customer group
        customer_group("All Customer Groups", "", 1),
        customer_group("Individual", "All Customer Groups", 0),
        customer_group("Commercial", "All Customer Groups", 0),
        customer_group("Non Profit", "All Customer Groups", 0),
        customer_group("Government", "All Customer Groups", 0),

        // supplier group
        supplier_group("All Supplier Groups", "", 1),
        supplier_group("Services", "All Supplier Groups", 0),
        supplier_group("Local", "All Supplier Groups", 0),
        supplier_group("Raw Material", "All Supplier Groups", 0),
        supplier_group("Electrical", "All Supplier Groups", 0),
        supplier_group("Hardware", "All Supplier Groups", 0),
        supplier_group("Pharmaceutical", "All Supplier Groups", 0),
        supplier_group("Distributor", "All Supplier Groups", 0),

        // sales person
        RecordSpec::new(rt::SALES_PERSON, "Sales Team")
            .field("sales_person_name", "Sales Team")
            .field("is_group", 1)
            .field("parent_sales_person", ""),

        // mode of payment
        mode_of_payment(bank_mode, "Bank"),
        mode_of_payment("Cash", "Cash"),
        mode_of_payment("Credit Card", "Bank"),
        mode_of_payment("Wire Transfer", "Bank"),
        mode_of_payment("Bank Draft", "Bank"),

        // activity type
        activity_type("Planning"),
        activity_type("Research"),
        activity_type("Proposal Writing"),
        activity_type("Execution"),
        activity_type("Communication"),

        // item attributes with ordered value lists
        RecordSpec::new(rt::ITEM_ATTRIBUTE, "Size")
            .field("attribute_name", "Size")
            .field(
                "item_attribute_values",
                json!([
                    { "attribute_value": "Extra Small", "abbr": "XS" },
                    { "attribute_value": "Small", "abbr": "S" },
                    { "attribute_value": "Medium", "abbr": "M" },
                    { "attribute_value": "Large", "abbr": "L" },
                    { "attribute_value": "Extra Large", "abbr": "XL" }
                ]),
            ),
        RecordSpec::new(rt::ITEM_ATTRIBUTE, "Colour")
            .field("attribute_name", "Colour")
            .field(
                "item_attribute_values",
                json!([
                    { "attribute_value": "Red", "abbr": "RED" },
                    { "attribute_value": "Green", "abbr": "GRE" },
                    { "attribute_value": "Blue", "abbr": "BLU" },
                    { "attribute_value": "Black", "abbr": "BLA" },
                    { "attribute_value": "White", "abbr": "WHI" }
                ]),
            ),

        // issue priority
        RecordSpec::new(rt::ISSUE_PRIORITY, "Low"),
        RecordSpec::new(rt::ISSUE_PRIORITY, "Medium"),
        RecordSpec::new(rt::ISSUE_PRIORITY, "High"),

        // job applicant source
        applicant_source("Website Listing"),
        applicant_source("Walk In"),
        applicant_source("Employee Referral"),
        applicant_source("Campaign"),

        // default incoming email accounts
        email_account("sales@example.com", "Opportunity"),
        email_account("support@example.com", "Issue"),
        email_account("jobs@example.com", "Job Applicant"),

        // party types with ledger account types
        party_type("Customer", "Receivable"),
        party_type("Supplier", "Payable"),
        party_type("Employee", "Payable"),
        party_type("Member", "Receivable"),
        party_type("Shareholder", "Payable"),
        party_type("Student", "Receivable"),
        party_type("Donor", "Receivable"),

        // opportunity type
        RecordSpec::new(rt::OPPORTUNITY_TYPE, "Hub"),
        RecordSpec::new(rt::OPPORTUNITY_TYPE, "Sales"),
        RecordSpec::new(rt::OPPORTUNITY_TYPE, "Support"),
        RecordSpec::new(rt::OPPORTUNITY_TYPE, "Maintenance"),

        // project type
        project_type("Internal"),
        project_type("External"),
        project_type("Other"),

        // offer terms
        offer_term("Date of Joining"),
        offer_term("Annual Salary"),
        offer_term("Probationary Period"),
        offer_term("Employee Benefits"),
        offer_term("Working Hours"),
        offer_term("Stock Options"),
        offer_term("Department"),
        offer_term("Job Description"),
        offer_term("Responsibilities"),
        offer_term("Leaves per Year"),
        offer_term("Notice Period"),
        offer_term("Incentives"),

        // print heading
        RecordSpec::new(rt::PRINT_HEADING, "Credit Note").field("print_heading", "Credit Note"),
        RecordSpec::new(rt::PRINT_HEADING, "Debit Note").field("print_heading", "Debit Note"),

        // assessment group root
        RecordSpec::new(rt::ASSESSMENT_GROUP, "All Assessment Groups")
            .field("assessment_group_name", "All Assessment Groups")
            .field("is_group", 1)
            .field("parent_assessment_group", ""),

        // share types
        RecordSpec::new(rt::SHARE_TYPE, "Equity").field("title", "Equity"),
        RecordSpec::new(rt::SHARE_TYPE, "Preference").field("title", "Preference"),

        // market segments
        market_segment("Lower Income"),
        market_segment("Middle Income"),
        market_segment("Upper Income"),

        // sales stages
        sales_stage("Prospecting"),
        sales_stage("Qualification"),
        sales_stage("Needs Analysis"),
        sales_stage("Value Proposition"),
        sales_stage("Identifying Decision Makers"),
        sales_stage("Perception Analysis"),
        sales_stage("Proposal/Price Quote"),
        sales_stage("Negotiation/Review"),

        // warehouse type
        RecordSpec::new(rt::WAREHOUSE_TYPE, "Transit"),
    ];

    records.extend(
        industry::INDUSTRY_TYPES
            .iter()
            .map(|name| RecordSpec::new(rt::INDUSTRY_TYPE, *name).field("industry", *name)),
    );

    records.extend(
        DEFAULT_LEAD_SOURCES
            .iter()
            .map(|name| RecordSpec::new(rt::LEAD_SOURCE, *name).field("source_name", *name)),
    );

    records.extend(DEFAULT_SALES_PARTNER_TYPES.iter().map(|name| {
        RecordSpec::new(rt::SALES_PARTNER_TYPE, *name).field("sales_partner_type", *name)
    }));

    records
}

/// Department records for a company: group root first, then the leaves
pub fn department_records(company_name: &str) -> Vec<RecordSpec> {
    let mut records = vec![RecordSpec::new(rt::DEPARTMENT, "All Departments")
        .field("department_name", "All Departments")
        .field("is_group", 1)
        .field("parent_department", "")];

    let leaves = [
        "Accounts",
        "Marketing",
        "Sales",
        "Purchase",
        "Operations",
        "Production",
        "Dispatch",
        "Customer Service",
        "Human Resources",
        "Management",
        "Quality Management",
        "Research & Development",
        "Legal",
    ];

    records.extend(leaves.iter().map(|name| {
        RecordSpec::new(rt::DEPARTMENT, *name)
            .field("department_name", *name)
            .field("parent_department", "All Departments")
            .field("company", company_name)
    }));

    records
}

/// Default warehouse set for a freshly created company
pub fn default_warehouse_records(company_name: &str, abbr: &str) -> Vec<RecordSpec> {
    let root = format!("All Warehouses - {}", abbr);

    let mut records = vec![RecordSpec::new(rt::WAREHOUSE, &root)
        .field("warehouse_name", "All Warehouses")
        .field("is_group", 1)
        .field("parent_warehouse", "")
        .field("company", company_name)];

    let leaves = [
        ("Stores", None),
        ("Work In Progress", None),
        ("Goods In Transit", Some("Transit")),
        ("Finished Goods", None),
    ];

    for (name, warehouse_type) in leaves {
        let mut spec = RecordSpec::new(rt::WAREHOUSE, format!("{} - {}", name, abbr))
            .field("warehouse_name", name)
            .field("is_group", 0)
            .field("parent_warehouse", root.as_str())
            .field("company", company_name);
        if let Some(wt) = warehouse_type {
            spec = spec.field("warehouse_type", wt);
        }
        records.push(spec);
    }

    records
}

// ==== Per-type constructors ====

fn domain(name: &str) -> RecordSpec {
    RecordSpec::new(rt::DOMAIN, name).field("domain", name)
}

fn item_group(name: &str, parent: &str, is_group: i64) -> RecordSpec {
    RecordSpec::new(rt::ITEM_GROUP, name)
        .field("item_group_name", name)
        .field("is_group", is_group)
        .field("parent_item_group", parent)
}

fn salary_component(name: &str, component_type: &str) -> RecordSpec {
    RecordSpec::new(rt::SALARY_COMPONENT, name)
        .field("salary_component", name)
        .field("description", name)
        .field("type", component_type)
}

fn expense_claim_type(name: &str) -> RecordSpec {
    RecordSpec::new(rt::EXPENSE_CLAIM_TYPE, name).field("expense_type", name)
}

fn leave_type(name: &str) -> RecordSpec {
    RecordSpec::new(rt::LEAVE_TYPE, name).field("leave_type_name", name)
}

fn employment_type(name: &str) -> RecordSpec {
    RecordSpec::new(rt::EMPLOYMENT_TYPE, name).field("employee_type_name", name)
}

fn stock_entry_type(name: &str) -> RecordSpec {
    RecordSpec::new(rt::STOCK_ENTRY_TYPE, name).field("purpose", name)
}

fn designation(name: &str) -> RecordSpec {
    RecordSpec::new(rt::DESIGNATION, name).field("designation_name", name)
}

fn territory(name: &str, parent: &str, is_group: i64) -> RecordSpec {
    RecordSpec::new(rt::TERRITORY, name)
        .field("territory_name", name)
        .field("is_group", is_group)
        .field("parent_territory", parent)
}

fn customer_group(name: &str, parent: &str, is_group: i64) -> RecordSpec {
    RecordSpec::new(rt::CUSTOMER_GROUP, name)
        .field("customer_group_name", name)
        .field("is_group", is_group)
        .field("parent_customer_group", parent)
}

fn supplier_group(name: &str, parent: &str, is_group: i64) -> RecordSpec {
    RecordSpec::new(rt::SUPPLIER_GROUP, name)
        .field("supplier_group_name", name)
        .field("is_group", is_group)
        .field("parent_supplier_group", parent)
}

fn mode_of_payment(name: &str, mode_type: &str) -> RecordSpec {
    RecordSpec::new(rt::MODE_OF_PAYMENT, name)
        .field("mode_of_payment", name)
        .field("type", mode_type)
}

fn activity_type(name: &str) -> RecordSpec {
    RecordSpec::new(rt::ACTIVITY_TYPE, name).field("activity_type", name)
}

fn applicant_source(name: &str) -> RecordSpec {
    RecordSpec::new(rt::JOB_APPLICANT_SOURCE, name).field("source_name", name)
}

fn email_account(email_id: &str, append_to: &str) -> RecordSpec {
    RecordSpec::new(rt::EMAIL_ACCOUNT, email_id)
        .field("email_id", email_id)
        .field("append_to", append_to)
}

fn party_type(name: &str, account_type: &str) -> RecordSpec {
    RecordSpec::new(rt::PARTY_TYPE, name)
        .field("party_type", name)
        .field("account_type", account_type)
}

fn project_type(name: &str) -> RecordSpec {
    RecordSpec::new(rt::PROJECT_TYPE, name).field("project_type", name)
}

fn offer_term(name: &str) -> RecordSpec {
    RecordSpec::new(rt::OFFER_TERM, name).field("offer_term", name)
}

fn market_segment(name: &str) -> RecordSpec {
    RecordSpec::new(rt::MARKET_SEGMENT, name).field("market_segment", name)
}

fn sales_stage(name: &str) -> RecordSpec {
    RecordSpec::new(rt::SALES_STAGE, name).field("stage_name", name)
}
