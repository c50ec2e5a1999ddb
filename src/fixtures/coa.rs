//! Standard chart of accounts
//!
//! The chart ships as a versioned JSON asset in nested form: each object
//! mixes attribute keys (account_type, root_type, is_group, ...) with child
//! account names. `chart_records` flattens it into account records for one
//! company, child names suffixed with the company abbreviation.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::db::record_types as rt;
use crate::db::RecordSpec;
use crate::error::SetupError;

const STANDARD_CHART: &str = include_str!("../../data/charts/standard_chart_of_accounts.json");

/// Template name the company record references
pub const STANDARD_TEMPLATE: &str = "Standard";

/// One node of the chart template
#[derive(Debug, Clone, Default)]
pub struct ChartNode {
    pub account_type: Option<String>,
    pub root_type: Option<String>,
    pub account_number: Option<String>,
    pub tax_rate: Option<f64>,
    pub is_group: bool,
    pub children: BTreeMap<String, ChartNode>,
}

impl ChartNode {
    fn from_value(value: &Value) -> Result<Self, String> {
        let map = value
            .as_object()
            .ok_or_else(|| format!("expected account node object, got {}", value))?;

        let mut node = ChartNode::default();
        for (key, val) in map {
            match key.as_str() {
                "account_type" => node.account_type = val.as_str().map(String::from),
                "root_type" => node.root_type = val.as_str().map(String::from),
                "account_number" => {
                    node.account_number = val
                        .as_str()
                        .map(String::from)
                        .or_else(|| val.as_i64().map(|n| n.to_string()))
                }
                "tax_rate" => node.tax_rate = val.as_f64(),
                "is_group" => {
                    node.is_group = match val {
                        Value::Bool(b) => *b,
                        Value::Number(n) => n.as_i64().unwrap_or(0) != 0,
                        _ => false,
                    }
                }
                child => {
                    node.children
                        .insert(child.to_string(), ChartNode::from_value(val)?);
                }
            }
        }
        Ok(node)
    }

    /// Group accounts: flagged explicitly or carrying children
    pub fn is_group_account(&self) -> bool {
        self.is_group || !self.children.is_empty()
    }
}

/// Parse the bundled standard chart into its root account nodes
pub fn load_standard_chart() -> Result<BTreeMap<String, ChartNode>, SetupError> {
    let value: Value = serde_json::from_str(STANDARD_CHART)?;
    let roots = value
        .as_object()
        .ok_or_else(|| SetupError::Parse("chart template is not an object".to_string()))?;

    roots
        .iter()
        .map(|(name, node)| {
            ChartNode::from_value(node)
                .map(|n| (name.clone(), n))
                .map_err(|e| SetupError::Parse(format!("chart account {}: {}", name, e)))
        })
        .collect()
}

/// Flatten the standard chart into account records for one company
///
/// Root accounts carry their own root_type and an empty parent; descendants
/// inherit the root_type down the branch.
pub fn chart_records(company_name: &str, abbr: &str) -> Result<Vec<RecordSpec>, SetupError> {
    let chart = load_standard_chart()?;

    let mut records = vec![];
    for (name, node) in &chart {
        let root_type = node.root_type.as_deref().unwrap_or_default();
        flatten(name, node, "", root_type, company_name, abbr, &mut records);
    }
    Ok(records)
}

fn flatten(
    account_name: &str,
    node: &ChartNode,
    parent: &str,
    root_type: &str,
    company_name: &str,
    abbr: &str,
    out: &mut Vec<RecordSpec>,
) {
    let full_name = format!("{} - {}", account_name, abbr);
    let report_type = match root_type {
        "Asset" | "Liability" | "Equity" => "Balance Sheet",
        _ => "Profit and Loss",
    };

    let mut spec = RecordSpec::new(rt::ACCOUNT, &full_name)
        .field("account_name", account_name)
        .field("company", company_name)
        .field("parent_account", parent)
        .field("is_group", node.is_group_account() as i64)
        .field("root_type", root_type)
        .field("report_type", report_type);

    if let Some(account_type) = &node.account_type {
        spec = spec.field("account_type", account_type.as_str());
    }
    if let Some(account_number) = &node.account_number {
        spec = spec.field("account_number", account_number.as_str());
    }
    if let Some(tax_rate) = node.tax_rate {
        spec = spec.field("tax_rate", tax_rate);
    }

    out.push(spec);

    for (child_name, child) in &node.children {
        flatten(child_name, child, &full_name, root_type, company_name, abbr, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_chart_parses() {
        let chart = load_standard_chart().unwrap();
        assert_eq!(chart.len(), 5);

        let assets = &chart["Application of Funds (Assets)"];
        assert_eq!(assets.root_type.as_deref(), Some("Asset"));

        let bank = &assets.children["Current Assets"].children["Bank Accounts"];
        assert_eq!(bank.account_type.as_deref(), Some("Bank"));
        assert!(bank.is_group_account());

        // A node can be a group while carrying its own account_type
        let cash_in_hand = &assets.children["Current Assets"].children["Cash In Hand"];
        assert_eq!(cash_in_hand.account_type.as_deref(), Some("Cash"));
        assert!(cash_in_hand.is_group_account());
        assert!(cash_in_hand.children.contains_key("Cash"));
    }

    #[test]
    fn test_chart_records_for_company() {
        let records = chart_records("Test Co", "TC").unwrap();
        assert_eq!(records.len(), 79);

        let debtors = records.iter().find(|r| r.name == "Debtors - TC").unwrap();
        assert_eq!(debtors.data["account_type"], "Receivable");
        assert_eq!(debtors.data["root_type"], "Asset");
        assert_eq!(debtors.data["parent_account"], "Accounts Receivable - TC");
        assert_eq!(debtors.data["report_type"], "Balance Sheet");
        assert_eq!(debtors.data["is_group"], 0);

        let expenses = records.iter().find(|r| r.name == "Expenses - TC").unwrap();
        assert_eq!(expenses.data["parent_account"], "");
        assert_eq!(expenses.data["report_type"], "Profit and Loss");
        assert_eq!(expenses.data["is_group"], 1);

        // Every non-root parent reference resolves within the chart
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        for record in &records {
            let parent = record.data["parent_account"].as_str().unwrap();
            if !parent.is_empty() {
                assert!(names.contains(&parent), "unresolved parent {}", parent);
            }
        }
    }
}
