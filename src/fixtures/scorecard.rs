//! Supplier scorecard default records
//!
//! Standings grade suppliers into bands with escalating consequences
//! (warnings first, then blocked RFQs and purchase orders); variables are
//! the evaluation inputs scoring formulas can reference.

use crate::db::record_types as rt;
use crate::db::RecordSpec;

fn standing(
    name: &str,
    min_grade: f64,
    max_grade: f64,
    color: &str,
    warn_rfqs: i64,
    warn_pos: i64,
    prevent_rfqs: i64,
    prevent_pos: i64,
) -> RecordSpec {
    RecordSpec::new(rt::SUPPLIER_SCORECARD_STANDING, name)
        .field("standing_name", name)
        .field("standing_color", color)
        .field("min_grade", min_grade)
        .field("max_grade", max_grade)
        .field("warn_rfqs", warn_rfqs)
        .field("warn_pos", warn_pos)
        .field("prevent_rfqs", prevent_rfqs)
        .field("prevent_pos", prevent_pos)
        .field("notify_supplier", 0)
        .field("notify_employee", 0)
}

fn variable(param_name: &str, label: &str, path: &str) -> RecordSpec {
    RecordSpec::new(rt::SUPPLIER_SCORECARD_VARIABLE, label)
        .field("param_name", param_name)
        .field("variable_label", label)
        .field("path", path)
}

/// Default standings and evaluation variables
pub fn default_records() -> Vec<RecordSpec> {
    let mut records = vec![
        standing("Very Poor", 0.0, 30.0, "Red", 0, 0, 1, 1),
        standing("Poor", 30.0, 50.0, "Red", 0, 1, 1, 0),
        standing("Average", 50.0, 80.0, "Yellow", 1, 0, 0, 0),
        standing("Excellent", 80.0, 100.0, "Green", 0, 0, 0, 0),
    ];

    records.extend(vec![
        variable("total_accepted_items", "Total Accepted Items", "get_total_accepted_items"),
        variable("total_accepted_amount", "Total Accepted Amount", "get_total_accepted_amount"),
        variable("total_rejected_items", "Total Rejected Items", "get_total_rejected_items"),
        variable("total_rejected_amount", "Total Rejected Amount", "get_total_rejected_amount"),
        variable("total_received_items", "Total Received Items", "get_total_received_items"),
        variable("total_received_amount", "Total Received Amount", "get_total_received_amount"),
        variable("rfq_response_days", "RFQ Response Days", "get_rfq_response_days"),
        variable("sq_total_items", "SQ Total Items", "get_sq_total_items"),
        variable("sq_total_number", "SQ Total Number", "get_sq_total_number"),
        variable("rfq_total_number", "RFQ Total Number", "get_rfq_total_number"),
        variable("rfq_total_items", "RFQ Total Items", "get_rfq_total_items"),
        variable("tot_item_days", "Total Item Days", "get_item_workdays"),
        variable("on_time_shipment_num", "# of On Time Shipments", "get_on_time_shipments"),
        variable("cost_of_on_time_shipments", "Cost of On Time Shipments", "get_cost_of_on_time_shipments"),
        variable("cost_of_delayed_shipments", "Cost of Delayed Shipments", "get_cost_of_delayed_shipments"),
        variable("tot_cost_shipments", "Total Cost of Shipments", "get_total_cost_of_shipments"),
        variable("tot_days_late", "Total Days Late", "get_total_days_late"),
        variable("total_shipments", "Total Shipments", "get_total_shipments"),
        variable("total_ordered", "Total Ordered", "get_ordered_qty"),
        variable("total_invoiced", "Total Invoiced", "get_invoiced_qty"),
    ]);

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standings_cover_the_grade_range() {
        let records = default_records();
        let mut standings: Vec<_> = records
            .iter()
            .filter(|r| r.record_type == rt::SUPPLIER_SCORECARD_STANDING)
            .collect();
        standings.sort_by(|a, b| {
            a.data["min_grade"]
                .as_f64()
                .partial_cmp(&b.data["min_grade"].as_f64())
                .unwrap()
        });

        assert_eq!(standings.first().unwrap().data["min_grade"], 0.0);
        assert_eq!(standings.last().unwrap().data["max_grade"], 100.0);
        for pair in standings.windows(2) {
            assert_eq!(pair[0].data["max_grade"], pair[1].data["min_grade"]);
        }
    }
}
