//! Notification email templates from bundled HTML assets
//!
//! Five template records are built from four bodies: the leave body backs
//! both the approval and the status notification.

use crate::db::record_types as rt;
use crate::db::RecordSpec;

const LEAVE_TEMPLATE: &str = include_str!("../../data/templates/leave_application_email_template.html");
const INTERVIEW_REMINDER_TEMPLATE: &str =
    include_str!("../../data/templates/interview_reminder_notification_template.html");
const INTERVIEW_FEEDBACK_TEMPLATE: &str =
    include_str!("../../data/templates/interview_feedback_reminder_template.html");
const DISPATCH_TEMPLATE: &str = include_str!("../../data/templates/dispatch_notification_template.html");

/// Default address template body
pub const DEFAULT_ADDRESS_TEMPLATE: &str = include_str!("../../data/address_templates/default.html");

fn email_template(name: &str, subject: &str, response: &str) -> RecordSpec {
    RecordSpec::new(rt::EMAIL_TEMPLATE, name)
        .field("subject", subject)
        .field("response", response)
}

/// The default notification email template records
pub fn email_template_records() -> Vec<RecordSpec> {
    vec![
        email_template(
            "Leave Approval Notification",
            "Leave Approval Notification",
            LEAVE_TEMPLATE,
        ),
        email_template(
            "Leave Status Notification",
            "Leave Status Notification",
            LEAVE_TEMPLATE,
        ),
        email_template("Interview Reminder", "Interview Reminder", INTERVIEW_REMINDER_TEMPLATE),
        email_template(
            "Interview Feedback Reminder",
            "Interview Feedback Reminder",
            INTERVIEW_FEEDBACK_TEMPLATE,
        ),
        email_template(
            "Dispatch Notification",
            "Your order is out for delivery!",
            DISPATCH_TEMPLATE,
        ),
    ]
}
