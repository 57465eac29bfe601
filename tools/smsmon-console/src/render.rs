//! Plain-text rendering for tables and the status chart.

use smsmon_sdk::display;
use smsmon_sdk::{OperatorStatistics, SmsMessage, SmsStatistics};

/// Horizontal bar chart. The largest row scales to `width` characters; rows
/// with zero stay empty rather than rounding up.
pub fn bar_chart(rows: &[(&str, u64)], width: usize) -> String {
    let max = rows.iter().map(|(_, value)| *value).max().unwrap_or(0);
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, value) in rows {
        let bar_len = if max == 0 {
            0
        } else {
            (*value as usize * width) / max as usize
        };
        let bar = "#".repeat(bar_len);
        out.push_str(&format!("{label:<label_width$}  {bar:<width$}  {value}\n"));
    }
    out
}

pub fn message_table(messages: &[SmsMessage]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:<38} {:<16} {:<16} {:<10} {:<8} {}\n",
        "ID", "MESSAGE ID", "SENDER", "RECIPIENT", "STATUS", "PRIORITY", "CREATED"
    ));

    for message in messages {
        out.push_str(&format!(
            "{:<8} {:<38} {:<16} {:<16} {:<10} {:<8} {}\n",
            message
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            message.message_id,
            message.sender_number,
            message.recipient_number,
            display::status_display_text(message.status.as_str()),
            display::priority_display_text(message.priority.as_str()),
            message
                .created_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "-".to_string()),
        ));
    }
    out
}

pub fn delivery_stats_table(rows: &[SmsStatistics]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<12} {}\n", "STATUS", "COUNT"));
    for row in rows {
        out.push_str(&format!(
            "{:<12} {}\n",
            display::status_display_text(row.status.as_str()),
            row.count
        ));
    }
    out
}

pub fn operator_stats_table(rows: &[OperatorStatistics]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<10} {:<12} {}\n", "OPERATOR", "STATUS", "COUNT"));
    for row in rows {
        out.push_str(&format!(
            "{:<10} {:<12} {}\n",
            row.operator_id,
            display::status_display_text(row.status.as_str()),
            row.count
        ));
    }
    out
}
