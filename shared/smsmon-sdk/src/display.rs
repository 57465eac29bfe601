//! Display and formatting helpers for operator tooling
//!
//! All functions here are pure and total. The token-based helpers mirror the
//! dashboard's display contract: a token outside the enumerated set passes
//! through unchanged (labels) or maps to an empty class (style tokens), so a
//! newer backend never breaks rendering.

/// Human-readable label for a raw status token.
pub fn status_display_text(status: &str) -> &str {
    match status {
        "PENDING" => "Pending",
        "SENT" => "Sent",
        "DELIVERED" => "Delivered",
        "FAILED" => "Failed",
        "EXPIRED" => "Expired",
        other => other,
    }
}

/// Style class token for a raw status token.
pub fn status_color_class(status: &str) -> &'static str {
    match status {
        "PENDING" => "status-pending",
        "SENT" => "status-sent",
        "DELIVERED" => "status-delivered",
        "FAILED" => "status-failed",
        "EXPIRED" => "status-expired",
        _ => "",
    }
}

/// Human-readable label for a raw priority token.
pub fn priority_display_text(priority: &str) -> &str {
    match priority {
        "LOW" => "Low",
        "NORMAL" => "Normal",
        "HIGH" => "High",
        "URGENT" => "Urgent",
        other => other,
    }
}

/// Render a millisecond duration as `"{h}h {m}m {s}s"`, dropping leading zero
/// units. Lower units show the remainder once a higher unit prints.
pub fn format_duration(milliseconds: u64) -> String {
    let seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

/// Throughput with two decimals, e.g. `"123.40 msg/s"`.
pub fn format_throughput(throughput: f64) -> String {
    format!("{:.2} msg/s", throughput)
}

/// Latency rounded to whole milliseconds, e.g. `"43ms"`.
pub fn format_latency(latency: f64) -> String {
    format!("{:.0}ms", latency)
}

/// Success percentage, 0 when nothing ran. Not clamped otherwise.
pub fn success_rate(success_count: u64, total_count: u64) -> f64 {
    if total_count > 0 {
        (success_count as f64 / total_count as f64) * 100.0
    } else {
        0.0
    }
}

/// Quality tier for a success rate. Left-closed thresholds: >=95 excellent,
/// >=90 good, >=80 fair, below that poor.
pub fn success_rate_bucket(rate: f64) -> SuccessRateBucket {
    if rate >= 95.0 {
        SuccessRateBucket::Excellent
    } else if rate >= 90.0 {
        SuccessRateBucket::Good
    } else if rate >= 80.0 {
        SuccessRateBucket::Fair
    } else {
        SuccessRateBucket::Poor
    }
}

/// Quality tier of a test run's success rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessRateBucket {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SuccessRateBucket {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    /// Style class token for dashboard rendering.
    pub fn color_class(&self) -> &'static str {
        match self {
            Self::Excellent => "success-rate-excellent",
            Self::Good => "success-rate-good",
            Self::Fair => "success-rate-fair",
            Self::Poor => "success-rate-poor",
        }
    }
}
