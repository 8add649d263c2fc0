use ammonia::Builder;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use htmlentity::entity::{decode, ICodedDataTrait};

pub fn parse_pub_date(date_str: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(date_str)
        .or_else(|_| {
            NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S")
                .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
        })
        .unwrap_or_else(|_| {
            // Fallback for parsing error
            DateTime::<Utc>::from_timestamp(0, 0).unwrap().fixed_offset()
        })
}

pub fn format_pub_date(date_str: &str) -> String {
    parse_pub_date(date_str).format("%b %-d, %Y").to_string()
}

// Seconds to M:SS, or H:MM:SS from an hour up.
pub fn format_duration(seconds: i64) -> String {
    if seconds <= 0 {
        return "0:00".to_string();
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

// The API hands descriptions over as HTML. Card previews want plain text:
// strip every tag (script/style bodies are dropped outright), decode the
// entities ammonia leaves behind, and collapse whitespace runs.
pub fn strip_html_to_text(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let stripped = Builder::empty().clean(html).to_string();
    let text = match decode(stripped.as_bytes()).to_string() {
        Ok(decoded) => decoded,
        Err(_) => stripped,
    };

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn truncate_description(description: String, max_length: usize) -> (String, bool) {
    let is_truncated = description.chars().count() > max_length;

    let truncated = if is_truncated {
        description.chars().take(max_length).collect::<String>() + "..."
    } else {
        description
    };

    (truncated, is_truncated)
}
