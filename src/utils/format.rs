// Helper di formattazione condivisi dalle view
use chrono::{DateTime, Local};

/// First character of every whitespace-separated word, concatenated.
/// Returns an empty string when the name has no words.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Initials for the signed-in user, with `"U"` when nothing can be derived.
pub fn user_initials(name: Option<&str>) -> String {
    match name.map(initials) {
        Some(s) if !s.is_empty() => s,
        _ => "U".to_string(),
    }
}

/// Formats integer cents as US dollars with thousands separators, e.g. `$2,450.00`.
pub fn format_usd(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}.{:02}", grouped, cents % 100)
}

/// Local wall-clock time with seconds, used under chat bubbles.
pub fn clock_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Local `HH:MM`, used in the friends list.
pub fn short_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M").to_string()
}

/// Coarse age of a transaction: hours below a day, then "Yesterday", then days.
pub fn relative_time(then: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let elapsed = now.signed_duration_since(*then);
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if hours < 24 {
        format!("{}h ago", hours)
    } else if days == 1 {
        "Yesterday".to_string()
    } else {
        format!("{} days ago", days)
    }
}
