// src/shared/text.rs
//! Small string helpers used when building records and views.

/// Lowercase, ASCII-transliterated, hyphen separated.
pub fn slugify(value: &str) -> String {
    slug::slugify(value.trim())
}

/// Cuts `value` to `limit` characters and appends `...` when anything was cut.
pub fn truncate(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }

    let cut: String = value.chars().take(limit).collect();
    format!("{}...", cut.trim_end())
}

/// `1234567` becomes `1,234,567`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
