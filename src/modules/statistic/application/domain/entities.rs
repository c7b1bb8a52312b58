use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::i18n::{translatable, Locale, Localized};
use crate::shared::text::format_thousands;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatisticType {
    Number,
    Percentage,
    Counter,
}

impl StatisticType {
    /// Unrecognised values read as `number`, the column default.
    pub fn from_db(value: &str) -> Self {
        match value {
            "percentage" => Self::Percentage,
            "counter" => Self::Counter,
            _ => Self::Number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticRecord {
    pub id: i32,
    pub key: String,
    pub stat_type: StatisticType,
    pub value: i64,
    pub label_en: String,
    pub label_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

translatable!(StatisticRecord {
    "label" => (label_en, label_ar),
    "description" => (description_en, description_ar),
});

impl StatisticRecord {
    pub fn display_value(&self) -> String {
        let suffix = self.suffix.as_deref().unwrap_or_default();

        match self.stat_type {
            StatisticType::Percentage => format!("{}{}", self.value, suffix),
            StatisticType::Number => format!("{}{}", format_thousands(self.value), suffix),
            StatisticType::Counter => format!(
                "{}{}{}",
                self.prefix.as_deref().unwrap_or_default(),
                format_thousands(self.value),
                suffix
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticView {
    pub key: String,
    #[serde(rename = "type")]
    pub stat_type: StatisticType,
    pub value: i64,
    pub display_value: String,
    pub label: String,
    pub description: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl StatisticView {
    pub fn localize(record: &StatisticRecord, locale: Locale) -> Self {
        Self {
            key: record.key.clone(),
            stat_type: record.stat_type,
            value: record.value,
            display_value: record.display_value(),
            label: record.text("label", locale),
            description: record.text("description", locale),
            icon: record.icon.clone(),
            color: record.color.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn statistic(key: &str, stat_type: StatisticType, value: i64) -> StatisticRecord {
        StatisticRecord {
            id: 1,
            key: key.to_string(),
            stat_type,
            value,
            label_en: key.replace('_', " "),
            label_ar: None,
            description_en: None,
            description_ar: None,
            prefix: None,
            suffix: None,
            icon: None,
            color: None,
            is_active: true,
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn percentage_is_not_grouped() {
        let mut record = statistic("satisfaction", StatisticType::Percentage, 1000);
        record.suffix = Some("%".to_string());
        record.prefix = Some("~".to_string());

        assert_eq!(record.display_value(), "1000%");
    }

    #[test]
    fn number_groups_thousands() {
        let mut record = statistic("lines_of_code", StatisticType::Number, 1250000);
        record.suffix = Some("+".to_string());

        assert_eq!(record.display_value(), "1,250,000+");
    }

    #[test]
    fn counter_uses_prefix() {
        let mut record = statistic("revenue", StatisticType::Counter, 4500);
        record.prefix = Some("$".to_string());

        assert_eq!(record.display_value(), "$4,500");
    }

    #[test]
    fn unknown_type_reads_as_number() {
        assert_eq!(StatisticType::from_db("ratio"), StatisticType::Number);
        assert_eq!(StatisticType::from_db("counter"), StatisticType::Counter);
    }
}
