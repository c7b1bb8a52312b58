use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::i18n::{translatable, Locale, Localized};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillRecord {
    pub id: i32,
    pub slug: String,
    pub category: String,
    pub proficiency_level: i32,
    pub years_experience: i32,
    pub name_en: String,
    pub name_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub keywords_en: Vec<String>,
    pub keywords_ar: Option<Vec<String>>,
    pub certifications_en: Vec<String>,
    pub certifications_ar: Option<Vec<String>>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

translatable!(SkillRecord {
    "name" => (name_en, name_ar),
    "description" => (description_en, description_ar),
    "keywords" => (keywords_en, keywords_ar),
    "certifications" => (certifications_en, certifications_ar),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLabel {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
    Novice,
}

impl ProficiencyLabel {
    pub fn from_level(level: i32) -> Self {
        match level {
            90.. => Self::Expert,
            70..=89 => Self::Advanced,
            50..=69 => Self::Intermediate,
            30..=49 => Self::Beginner,
            _ => Self::Novice,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Senior,
    MidLevel,
    Junior,
    EntryLevel,
}

impl ExperienceLevel {
    pub fn from_years(years: i32) -> Self {
        match years {
            5.. => Self::Senior,
            3..=4 => Self::MidLevel,
            1..=2 => Self::Junior,
            _ => Self::EntryLevel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillView {
    pub id: i32,
    pub slug: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub certifications: Vec<String>,
    pub proficiency_level: i32,
    pub proficiency_label: ProficiencyLabel,
    pub years_experience: i32,
    pub experience_level: ExperienceLevel,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl SkillView {
    pub fn localize(record: &SkillRecord, locale: Locale) -> Self {
        Self {
            id: record.id,
            slug: record.slug.clone(),
            category: record.category.clone(),
            name: record.text("name", locale),
            description: record.text("description", locale),
            keywords: record.list("keywords", locale),
            certifications: record.list("certifications", locale),
            proficiency_level: record.proficiency_level,
            proficiency_label: ProficiencyLabel::from_level(record.proficiency_level),
            years_experience: record.years_experience,
            experience_level: ExperienceLevel::from_years(record.years_experience),
            icon: record.icon.clone(),
            color: record.color.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn skill(id: i32, category: &str) -> SkillRecord {
        SkillRecord {
            id,
            slug: format!("skill-{id}"),
            category: category.to_string(),
            proficiency_level: 80,
            years_experience: 3,
            name_en: format!("Skill {id}"),
            name_ar: None,
            description_en: None,
            description_ar: None,
            keywords_en: vec![],
            keywords_ar: None,
            certifications_en: vec![],
            certifications_ar: None,
            icon: None,
            color: None,
            is_active: true,
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn proficiency_thresholds() {
        assert_eq!(ProficiencyLabel::from_level(95), ProficiencyLabel::Expert);
        assert_eq!(ProficiencyLabel::from_level(90), ProficiencyLabel::Expert);
        assert_eq!(ProficiencyLabel::from_level(89), ProficiencyLabel::Advanced);
        assert_eq!(ProficiencyLabel::from_level(50), ProficiencyLabel::Intermediate);
        assert_eq!(ProficiencyLabel::from_level(30), ProficiencyLabel::Beginner);
        assert_eq!(ProficiencyLabel::from_level(29), ProficiencyLabel::Novice);
    }

    #[test]
    fn experience_thresholds() {
        assert_eq!(ExperienceLevel::from_years(7), ExperienceLevel::Senior);
        assert_eq!(ExperienceLevel::from_years(3), ExperienceLevel::MidLevel);
        assert_eq!(ExperienceLevel::from_years(1), ExperienceLevel::Junior);
        assert_eq!(ExperienceLevel::from_years(0), ExperienceLevel::EntryLevel);
    }

    #[test]
    fn view_serializes_labels_in_snake_case() {
        let mut record = skill(1, "backend");
        record.years_experience = 4;
        record.name_ar = Some("رست".to_string());

        let view = serde_json::to_value(SkillView::localize(&record, Locale::Ar)).unwrap();

        assert_eq!(view["name"], "رست");
        assert_eq!(view["proficiency_label"], "advanced");
        assert_eq!(view["experience_level"], "mid_level");
        assert_eq!(view["description"], "");
    }
}
