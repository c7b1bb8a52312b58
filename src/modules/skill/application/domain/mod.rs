pub mod entities;

pub use entities::{ExperienceLevel, ProficiencyLabel, SkillRecord, SkillView};
