use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::project::application::domain::{ProjectRecord, UnknownCategory};
use crate::shared::json::{list_from_json, optional_list_from_json};

pub(super) fn model_to_record(model: projects::Model) -> Result<ProjectRecord, UnknownCategory> {
    Ok(ProjectRecord {
        id: model.id,
        slug: model.slug,
        category: model.category.parse()?,
        is_featured: model.is_featured,
        is_active: model.is_active,
        sort_order: model.sort_order,
        completed_at: model.completed_at,
        title_en: model.title_en,
        title_ar: model.title_ar,
        description_en: model.description_en,
        description_ar: model.description_ar,
        content_en: model.content_en,
        content_ar: model.content_ar,
        technologies_en: list_from_json(Some(&model.technologies_en)),
        technologies_ar: optional_list_from_json(model.technologies_ar.as_ref()),
        challenges_en: optional_list_from_json(model.challenges_en.as_ref()),
        challenges_ar: optional_list_from_json(model.challenges_ar.as_ref()),
        solutions_en: optional_list_from_json(model.solutions_en.as_ref()),
        solutions_ar: optional_list_from_json(model.solutions_ar.as_ref()),
        github_url: model.github_url,
        live_url: model.live_url,
        demo_url: model.demo_url,
        images: list_from_json(Some(&model.images)),
        thumbnail_url: model.thumbnail_url,
        tags: list_from_json(Some(&model.tags)),
        metadata: model.metadata,
        is_deleted: model.is_deleted,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

#[cfg(test)]
pub(crate) fn sample_model(id: i32) -> projects::Model {
    let now = chrono::Utc::now().fixed_offset();

    projects::Model {
        id,
        slug: format!("project-{id}"),
        category: "web".to_string(),
        is_featured: false,
        is_active: true,
        sort_order: 0,
        completed_at: None,
        title_en: format!("Project {id}"),
        title_ar: None,
        description_en: "A project description".to_string(),
        description_ar: None,
        content_en: None,
        content_ar: None,
        technologies_en: serde_json::json!(["Rust", "Actix"]),
        technologies_ar: None,
        challenges_en: None,
        challenges_ar: None,
        solutions_en: None,
        solutions_ar: None,
        github_url: None,
        live_url: None,
        demo_url: None,
        images: serde_json::json!([]),
        thumbnail_url: None,
        tags: serde_json::json!([]),
        metadata: serde_json::json!({}),
        is_deleted: false,
        created_at: now,
        updated_at: now,
    }
}
