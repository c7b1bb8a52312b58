use crate::modules::service::adapter::outgoing::sea_orm_entity::services;
use crate::modules::service::application::domain::ServiceRecord;
use crate::shared::json::{list_from_json, optional_list_from_json};

pub(super) fn model_to_record(model: services::Model) -> ServiceRecord {
    ServiceRecord {
        id: model.id,
        slug: model.slug,
        icon: model.icon,
        title_en: model.title_en,
        title_ar: model.title_ar,
        description_en: model.description_en,
        description_ar: model.description_ar,
        technologies_en: list_from_json(Some(&model.technologies_en)),
        technologies_ar: optional_list_from_json(model.technologies_ar.as_ref()),
        features_en: list_from_json(Some(&model.features_en)),
        features_ar: optional_list_from_json(model.features_ar.as_ref()),
        image_url: model.image_url,
        is_active: model.is_active,
        sort_order: model.sort_order,
        is_deleted: model.is_deleted,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

#[cfg(test)]
pub(crate) fn sample_model(id: i32) -> services::Model {
    let now = chrono::Utc::now().fixed_offset();

    services::Model {
        id,
        slug: format!("service-{id}"),
        icon: "code".to_string(),
        title_en: format!("Service {id}"),
        title_ar: None,
        description_en: "A service description".to_string(),
        description_ar: None,
        technologies_en: serde_json::json!(["Rust", "Postgres"]),
        technologies_ar: None,
        features_en: serde_json::json!([]),
        features_ar: None,
        image_url: None,
        is_active: true,
        sort_order: 0,
        is_deleted: false,
        created_at: now,
        updated_at: now,
    }
}
