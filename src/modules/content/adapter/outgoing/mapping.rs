use crate::modules::content::adapter::outgoing::sea_orm_entity::portfolio_content;
use crate::modules::content::application::domain::entities::{
    ContentRecord, ContentType, UnknownContentType,
};

pub(super) fn model_to_record(
    model: portfolio_content::Model,
) -> Result<ContentRecord, UnknownContentType> {
    Ok(ContentRecord {
        id: model.id,
        key: model.key,
        content_type: model.content_type.parse::<ContentType>()?,
        category: model.category,
        title_en: model.title_en,
        title_ar: model.title_ar,
        subtitle_en: model.subtitle_en,
        subtitle_ar: model.subtitle_ar,
        description_en: model.description_en,
        description_ar: model.description_ar,
        content_en: model.content_en,
        content_ar: model.content_ar,
        metadata_en: model.metadata_en,
        metadata_ar: model.metadata_ar,
        is_active: model.is_active,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

#[cfg(test)]
pub(crate) fn sample_model(id: i32, content_type: &str) -> portfolio_content::Model {
    let now = chrono::Utc::now().fixed_offset();

    portfolio_content::Model {
        id,
        key: format!("{content_type}-{id}"),
        content_type: content_type.to_string(),
        category: None,
        title_en: Some("Title".to_string()),
        title_ar: None,
        subtitle_en: None,
        subtitle_ar: None,
        description_en: None,
        description_ar: None,
        content_en: Some("Body".to_string()),
        content_ar: None,
        metadata_en: None,
        metadata_ar: None,
        is_active: true,
        sort_order: 0,
        created_at: now,
        updated_at: now,
    }
}
