// src/shared/page.rs
//! JSON page payloads consumed by the client-side renderer.

use actix_web::{http::header, HttpResponse};
use serde::Serialize;
use serde_json::Value;

use crate::shared::i18n::{translations, Locale};

#[derive(Debug, Serialize)]
pub struct PageProps<T: Serialize> {
    pub data: T,
    pub translations: &'static Value,
}

#[derive(Debug, Serialize)]
pub struct PageView<T: Serialize> {
    pub component: &'static str,
    pub props: PageProps<T>,
    pub url: String,
    pub locale: Locale,
    pub direction: &'static str,
}

impl<T: Serialize> PageView<T> {
    pub fn new(component: &'static str, data: T, locale: Locale, url: impl Into<String>) -> Self {
        Self {
            component,
            props: PageProps {
                data,
                translations: translations(locale),
            },
            url: url.into(),
            locale,
            direction: locale.direction(),
        }
    }

    /// The body depends on the locale cookie, so caches must key on it.
    pub fn render(self) -> HttpResponse {
        HttpResponse::Ok()
            .insert_header((header::VARY, "Cookie"))
            .json(self)
    }
}
