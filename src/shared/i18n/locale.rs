// src/shared/i18n/locale.rs
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::future::{ready, Ready};
use std::str::FromStr;

/// Cookie holding the visitor's language choice.
pub const LOCALE_COOKIE: &str = "locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn direction(self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Ar => "rtl",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}

/// Request-scoped locale read from the `locale` cookie; anything missing or
/// unknown resolves to English.
impl FromRequest for Locale {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let locale = req
            .cookie(LOCALE_COOKIE)
            .and_then(|cookie| cookie.value().parse().ok())
            .unwrap_or_default();

        ready(Ok(locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;

    #[test]
    fn parses_only_supported_codes() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("ar".parse::<Locale>(), Ok(Locale::Ar));
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(UnsupportedLocale("fr".to_string()))
        );
        assert!("AR".parse::<Locale>().is_err());
    }

    #[test]
    fn direction_follows_script() {
        assert_eq!(Locale::En.direction(), "ltr");
        assert_eq!(Locale::Ar.direction(), "rtl");
    }

    #[actix_web::test]
    async fn extracts_from_cookie() {
        let req = TestRequest::default()
            .cookie(Cookie::new(LOCALE_COOKIE, "ar"))
            .to_http_request();

        let locale = Locale::extract(&req).await.unwrap();
        assert_eq!(locale, Locale::Ar);
    }

    #[actix_web::test]
    async fn falls_back_to_english() {
        let req = TestRequest::default()
            .cookie(Cookie::new(LOCALE_COOKIE, "de"))
            .to_http_request();
        assert_eq!(Locale::extract(&req).await.unwrap(), Locale::En);

        let req = TestRequest::default().to_http_request();
        assert_eq!(Locale::extract(&req).await.unwrap(), Locale::En);
    }
}
