use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::http::header;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use tracing::debug;
use url::Url;

use crate::shared::i18n::{Locale, LOCALE_COOKIE};

/// Where to send the visitor back to: the `Referer` when it points at this
/// site, `/` otherwise. Relative referers are resolved against this host,
/// so `/\other.host` counts as `//other.host`.
fn back_location(req: &HttpRequest) -> String {
    let Some(referer) = req
        .headers()
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
    else {
        return "/".to_string();
    };

    let host = req.connection_info().host().to_string();
    let Ok(url) = Url::parse(&format!("http://{host}/")).and_then(|base| base.join(referer))
    else {
        return "/".to_string();
    };

    let origin = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        _ => return "/".to_string(),
    };

    if origin != host {
        return "/".to_string();
    }

    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

#[get("/language/{locale}")]
pub async fn switch_language_handler(req: HttpRequest, path: web::Path<String>) -> impl Responder {
    let mut response = HttpResponse::Found();
    response.insert_header((header::LOCATION, back_location(&req)));

    match path.parse::<Locale>() {
        Ok(locale) => {
            response.cookie(
                Cookie::build(LOCALE_COOKIE, locale.code())
                    .path("/")
                    .max_age(Duration::days(365))
                    .same_site(SameSite::Lax)
                    .finish(),
            );
        }
        Err(e) => debug!("Ignoring language switch: {}", e),
    }

    response.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    async fn switch(uri: &str, referer: Option<&str>) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(App::new().service(switch_language_handler)).await;

        let mut req = test::TestRequest::get().uri(uri);
        if let Some(referer) = referer {
            req = req.insert_header((header::REFERER, referer));
        }
        test::call_service(&app, req.to_request()).await
    }

    fn locale_cookie(resp: &actix_web::dev::ServiceResponse) -> Option<String> {
        resp.response()
            .cookies()
            .find(|c| c.name() == LOCALE_COOKIE)
            .map(|c| c.value().to_string())
    }

    #[actix_web::test]
    async fn supported_locale_sets_cookie_and_redirects_back() {
        let resp = switch("/language/ar", Some("/projects?category=ai")).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/projects?category=ai"
        );
        assert_eq!(locale_cookie(&resp).as_deref(), Some("ar"));
    }

    #[actix_web::test]
    async fn unsupported_locale_only_redirects() {
        let resp = switch("/language/fr", None).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
        assert_eq!(locale_cookie(&resp), None);
    }

    #[actix_web::test]
    async fn same_host_referer_keeps_path() {
        let resp = switch("/language/en", Some("http://localhost:8080/about")).await;

        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/about");
        assert_eq!(locale_cookie(&resp).as_deref(), Some("en"));
    }

    #[actix_web::test]
    async fn backslash_referer_does_not_leave_the_site() {
        for referer in ["/\\evil.example.com", "/\\evil.example.com/phish", "//evil.example.com"] {
            let resp = switch("/language/ar", Some(referer)).await;

            assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/", "{referer}");
        }
    }

    #[actix_web::test]
    async fn foreign_referer_goes_home() {
        let resp = switch("/language/en", Some("https://evil.example.com/phish")).await;

        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    }
}
