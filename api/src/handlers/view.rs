//! View responses and flash messages
//!
//! Pages are returned as JSON documents naming the template to render
//! alongside the model attributes, e.g.
//! `{"view": "products/products", "listProducts": [...], "keyword": null}`.
//!
//! Flash messages survive exactly one redirect: the redirect sets a short
//! code in the `flash` cookie and the next listing page consumes it.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;

pub const FLASH_COOKIE: &str = "flash";

/// A page to render: template name plus model attributes
#[derive(Debug, Serialize)]
pub struct View<M> {
    pub view: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_message: Option<&'static str>,
    #[serde(flatten)]
    pub model: M,
}

impl<M> View<M> {
    pub fn new(view: &'static str, model: M) -> Self {
        Self {
            view,
            success_message: None,
            model,
        }
    }

    pub fn with_flash(mut self, flash: Option<Flash>) -> Self {
        self.success_message = flash.map(Flash::message);
        self
    }
}

impl<M: Serialize> IntoResponse for View<M> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// One-shot status messages shown after a redirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Saved,
    Deleted,
}

impl Flash {
    pub fn message(self) -> &'static str {
        match self {
            Flash::Saved => "登録に成功しました",
            Flash::Deleted => "削除に成功しました",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Flash::Saved => "saved",
            Flash::Deleted => "deleted",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "saved" => Some(Flash::Saved),
            "deleted" => Some(Flash::Deleted),
            _ => None,
        }
    }
}

/// 302 redirect to `location`, carrying `flash` to the next page
pub fn redirect_with_flash(jar: CookieJar, location: &'static str, flash: Flash) -> Response {
    let cookie = Cookie::build((FLASH_COOKIE, flash.code()))
        .path("/")
        .http_only(true);

    (
        StatusCode::FOUND,
        jar.add(cookie),
        [(header::LOCATION, location)],
    )
        .into_response()
}

/// Read and clear the pending flash message, if any
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let flash = jar
        .get(FLASH_COOKIE)
        .and_then(|cookie| Flash::from_code(cookie.value()));

    match flash {
        Some(_) => (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), flash),
        None => (jar, None),
    }
}
