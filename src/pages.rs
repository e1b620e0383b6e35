//! Page assembly.
//!
//! A page is a pure function of the content store, the route, the language and
//! (for the directory) the search state. Each render resolves the sections the
//! page shows once, through the i18n resolver, and never touches the store.

use crate::content::{ContentError, ContentStore};
use crate::directory::{DirectoryView, SearchState};
use crate::forms::FormKind;
use crate::i18n::{Language, LanguageStrings};
use crate::routes::Route;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Number of teachers shown on the home page.
pub const FEATURED_TEACHERS: usize = 6;

/// Entry of the language toggle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub code: &'static str,
    pub native_name: &'static str,
    pub active: bool,
}

/// Navigation bar, news ticker and footer shared by every page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chrome {
    pub site_info: Value,
    pub navigation: Value,
    pub news: Value,
    pub languages: Vec<LanguageOption>,
    pub strings: &'static LanguageStrings,
}

/// A fully resolved page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub route: Route,
    pub language: Language,
    pub title: &'static str,
    pub chrome: Chrome,
    pub body: Map<String, Value>,
}

/// Render `route` in `lang`.
pub fn render(
    store: &ContentStore,
    route: Route,
    lang: Language,
    search: &SearchState,
) -> Result<PageView, ContentError> {
    let strings = lang.strings();

    Ok(PageView {
        route,
        language: lang,
        title: route.title(strings),
        chrome: chrome(store, lang)?,
        body: body(store, route, lang, search)?,
    })
}

fn chrome(store: &ContentStore, lang: Language) -> Result<Chrome, ContentError> {
    let languages = Language::all()
        .into_iter()
        .map(|option| LanguageOption {
            code: option.code(),
            native_name: option.native_name(),
            active: option == lang,
        })
        .collect();

    Ok(Chrome {
        site_info: store.resolve_section("siteInfo", lang)?,
        navigation: store.resolve_section("navigation", lang)?,
        news: store.resolve_section("news", lang)?,
        languages,
        strings: lang.strings(),
    })
}

fn body(
    store: &ContentStore,
    route: Route,
    lang: Language,
    search: &SearchState,
) -> Result<Map<String, Value>, ContentError> {
    let content = store.content();

    let body = match route {
        Route::Home => json!({
            "hero": store.resolve_section("hero", lang)?,
            "college": store.resolve_pointer("/about/college", lang)?,
            "achievements": store.resolve_section("achievements", lang)?,
            "facilities": store.resolve_section("facilities", lang)?,
            "featuredTeachers": store.teachers().iter().take(FEATURED_TEACHERS).collect::<Vec<_>>(),
        }),
        Route::About => json!({
            "about": store.resolve_section("about", lang)?,
            "teachers": store.teachers(),
        }),
        Route::Academic => json!({
            "notices": store.resolve_section("notices", lang)?,
            "schedule": store.resolve_section("schedule", lang)?,
            "appointmentForm": FormKind::Appointment.descriptor(),
        }),
        Route::Admission => json!({
            "instructions": store.resolve_pointer("/admission/instructions", lang)?,
            "bkashNumber": content.site_info.bkash_number,
            "admissionForm": FormKind::Admission.descriptor(),
        }),
        Route::Teachers => json!({
            "directory": DirectoryView::build(store.teachers(), search),
        }),
        Route::Contact => json!({
            "contact": {
                "address": store.resolve_pointer("/siteInfo/address", lang)?,
                "phone": content.site_info.phone,
                "email": content.site_info.email,
            },
            "contactForm": FormKind::Contact.descriptor(),
        }),
        Route::Login => json!({
            "loginForm": FormKind::Login.descriptor(),
            "signupForm": FormKind::Signup.descriptor(),
        }),
        Route::NotFound => json!({
            "message": lang.strings().not_found_message,
        }),
    };

    Ok(match body {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}
