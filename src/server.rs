//! HTTP surface of the site.
//!
//! Every page path answers with the resolved `PageView` as JSON. The language
//! travels with each request (`?lang=bn`), so the server holds no mutable
//! language state of its own.

use crate::content::{ContentError, ContentStore};
use crate::directory::{SearchState, SubjectFilter};
use crate::forms::{FormCapture, FormError, FormKind, SubmissionError, SubmissionGateway};
use crate::i18n::{Language, MetricsReport, SiteMetrics};
use crate::pages::{self, PageView};
use crate::routes::Route;
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub gateway: Arc<dyn SubmissionGateway>,
    pub default_language: Language,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub lang: Option<String>,
    pub q: Option<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Form(#[from] FormError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            ApiError::Content(err) => {
                error!("Content defect while rendering: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": err.to_string() }),
                )
            }
            ApiError::Form(FormError::MissingFields(missing)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": self.to_string(), "missing": missing }),
            ),
            ApiError::Form(FormError::Submission(SubmissionError::Unavailable(_))) => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "error": self.to_string() }),
            ),
            ApiError::Form(_) => (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() })),
        };

        (status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/forms/:kind", post(submit_form));

    for route in Route::PAGES {
        if let Some(path) = route.path() {
            router = router.route(path, get(page));
        }
    }

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn language(requested: Option<&str>, default: Language) -> Result<Language, ApiError> {
    match requested {
        Some(code) => Language::from_code(code).map_err(|e| ApiError::BadRequest(e.to_string())),
        None => Ok(default),
    }
}

async fn page(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageView>, ApiError> {
    let lang = language(query.lang.as_deref(), state.default_language)?;
    let route = Route::from_path(uri.path());
    let search = SearchState::new(
        query.q.unwrap_or_default(),
        // `?subject=` with no value is the unselected filter
        query
            .subject
            .as_deref()
            .filter(|subject| !subject.is_empty())
            .map_or(SubjectFilter::All, SubjectFilter::parse),
    );

    let view = pages::render(&state.store, route, lang, &search)?;

    let metrics = SiteMetrics::global();
    metrics.record_page_view(lang);
    if route == Route::Teachers && search.is_active() {
        metrics.record_directory_search();
    }

    Ok(Json(view))
}

async fn not_found(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<LangQuery>,
) -> Result<(StatusCode, Json<PageView>), ApiError> {
    // An unusable lang on a missing page still gets the not-found page
    let lang = language(query.lang.as_deref(), state.default_language).unwrap_or(state.default_language);
    let view = pages::render(&state.store, Route::NotFound, lang, &SearchState::default())?;

    info!("No route for {}", uri.path());
    SiteMetrics::global().record_not_found();

    Ok((StatusCode::NOT_FOUND, Json(view)))
}

async fn submit_form(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<LangQuery>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let lang = language(query.lang.as_deref(), state.default_language)?;
    let kind = FormKind::from_name(&kind).ok_or_else(|| FormError::UnknownForm(kind.clone()))?;

    let result = FormCapture::from_json(kind, &fields)
        .and_then(|mut capture| capture.submit(state.gateway.as_ref()));

    match result {
        Ok(receipt) => {
            SiteMetrics::global().record_submission_accepted();
            Ok((
                StatusCode::ACCEPTED,
                Json(json!({
                    "message": lang.strings().submission_received,
                    "receipt": receipt,
                })),
            ))
        }
        Err(err) => {
            SiteMetrics::global().record_submission_rejected();
            warn!("Rejected {} form: {}", kind, err);
            Err(err.into())
        }
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn metrics() -> Json<MetricsReport> {
    Json(SiteMetrics::global().report())
}
