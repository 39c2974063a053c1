use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse, HttpResponseBuilder};
use log::info;
use serde::Deserialize;

use crate::error::AppError;
use crate::lookup::MockContactLookup;
use crate::presenter::{Notice, ResultPresenter, SearchSession};
use crate::render::{render_page, FormInputs, PageView, Tab};
use crate::session::{SessionManager, SESSION_COOKIE};
use crate::table::{CSV_FILE_NAME, CSV_MIME};

pub struct AppState {
    pub sessions: SessionManager,
    pub presenter: ResultPresenter<MockContactLookup>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            sessions: SessionManager::new(),
            presenter: ResultPresenter::new(MockContactLookup::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub tab: String,
}

#[derive(Debug, Deserialize)]
pub struct KeywordForm {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct UrlForm {
    #[serde(default)]
    pub url: String,
}

/// Datasets for a read-only request. Cookieless or stale requests see the
/// initial constants and no session is created for them.
fn current_session(req: &HttpRequest, data: &AppState) -> Result<SearchSession, AppError> {
    let session = match req.cookie(SESSION_COOKIE) {
        Some(cookie) => data.sessions.get(cookie.value())?,
        None => None,
    };
    Ok(session.unwrap_or_default())
}

/// Session id from the request cookie, creating a session when it is missing or stale.
fn resolve_session(req: &HttpRequest, data: &AppState) -> Result<(String, bool), AppError> {
    let cookie = req.cookie(SESSION_COOKIE);
    let resolved = data.sessions.ensure(cookie.as_ref().map(|c| c.value()))?;
    Ok(resolved)
}

fn respond(session_id: &str, created: bool) -> HttpResponseBuilder {
    let mut builder = HttpResponse::Ok();
    if created {
        builder.cookie(
            Cookie::build(SESSION_COOKIE, session_id.to_string())
                .path("/")
                .http_only(true)
                .finish(),
        );
    }
    builder
}

fn page_response(
    mut builder: HttpResponseBuilder,
    session: &SearchSession,
    active: Tab,
    notice: Option<Notice>,
    inputs: FormInputs,
) -> HttpResponse {
    let view = PageView { session, active, notice, inputs };
    builder
        .content_type("text/html; charset=utf-8")
        .body(render_page(&view))
}

fn csv_response(bytes: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(CSV_MIME)
        .append_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", CSV_FILE_NAME),
        ))
        .body(bytes)
}

#[get("/api/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json("Server is running")
}

#[get("/")]
async fn index(
    req: HttpRequest,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = current_session(&req, &data)?;
    let tab = Tab::from_slug(&query.tab);
    Ok(page_response(HttpResponse::Ok(), &session, tab, None, FormInputs::default()))
}

#[post("/search/keyword")]
async fn search_keyword(
    req: HttpRequest,
    form: web::Form<KeywordForm>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (session_id, created) = resolve_session(&req, &data)?;
    let form = form.into_inner();

    let (notice, session) = data.sessions.with_session(&session_id, |s| {
        let notice = data.presenter.search_by_keyword(s, &form.keyword, &form.location);
        (notice, s.clone())
    })?;

    let inputs = FormInputs {
        keyword: form.keyword,
        location: form.location,
        ..FormInputs::default()
    };
    Ok(page_response(respond(&session_id, created), &session, Tab::Keyword, Some(notice), inputs))
}

#[post("/search/url")]
async fn search_url(
    req: HttpRequest,
    form: web::Form<UrlForm>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (session_id, created) = resolve_session(&req, &data)?;
    let form = form.into_inner();

    let (notice, session) = data.sessions.with_session(&session_id, |s| {
        let notice = data.presenter.search_by_url(s, &form.url);
        (notice, s.clone())
    })?;

    let inputs = FormInputs { url: form.url, ..FormInputs::default() };
    Ok(page_response(respond(&session_id, created), &session, Tab::Url, notice, inputs))
}

#[get("/export/keyword")]
async fn export_keyword(req: HttpRequest, data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = current_session(&req, &data)?;
    let bytes = data.presenter.export_keyword_csv(&session)?;
    info!("Downloaded keyword listings");
    Ok(csv_response(bytes))
}

#[get("/export/url")]
async fn export_url(req: HttpRequest, data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = current_session(&req, &data)?;
    let bytes = data.presenter.export_contact_csv(&session)?;
    info!("Downloaded contact results");
    Ok(csv_response(bytes))
}

/// Registers every route on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(index)
        .service(search_keyword)
        .service(search_url)
        .service(export_keyword)
        .service(export_url);
}
