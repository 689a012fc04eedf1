use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use server_api::{
    end_session, initialize_session, page::render_page, select_section, ApiContext,
    InitializedSession,
};
use session_store::SessionStore;
use shared::{
    domain::NavTrigger,
    error::{ApiError, ErrorCode},
    protocol::{Notice, SelectRequest, SelectResponse, SessionSnapshot},
};
use tokio::time::MissedTickBehavior;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod session_cookie;

use app_state::AppState;
use config::load_settings;
use session_cookie::{expired_cookie, session_cookie, session_id_from_headers};

#[derive(Debug, Deserialize)]
struct SelectForm {
    trigger: NavTrigger,
}

type HttpError = (StatusCode, Json<ApiError>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings()?;
    let sessions = SessionStore::new(settings.idle_ttl()?);
    spawn_session_sweeper(
        sessions.clone(),
        Duration::from_secs(settings.session_sweep_interval_seconds.max(1)),
    );

    let state = AppState {
        api: ApiContext { sessions },
        cookie_name: settings.session_cookie_name.clone(),
    };
    let app = build_router(Arc::new(state), settings.max_body_bytes);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, idle_ttl_seconds = settings.session_idle_ttl_seconds, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/select", post(select_form))
        .route("/api/session", get(http_session).delete(http_end_session))
        .route("/api/session/select", post(http_select))
        .route("/healthz", get(healthz))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn spawn_session_sweeper(sessions: SessionStore, every: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let removed = sessions.sweep_expired(chrono::Utc::now()).await;
            if removed > 0 {
                info!(removed, "expired sessions swept");
            } else {
                debug!("no expired sessions");
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    let session = attach_session(&state, &headers).await?;
    Ok(page_response(&state, &session, None))
}

async fn select_form(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<SelectForm>,
) -> Result<Response, HttpError> {
    let session = attach_session(&state, &headers).await?;
    let outcome = select_section(&state.api, session.session_id, form.trigger)
        .await
        .map_err(http_error)?;
    Ok(page_response(&state, &session, Some(&outcome.notice)))
}

async fn http_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    let session = attach_session(&state, &headers).await?;
    let snapshot = SessionSnapshot::new(session.session_id, session.state);
    Ok(with_session_cookie(&state, &session, Json(snapshot).into_response()))
}

async fn http_select(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<SelectRequest>,
) -> Result<Response, HttpError> {
    let session = attach_session(&state, &headers).await?;
    let outcome = select_section(&state.api, session.session_id, req.trigger)
        .await
        .map_err(http_error)?;
    let body = SelectResponse {
        session: SessionSnapshot::new(session.session_id, outcome.state),
        notice: outcome.notice,
    };
    Ok(with_session_cookie(&state, &session, Json(body).into_response()))
}

async fn http_end_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    if let Some(session_id) = session_id_from_headers(&headers, &state.cookie_name) {
        end_session(&state.api, session_id)
            .await
            .map_err(http_error)?;
    }
    let mut response = StatusCode::NO_CONTENT.into_response();
    if let Some(cookie) = expired_cookie(&state.cookie_name) {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    Ok(response)
}

async fn attach_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<InitializedSession, HttpError> {
    let session_id = session_id_from_headers(headers, &state.cookie_name);
    initialize_session(&state.api, session_id)
        .await
        .map_err(http_error)
}

fn page_response(
    state: &AppState,
    session: &InitializedSession,
    notice: Option<&Notice>,
) -> Response {
    let mut response = Html(render_page(notice)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    with_session_cookie(state, session, response)
}

/// Re-issued on every response so the browser's Max-Age slides with the
/// store's idle timeout.
fn with_session_cookie(
    state: &AppState,
    session: &InitializedSession,
    mut response: Response,
) -> Response {
    let max_age_seconds = state.api.sessions.idle_ttl().num_seconds();
    if let Some(cookie) = session_cookie(&state.cookie_name, session.session_id, max_age_seconds) {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}

fn http_error(error: ApiError) -> HttpError {
    let status = match error.code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
    };
    (status, Json(error))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
