use session_store::{SessionStore, StoreError};
use shared::{
    domain::{NavTrigger, Section, SessionId, SessionState},
    error::{ApiError, ErrorCode},
    protocol::Notice,
};
use tracing::info;

pub mod page;

#[derive(Clone)]
pub struct ApiContext {
    pub sessions: SessionStore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializedSession {
    pub session_id: SessionId,
    pub state: SessionState,
    /// True when a new session was minted for this request.
    pub created: bool,
}

#[derive(Debug, Clone)]
pub struct SelectOutcome {
    pub state: SessionState,
    pub notice: Notice,
}

/// Attaches the request to its session, creating one at Home when the caller
/// has none. Unknown or expired ids are never adopted; a fresh id is minted.
pub async fn initialize_session(
    ctx: &ApiContext,
    session_id: Option<SessionId>,
) -> Result<InitializedSession, ApiError> {
    if let Some(session_id) = session_id {
        if let Some(state) = ctx.sessions.get(session_id).await {
            return Ok(InitializedSession {
                session_id,
                state,
                created: false,
            });
        }
    }

    let (session_id, state) = ctx.sessions.create().await;
    info!(%session_id, "session started");
    Ok(InitializedSession {
        session_id,
        state,
        created: true,
    })
}

pub async fn select_section(
    ctx: &ApiContext,
    session_id: SessionId,
    trigger: NavTrigger,
) -> Result<SelectOutcome, ApiError> {
    let section = trigger.section();
    let state = ctx
        .sessions
        .select(session_id, section)
        .await
        .map_err(store_error)?;
    let notice = Notice::navigating_to(section);
    info!(%session_id, trigger = trigger.key(), message = %notice.message, "section selected");
    Ok(SelectOutcome { state, notice })
}

pub async fn current_section(ctx: &ApiContext, session_id: SessionId) -> Result<Section, ApiError> {
    ctx.sessions
        .get(session_id)
        .await
        .map(|state| state.current_section)
        .ok_or_else(|| ApiError::new(ErrorCode::NotFound, "session not found"))
}

pub async fn end_session(ctx: &ApiContext, session_id: SessionId) -> Result<bool, ApiError> {
    let ended = ctx.sessions.end(session_id).await;
    if ended {
        info!(%session_id, "session ended");
    }
    Ok(ended)
}

fn store_error(error: StoreError) -> ApiError {
    match error {
        StoreError::SessionNotFound { .. } => ApiError::new(ErrorCode::NotFound, error.to_string()),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
