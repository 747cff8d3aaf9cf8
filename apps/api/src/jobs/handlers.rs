//! Axum route handlers for the job list and browse deck.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::deck::{Decision, DeckView, JobDeck, SwipeOutcome};
use crate::models::job::Job;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DragRequest {
    pub dx: f64,
}

#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    pub decision: Decision,
}

#[derive(Debug, Serialize)]
pub struct DeckResponse {
    pub deck_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<SwipeOutcome>,
    pub deck: DeckView,
}

fn deck_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Deck {id} not found"))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.jobs.to_vec())
}

/// POST /api/v1/deck
pub async fn handle_create_deck(
    State(state): State<AppState>,
) -> (StatusCode, Json<DeckResponse>) {
    let deck = JobDeck::new(state.jobs.clone(), state.config.swipe_threshold_px);
    let view = deck.view();
    let deck_id = state.decks.insert(deck).await;
    tracing::debug!(%deck_id, total = view.total, "Deck created");

    (
        StatusCode::CREATED,
        Json(DeckResponse {
            deck_id,
            outcome: None,
            deck: view,
        }),
    )
}

/// GET /api/v1/deck/:id
pub async fn handle_get_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<Uuid>,
) -> Result<Json<DeckResponse>, AppError> {
    let deck = state
        .decks
        .get(deck_id)
        .await
        .ok_or_else(|| deck_not_found(deck_id))?;

    Ok(Json(DeckResponse {
        deck_id,
        outcome: None,
        deck: deck.view(),
    }))
}

/// DELETE /api/v1/deck/:id
pub async fn handle_delete_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .decks
        .remove(deck_id)
        .await
        .ok_or_else(|| deck_not_found(deck_id))?;
    tracing::debug!(%deck_id, "Deck discarded");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/deck/:id/drag
pub async fn handle_drag(
    State(state): State<AppState>,
    Path(deck_id): Path<Uuid>,
    Json(req): Json<DragRequest>,
) -> Result<Json<DeckResponse>, AppError> {
    let (outcome, deck) = state
        .decks
        .update(deck_id, |deck| {
            let outcome = deck.drag(req.dx)?;
            Ok::<_, AppError>((outcome, deck.view()))
        })
        .await
        .ok_or_else(|| deck_not_found(deck_id))??;

    tracing::debug!(%deck_id, dx = req.dx, ?outcome, "Drag released");
    Ok(Json(DeckResponse {
        deck_id,
        outcome: Some(outcome),
        deck,
    }))
}

/// POST /api/v1/deck/:id/decision
pub async fn handle_decision(
    State(state): State<AppState>,
    Path(deck_id): Path<Uuid>,
    Json(req): Json<DecisionRequest>,
) -> Result<Json<DeckResponse>, AppError> {
    let (outcome, deck) = state
        .decks
        .update(deck_id, |deck| {
            let outcome = deck.decide(req.decision)?;
            Ok::<_, AppError>((outcome, deck.view()))
        })
        .await
        .ok_or_else(|| deck_not_found(deck_id))??;

    Ok(Json(DeckResponse {
        deck_id,
        outcome: Some(outcome),
        deck,
    }))
}

/// POST /api/v1/deck/:id/reset
pub async fn handle_reset_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<Uuid>,
) -> Result<Json<DeckResponse>, AppError> {
    let deck = state
        .decks
        .update(deck_id, |deck| {
            deck.reset();
            Ok::<_, AppError>(deck.view())
        })
        .await
        .ok_or_else(|| deck_not_found(deck_id))??;

    Ok(Json(DeckResponse {
        deck_id,
        outcome: None,
        deck,
    }))
}
