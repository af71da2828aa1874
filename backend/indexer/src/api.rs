//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::events::{EventKind, EventRecord};

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EventsResponse {
    pub kind: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

/// Bookkeeping reconstructed from the audit trail alone. Amounts are decimal
/// strings because i128 token amounts overflow JSON numbers.
#[derive(Serialize)]
pub struct VaultSummaryResponse {
    pub total_deposited: String,
    pub total_claimed: String,
    pub balance: String,
    pub deposit_count: usize,
    pub ping_count: usize,
    pub claim_count: usize,
    /// Ledger-close time of the most recent ping, if any was indexed.
    pub last_ping_timestamp: Option<i64>,
    pub event_count: usize,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /events`
///
/// Returns all indexed vault events.
pub async fn get_all_events(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match db::get_all_events(&state.pool).await {
        Ok(events) => {
            let count = events.len();
            (
                StatusCode::OK,
                Json(serde_json::json!(AllEventsResponse { count, events })),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!(ErrorResponse {
                error: e.to_string()
            })),
        )
            .into_response(),
    }
}

/// `GET /events/:kind`
///
/// Returns all indexed events of one kind (`deposit`, `ping`, or `claim`).
pub async fn get_events_by_kind(
    State(state): State<Arc<ApiState>>,
    Path(kind): Path<String>,
) -> impl IntoResponse {
    if EventKind::from_topic(&kind) == EventKind::Unknown {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!(ErrorResponse {
                error: format!("unknown event kind: {kind}")
            })),
        )
            .into_response();
    }

    match db::get_events_by_kind(&state.pool, &kind).await {
        Ok(events) => {
            let count = events.len();
            (
                StatusCode::OK,
                Json(serde_json::json!(EventsResponse {
                    kind,
                    count,
                    events,
                })),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!(ErrorResponse {
                error: e.to_string()
            })),
        )
            .into_response(),
    }
}

/// `GET /vault/summary`
///
/// Folds the indexed audit trail into the vault's bookkeeping totals.
pub async fn vault_summary(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match db::get_all_events(&state.pool).await {
        Ok(events) => (
            StatusCode::OK,
            Json(serde_json::json!(summarize(&events))),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!(ErrorResponse {
                error: e.to_string()
            })),
        )
            .into_response(),
    }
}

/// Fold event rows into summary totals.
///
/// Amounts that fail to parse (malformed rows) are skipped rather than
/// poisoning the whole summary.
fn summarize(events: &[EventRecord]) -> VaultSummaryResponse {
    let mut total_deposited: i128 = 0;
    let mut total_claimed: i128 = 0;
    let mut deposit_count = 0usize;
    let mut ping_count = 0usize;
    let mut claim_count = 0usize;
    let mut last_ping_timestamp: Option<i64> = None;

    for ev in events {
        match ev.event_type.as_str() {
            "deposit" => {
                deposit_count += 1;
                if let Some(a) = parse_amount(ev) {
                    total_deposited += a;
                }
            }
            "claim" => {
                claim_count += 1;
                if let Some(a) = parse_amount(ev) {
                    total_claimed += a;
                }
            }
            "ping" => {
                ping_count += 1;
                last_ping_timestamp = last_ping_timestamp.max(Some(ev.timestamp));
            }
            _ => {}
        }
    }

    VaultSummaryResponse {
        total_deposited: total_deposited.to_string(),
        total_claimed: total_claimed.to_string(),
        balance: (total_deposited - total_claimed).to_string(),
        deposit_count,
        ping_count,
        claim_count,
        last_ping_timestamp,
        event_count: events.len(),
    }
}

fn parse_amount(ev: &EventRecord) -> Option<i128> {
    ev.amount.as_deref().and_then(|a| a.parse::<i128>().ok())
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
