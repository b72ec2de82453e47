//! JB Crafts P&L - admin reporting service

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jbcrafts_pnl::pnl::{aggregate, export, OverrideKind, OverrideStore, PnlReport};
use jbcrafts_pnl::storage::postgres as store;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    let db = PgPoolOptions::new().max_connections(10).connect(&std::env::var("DATABASE_URL")?).await?;
    sqlx::migrate!("./migrations").run(&db).await?;
    let state = AppState { db };

    let app = Router::new()
        .route("/health", get(|| async { Json(serde_json::json!({"status": "healthy", "service": "jbcrafts-pnl"})) }))
        .route("/api/v1/pnl", get(get_pnl))
        .route("/api/v1/pnl/export", get(export_pnl))
        .route("/api/v1/pnl/overrides", get(list_overrides))
        .route("/api/v1/pnl/overrides/shipping/:date", put(set_shipping_override))
        .route("/api/v1/pnl/overrides/fees/:date", put(set_fee_override))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8083".to_string());
    tracing::info!("jbcrafts-pnl listening on 0.0.0.0:{}", port);
    axum::serve(tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?, app).await?;
    Ok(())
}

type HandlerError = (StatusCode, String);

fn internal(e: impl std::fmt::Display) -> HandlerError {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

/// Loads the three inputs, runs the pure aggregation, sorts for presentation.
async fn build_report(db: &sqlx::PgPool) -> Result<PnlReport, HandlerError> {
    let orders = store::list_orders(db).await.map_err(internal)?;
    let products = store::list_products(db).await.map_err(internal)?;
    let overrides = store::load_overrides(db).await.map_err(internal)?;
    let mut report = aggregate(&orders, &products, &overrides)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;
    report.sort_by_date_desc();
    Ok(report)
}

async fn get_pnl(State(s): State<AppState>) -> Result<Json<PnlReport>, HandlerError> {
    Ok(Json(build_report(&s.db).await?))
}

async fn export_pnl(State(s): State<AppState>) -> Result<impl IntoResponse, HandlerError> {
    let report = build_report(&s.db).await?;
    let csv = export::daily_to_csv(&report.daily);
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], csv))
}

async fn list_overrides(State(s): State<AppState>) -> Result<Json<OverrideStore>, HandlerError> {
    let overrides = store::load_overrides(&s.db).await.map_err(internal)?;
    Ok(Json(overrides))
}

#[derive(Debug, Deserialize)]
pub struct SetOverrideRequest {
    /// Whole rupees, as entered in the admin view. Negative values are
    /// accepted and model refunds or corrections.
    pub amount: i64,
}

async fn set_shipping_override(
    State(s): State<AppState>,
    Path(date): Path<NaiveDate>,
    Json(r): Json<SetOverrideRequest>,
) -> Result<Json<OverrideStore>, HandlerError> {
    set_override(&s.db, OverrideKind::Shipping, date, r.amount).await
}

async fn set_fee_override(
    State(s): State<AppState>,
    Path(date): Path<NaiveDate>,
    Json(r): Json<SetOverrideRequest>,
) -> Result<Json<OverrideStore>, HandlerError> {
    set_override(&s.db, OverrideKind::Fee, date, r.amount).await
}

async fn set_override(
    db: &sqlx::PgPool,
    kind: OverrideKind,
    date: NaiveDate,
    amount: i64,
) -> Result<Json<OverrideStore>, HandlerError> {
    store::save_override(db, kind, date, amount).await.map_err(internal)?;
    let overrides = store::load_overrides(db).await.map_err(internal)?;
    Ok(Json(overrides))
}
