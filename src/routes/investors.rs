use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::db;
use crate::error::AppError;
use crate::read_model::{self, InvestorRead, InvestorTotalCommitments, InvestorWithTotal};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InvestorQuery {
    /// Optional: Only return commitments with exactly this asset class (case-sensitive).
    #[serde(default)]
    #[param(required = false)]
    asset_class: Option<String>,
}

/// Ids outside the stored integer range cannot exist, so they are not found.
fn investor_key(investor_id: i64) -> Result<i32, AppError> {
    i32::try_from(investor_id).map_err(|_| AppError::InvestorNotFound(investor_id))
}

/// List all investors along with their nested commitments
#[utoipa::path(
    get,
    path = "/investors",
    responses(
        (status = 200, description = "All investors with their commitments", body = Vec<InvestorRead>)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_investors(State(state): State<AppState>) -> Result<Json<Vec<InvestorRead>>, AppError> {
    let investors = db::list_investors(&state.db).await?;
    tracing::info!("Listing {} investors", investors.len());
    Ok(Json(read_model::list_investors(&investors)))
}

/// Get one investor, optionally filtering its commitments by asset class
#[utoipa::path(
    get,
    path = "/investors/{investor_id}",
    params(
        ("investor_id" = i64, Path, description = "Investor identifier"),
        InvestorQuery
    ),
    responses(
        (status = 200, description = "Investor found", body = InvestorRead),
        (status = 404, description = "Investor not found")
    )
)]
#[tracing::instrument(skip(state, query), fields(asset_class = ?query.asset_class))]
pub async fn get_investor(
    State(state): State<AppState>,
    Path(investor_id): Path<i64>,
    Query(query): Query<InvestorQuery>,
) -> Result<Json<InvestorRead>, AppError> {
    let investor = db::find_investor(&state.db, investor_key(investor_id)?)
        .await?
        .ok_or(AppError::InvestorNotFound(investor_id))?;

    Ok(Json(read_model::investor_detail(&investor, query.asset_class.as_deref())))
}

/// Total commitment amount of one investor in the reporting currency (GBP)
#[utoipa::path(
    get,
    path = "/investors/{investor_id}/total_commitments",
    params(
        ("investor_id" = i64, Path, description = "Investor identifier")
    ),
    responses(
        (status = 200, description = "Total computed", body = InvestorTotalCommitments),
        (status = 404, description = "Investor not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_investor_total_commitments(
    State(state): State<AppState>,
    Path(investor_id): Path<i64>,
) -> Result<Json<InvestorTotalCommitments>, AppError> {
    let investor = db::find_investor(&state.db, investor_key(investor_id)?)
        .await?
        .ok_or(AppError::InvestorNotFound(investor_id))?;

    let total = read_model::investor_total_commitments(&investor);
    tracing::debug!(total = total.total_commitments_gbp, "Computed total commitments");
    Ok(Json(total))
}

/// List investors with their total commitment amount, without nested commitments
#[utoipa::path(
    get,
    path = "/investors_with_totals",
    responses(
        (status = 200, description = "Investor summaries with totals", body = Vec<InvestorWithTotal>)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_investors_with_totals(
    State(state): State<AppState>,
) -> Result<Json<Vec<InvestorWithTotal>>, AppError> {
    let investors = db::list_investors(&state.db).await?;
    Ok(Json(read_model::investors_with_totals(&investors)))
}
