//! Reporting HTTP handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::errors::{AppError, AppResult};
use crate::reports::{GameReport, ReportQuery};
use crate::web::AppState;

use super::parse_date_param;

/// Query parameters for the games report; `from` and `to` are required
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ReportParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub sport_id: Option<i32>,
    pub team_id: Option<i32>,
}

impl ReportParams {
    pub(crate) fn into_query(self) -> AppResult<ReportQuery> {
        let from = parse_date_param("from", self.from.as_deref())?
            .ok_or_else(|| AppError::validation("missing required parameter 'from'"))?;
        let to = parse_date_param("to", self.to.as_deref())?
            .ok_or_else(|| AppError::validation("missing required parameter 'to'"))?;

        Ok(ReportQuery {
            from,
            to,
            sport_id: self.sport_id,
            team_id: self.team_id,
        })
    }
}

/// Run the filtered games report
#[utoipa::path(
    get,
    path = "/api/report/games",
    tag = "reports",
    params(ReportParams),
    responses(
        (status = 200, description = "Report with filters, stats and rows", body = GameReport),
        (status = 400, description = "Invalid filter (missing range, from > to)", body = crate::web::ErrorBody)
    )
)]
pub async fn games_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> AppResult<Json<GameReport>> {
    let query = params.into_query()?;
    let report = state.reports.run(query).await?;
    Ok(Json(report))
}
