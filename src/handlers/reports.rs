use actix_web::{HttpResponse, Result, web};

use crate::database::models::ReportQuery;
use crate::handlers::shared::ApiResponse;
use crate::services::{BookkeepingService, Claims};

/// Twelve months of the requested year (default: current)
pub async fn get_monthly_report(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse> {
    let report = service.monthly_report(claims.user_id(), query.year).await?;

    Ok(ApiResponse::success(report))
}

pub async fn get_annual_report(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse> {
    let report = service.annual_report(claims.user_id(), query.year).await?;

    Ok(ApiResponse::success(report))
}

pub async fn get_monthly_detailed_report(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse> {
    let report = service
        .monthly_detailed_report(claims.user_id(), query.year, query.month)
        .await?;

    Ok(ApiResponse::success(report))
}
