use actix_web::{HttpResponse, Result, web};
use uuid::Uuid;

use crate::database::models::{
    BonusEntryInput, SalaryEntryInput, StatisticsQuery, UpdateWorkDayInput, WorkDayDateQuery,
    WorkDayInput,
};
use crate::handlers::shared::ApiResponse;
use crate::services::{BookkeepingService, Claims};

pub async fn get_work_days(
    claims: Claims,
    service: web::Data<BookkeepingService>,
) -> Result<HttpResponse> {
    let work_days = service.list_work_days(claims.user_id()).await?;

    Ok(ApiResponse::success(work_days))
}

/// Create or update the day's salary, bonus and description together
pub async fn record_work_day(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    input: web::Json<WorkDayInput>,
) -> Result<HttpResponse> {
    let work_day = service
        .record_work_day(claims.user_id(), input.into_inner())
        .await?;

    Ok(ApiResponse::success(work_day))
}

pub async fn record_salary(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    input: web::Json<SalaryEntryInput>,
) -> Result<HttpResponse> {
    let work_day = service
        .record_salary(claims.user_id(), input.into_inner())
        .await?;

    Ok(ApiResponse::success(work_day))
}

pub async fn record_bonus(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    input: web::Json<BonusEntryInput>,
) -> Result<HttpResponse> {
    let work_day = service
        .record_bonus(claims.user_id(), input.into_inner())
        .await?;

    Ok(ApiResponse::success(work_day))
}

pub async fn get_work_day_by_date(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    query: web::Query<WorkDayDateQuery>,
) -> Result<HttpResponse> {
    let work_day = service
        .work_day_by_date(claims.user_id(), query.date)
        .await?;

    Ok(ApiResponse::success(work_day))
}

pub async fn update_work_day(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    path: web::Path<Uuid>,
    input: web::Json<UpdateWorkDayInput>,
) -> Result<HttpResponse> {
    let work_day = service
        .update_work_day(claims.user_id(), path.into_inner(), input.into_inner())
        .await?;

    Ok(ApiResponse::success(work_day))
}

pub async fn delete_work_day(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    service
        .delete_work_day(claims.user_id(), path.into_inner())
        .await?;

    Ok(ApiResponse::success_message("Work day deleted"))
}

pub async fn get_statistics(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    query: web::Query<StatisticsQuery>,
) -> Result<HttpResponse> {
    let statistics = service.statistics(claims.user_id(), query.as_of).await?;

    Ok(ApiResponse::success(statistics))
}

pub async fn get_salary_balance(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    query: web::Query<StatisticsQuery>,
) -> Result<HttpResponse> {
    let balance = service.salary_balance(claims.user_id(), query.as_of).await?;

    Ok(ApiResponse::success(balance))
}
