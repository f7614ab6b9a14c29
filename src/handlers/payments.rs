use actix_web::{HttpResponse, Result, web};
use uuid::Uuid;

use crate::database::models::{CreatePaymentInput, PaymentRangeQuery};
use crate::handlers::shared::ApiResponse;
use crate::services::{BookkeepingService, Claims};

pub async fn get_payments(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    query: web::Query<PaymentRangeQuery>,
) -> Result<HttpResponse> {
    let payments = service
        .list_payments(claims.user_id(), query.from, query.to)
        .await?;

    Ok(ApiResponse::success(payments))
}

pub async fn add_payment(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    input: web::Json<CreatePaymentInput>,
) -> Result<HttpResponse> {
    let response = service
        .add_payment(claims.user_id(), input.into_inner())
        .await?;

    Ok(ApiResponse::created(response))
}

pub async fn delete_payment(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let balance = service
        .delete_payment(claims.user_id(), path.into_inner())
        .await?;

    Ok(ApiResponse::success_with_message(balance, "Payment deleted"))
}

pub async fn get_payment_statistics(
    claims: Claims,
    service: web::Data<BookkeepingService>,
) -> Result<HttpResponse> {
    let statistics = service.payment_statistics(claims.user_id()).await?;

    Ok(ApiResponse::success(statistics))
}

pub async fn get_balance(
    claims: Claims,
    service: web::Data<BookkeepingService>,
) -> Result<HttpResponse> {
    let balance = service.salary_balance(claims.user_id(), None).await?;

    Ok(ApiResponse::success(balance))
}
