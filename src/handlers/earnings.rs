use actix_web::{HttpResponse, Result, web};

use crate::database::models::AdditionalEarningsInput;
use crate::handlers::shared::ApiResponse;
use crate::services::{BookkeepingService, Claims};

pub async fn get_additional_earnings(
    claims: Claims,
    service: web::Data<BookkeepingService>,
) -> Result<HttpResponse> {
    let earnings = service.additional_earnings(claims.user_id()).await?;

    Ok(ApiResponse::success(earnings))
}

pub async fn add_additional_earnings(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    input: web::Json<AdditionalEarningsInput>,
) -> Result<HttpResponse> {
    let earnings = service
        .add_additional_earnings(claims.user_id(), input.into_inner().amount)
        .await?;

    Ok(ApiResponse::success(earnings))
}
