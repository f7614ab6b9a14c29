use actix_web::{HttpResponse, Result, web};
use uuid::Uuid;

use crate::database::models::CreateBonusInput;
use crate::handlers::shared::ApiResponse;
use crate::services::{BookkeepingService, Claims};

pub async fn get_bonuses(
    claims: Claims,
    service: web::Data<BookkeepingService>,
) -> Result<HttpResponse> {
    let bonuses = service.list_bonuses(claims.user_id()).await?;

    Ok(ApiResponse::success(bonuses))
}

pub async fn add_bonus(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    input: web::Json<CreateBonusInput>,
) -> Result<HttpResponse> {
    let bonus = service
        .add_bonus(claims.user_id(), input.into_inner())
        .await?;

    Ok(ApiResponse::created(bonus))
}

pub async fn delete_bonus(
    claims: Claims,
    service: web::Data<BookkeepingService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    service
        .delete_bonus(claims.user_id(), path.into_inner())
        .await?;

    Ok(ApiResponse::success_message("Bonus deleted"))
}

pub async fn get_bonus_statistics(
    claims: Claims,
    service: web::Data<BookkeepingService>,
) -> Result<HttpResponse> {
    let statistics = service.bonus_statistics(claims.user_id()).await?;

    Ok(ApiResponse::success(statistics))
}
