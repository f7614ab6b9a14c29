use actix_web::{HttpResponse, Result, web};

use crate::database::models::{CreateUserInput, LoginInput};
use crate::handlers::shared::ApiResponse;
use crate::services::{AuthService, Claims};

pub async fn register(
    auth_service: web::Data<AuthService>,
    request: web::Json<CreateUserInput>,
) -> Result<HttpResponse> {
    let response = auth_service.register(request.into_inner()).await?;

    Ok(ApiResponse::created(response))
}

pub async fn login(
    auth_service: web::Data<AuthService>,
    request: web::Json<LoginInput>,
) -> Result<HttpResponse> {
    let response = auth_service.login(request.into_inner()).await?;

    Ok(ApiResponse::success(response))
}

pub async fn me(claims: Claims, auth_service: web::Data<AuthService>) -> Result<HttpResponse> {
    let user = auth_service.me(claims.user_id()).await?;

    Ok(ApiResponse::success(user))
}
