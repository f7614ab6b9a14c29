use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};
use anyhow::Result;

use workday_tracker::database::{
    init_database,
    repositories::{BonusRepository, PaymentRepository, UserRepository, WorkDayRepository},
};
use workday_tracker::middleware::RequestIdMiddleware;
use workday_tracker::{AuthService, BookkeepingService, Config, routes};

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Workday Tracker API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    config.validate()?;

    log::info!(
        "Starting Workday Tracker API (environment: {})",
        config.environment
    );

    let pool = init_database(&config.database_url, config.database_max_connections).await?;

    let user_repository = UserRepository::new(pool.clone());
    let work_day_repository = WorkDayRepository::new(pool.clone());
    let payment_repository = PaymentRepository::new(pool.clone());
    let bonus_repository = BonusRepository::new(pool.clone());

    let auth_service = AuthService::new(user_repository.clone(), config.clone());
    let seeded = auth_service.seed_users().await?;
    if seeded > 0 {
        log::info!("Seeded {} user(s) from configuration", seeded);
    }

    let bookkeeping_service = BookkeepingService::new(
        user_repository,
        work_day_repository,
        payment_repository,
        bonus_repository,
        config.default_daily_salary.clone(),
    );

    let config_data = web::Data::new(config.clone());
    let auth_service_data = web::Data::new(auth_service);
    let bookkeeping_service_data = web::Data::new(bookkeeping_service);

    let server_address = config.server_address();
    let allowed_origin = config.client_base_url.clone();
    log::info!("Server starting on http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(config_data.clone())
            .app_data(auth_service_data.clone())
            .app_data(bookkeeping_service_data.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&allowed_origin)
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                    .allowed_headers(vec![
                        "Authorization",
                        "Content-Type",
                        "Accept",
                        "X-Requested-With",
                        "X-Correlation-ID",
                    ])
                    .max_age(3600),
            )
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(hello)
            .service(health)
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
