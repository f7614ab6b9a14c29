use actix_web::web;

pub mod auth;
pub mod bonuses;
pub mod earnings;
pub mod payments;
pub mod reports;
pub mod work_days;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(auth::configure)
            .configure(work_days::configure)
            .configure(payments::configure)
            .configure(bonuses::configure)
            .configure(reports::configure)
            .configure(earnings::configure),
    );
}
