use actix_web::web;

use crate::handlers::reports;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/monthly", web::get().to(reports::get_monthly_report))
            .route("/annual", web::get().to(reports::get_annual_report))
            .route(
                "/monthly-detailed",
                web::get().to(reports::get_monthly_detailed_report),
            ),
    );
}
