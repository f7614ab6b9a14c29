use actix_web::web;

use crate::handlers::earnings;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/earnings")
            .route("", web::get().to(earnings::get_additional_earnings))
            .route("", web::post().to(earnings::add_additional_earnings)),
    );
}
