use actix_web::web;

use crate::handlers::bonuses;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bonuses")
            .route("", web::get().to(bonuses::get_bonuses))
            .route("", web::post().to(bonuses::add_bonus))
            .route("/statistics", web::get().to(bonuses::get_bonus_statistics))
            .route("/{id}", web::delete().to(bonuses::delete_bonus)),
    );
}
