use actix_web::web;

use crate::handlers::work_days;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/work-days")
            .route("", web::get().to(work_days::get_work_days))
            .route("", web::post().to(work_days::record_work_day))
            .route("/salary", web::post().to(work_days::record_salary))
            .route("/bonus", web::post().to(work_days::record_bonus))
            .route("/by-date", web::get().to(work_days::get_work_day_by_date))
            .route("/statistics", web::get().to(work_days::get_statistics))
            .route("/balance", web::get().to(work_days::get_salary_balance))
            .route("/{id}", web::put().to(work_days::update_work_day))
            .route("/{id}", web::delete().to(work_days::delete_work_day)),
    );
}
