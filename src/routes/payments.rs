use actix_web::web;

use crate::handlers::payments;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payments")
            .route("", web::get().to(payments::get_payments))
            .route("", web::post().to(payments::add_payment))
            .route("/statistics", web::get().to(payments::get_payment_statistics))
            .route("/balance", web::get().to(payments::get_balance))
            .route("/{id}", web::delete().to(payments::delete_payment)),
    );
}
