use actix_web::web;

mod handlers;

pub fn transaction_service(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::add_transaction)
        .service(handlers::get_transactions)
        .service(handlers::delete_transaction);
}
