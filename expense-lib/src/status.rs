use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "healthy" }))
}

#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Welcome to the Expense API" }))
}

pub fn status_service(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(root);
}
