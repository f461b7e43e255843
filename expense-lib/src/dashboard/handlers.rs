use super::page::dashboard_page;
use super::{ColorField, Dashboard};
use crate::error::HandlerError;
use actix_web::{get, web, HttpResponse, Responder};
use maud::Markup;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct FigureQuery {
    pub color: ColorField,
}

#[get("/plotly-json")]
pub async fn plotly_json(dashboard: web::Data<Dashboard>) -> impl Responder {
    HttpResponse::Ok().json(dashboard.default_figure())
}

#[get("/")]
pub async fn index(dashboard: web::Data<Dashboard>) -> Result<Markup, HandlerError> {
    let initial_figure = serde_json::to_string(dashboard.default_figure())?;
    Ok(dashboard_page(&initial_figure))
}

#[get("/figure")]
pub async fn figure(
    dashboard: web::Data<Dashboard>,
    query: web::Query<FigureQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(dashboard.figure(query.color))
}
