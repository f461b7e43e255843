use actix_web::web;
use thiserror::Error;

mod handlers;
mod pie;

pub use pie::{count_by_field, PieChartRenderer, Slice};

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No transactions to chart")]
    NoRecords,
    #[error("No transaction has a value for {0}")]
    MissingField(String),
    #[error("Unable to draw chart: {0}")]
    Draw(String),
    #[error("Unable to rasterize chart: {0}")]
    Rasterize(String),
}

pub fn chart_service(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pie_chart);
}
