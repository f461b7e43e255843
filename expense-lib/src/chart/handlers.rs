use crate::chart::{ChartError, PieChartRenderer};
use crate::error::HandlerError;
use actix_web::http::header::ContentType;
use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChartRequest {
    pub transactions: Vec<Map<String, Value>>,
    pub chart_type: String,
}

#[post("/pie_chart")]
pub async fn pie_chart(
    renderer: web::Data<PieChartRenderer>,
    request: web::Json<PieChartRequest>,
) -> Result<HttpResponse, HandlerError> {
    let request = request.into_inner();
    if request.transactions.is_empty() {
        return Err(ChartError::NoRecords.into());
    }

    let png = web::block(move || renderer.render(&request.transactions, &request.chart_type))
        .await??;
    Ok(HttpResponse::Ok().content_type(ContentType::png()).body(png))
}
