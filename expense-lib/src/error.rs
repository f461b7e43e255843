use crate::chart::ChartError;
use actix_web::body::BoxBody;
use actix_web::error::{BlockingError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use expense_repo::transaction_repo::TransactionRepoError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error(transparent)]
    TransactionRepo(#[from] TransactionRepoError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("Unable to serialize figure: {0}")]
    Figure(#[from] serde_json::Error),
    #[error("Blocking thread pool is gone")]
    Blocking,
}

impl From<BlockingError> for HandlerError {
    fn from(_: BlockingError) -> Self {
        HandlerError::Blocking
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::TransactionRepo(TransactionRepoError::TransactionNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            HandlerError::Chart(ChartError::NoRecords | ChartError::MissingField(_)) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        // backend messages go out verbatim, context chain included
        let detail = format!("{:#}", self);
        let status = self.status_code();
        if status.is_server_error() {
            error!(%status, detail = %detail, "request failed");
        }
        HttpResponse::build(status).json(ErrorBody { detail })
    }
}

/// Turns JSON payloads that fail to deserialize into a 400 with the parser's message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        error!(req_path = req.path(), %err);
        match err {
            JsonPayloadError::Deserialize(deserialize_err) => {
                let error_body = serde_json::json!({
                    "error": "Unable to parse JSON payload",
                    "detail": format!("{}", deserialize_err),
                });
                actix_web::error::InternalError::from_response(
                    deserialize_err,
                    HttpResponse::BadRequest()
                        .content_type("application/json")
                        .body(error_body.to_string()),
                )
                .into()
            }
            _ => err.into(),
        }
    })
}
