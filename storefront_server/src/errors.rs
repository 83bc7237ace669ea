use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use storefront_engine::OrderFlowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An error occurred on the backend of the server. {0}")]
    BackendError(String),
    #[error("Could not read request body: {0}")]
    InvalidRequestBody(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("The data was not found. {0}")]
    NoRecordFound(String),
    #[error("{0}")]
    OrderFlowError(#[from] OrderFlowError),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::InitializeError(_) | Self::BackendError(_) | Self::IOError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
            Self::OrderFlowError(e) => match e {
                OrderFlowError::EmptyOrder |
                OrderFlowError::InvalidQuantity(_) |
                OrderFlowError::ProductUnavailable(_) |
                OrderFlowError::InvalidAmount |
                OrderFlowError::OrderAlreadySettled(_) |
                OrderFlowError::OrderCancelled(_) |
                // An unknown order on the payment path is a rejected request, not a missing resource
                OrderFlowError::OrderNotFound(_) => StatusCode::BAD_REQUEST,
                OrderFlowError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}
