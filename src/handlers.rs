use actix_web::web::{Bytes, Data};
use actix_web::{HttpResponse, Responder};

use crate::consts;
use crate::errors::PanchangError;
use crate::models::check_day::{CheckDayRequest, CheckDayResponse};
use crate::service::CheckDayService;

pub async fn health() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(consts::HEALTH_MESSAGE)
}

pub async fn check_day(service: Data<CheckDayService>, body: Bytes) -> impl Responder {
    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(e) => {
            log::info!("rejected check_day body: {}", e);
            return error_response(&e);
        }
    };

    match service.check_day(request).await {
        Ok(answer) => HttpResponse::Ok().json(CheckDayResponse::new(answer)),
        Err(e) => {
            log::error!("check_day error: {:?}", e);
            error_response(&e)
        }
    }
}

/// An empty body means "all defaults".
pub(crate) fn parse_request(body: &[u8]) -> Result<CheckDayRequest, PanchangError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CheckDayRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| PanchangError::ValidationError(e.to_string()))
}

fn error_response(error: &PanchangError) -> HttpResponse {
    match error {
        PanchangError::DataUnavailable => HttpResponse::InternalServerError()
            .json(CheckDayResponse::new(consts::PANCHANG_UNAVAILABLE)),
        PanchangError::ValidationError(msg) => HttpResponse::BadRequest().json(
            CheckDayResponse::new(format!("{}{}", consts::INVALID_BODY_PREFIX, msg)),
        ),
        other => HttpResponse::InternalServerError().json(CheckDayResponse::new(format!(
            "{}{}",
            consts::PROCESSING_ERROR_PREFIX,
            other
        ))),
    }
}
