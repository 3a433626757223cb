//! Mapping of mediator results onto HTTP responses

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use inv_core::application::{Handler, Mediator, Request, RequestContext};
use inv_shared::{error_codes, ApiResponse, ErrorResponse, FieldErrors};

/// Run `request` through the mediator
///
/// The cancellation token fires when the handler future is dropped, e.g.
/// when the client disconnects.
pub async fn dispatch<R>(mediator: &Mediator, request: R, ctx: RequestContext) -> ApiResponse<R::Output>
where
    R: Request,
    Mediator: Handler<R>,
{
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();
    mediator.send(request, &ctx, &cancel).await
}

/// Envelope with the failure's status, or `success` when the request succeeded
pub fn respond<T: Serialize>(response: ApiResponse<T>, success: StatusCode) -> HttpResponse {
    let status = match response.failure {
        Some(kind) => StatusCode::from_u16(kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        None => success,
    };
    HttpResponse::build(status).json(response)
}

pub fn ok<T: Serialize>(response: ApiResponse<T>) -> HttpResponse {
    respond(response, StatusCode::OK)
}

pub fn created<T: Serialize>(response: ApiResponse<T>) -> HttpResponse {
    respond(response, StatusCode::CREATED)
}

/// PDF attachment on success, the JSON envelope otherwise
pub fn pdf_attachment(response: ApiResponse<Vec<u8>>, file_stem: &str) -> HttpResponse {
    match (response.is_success, response.data) {
        (true, Some(bytes)) => {
            let file_name = format!("{}-{}.pdf", file_stem, chrono::Utc::now().format("%Y%m%d%H%M%S"));
            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header(ContentDisposition {
                    disposition: DispositionType::Attachment,
                    parameters: vec![DispositionParam::Filename(file_name)],
                })
                .body(bytes)
        }
        _ => ok(ApiResponse::<()> {
            is_success: false,
            data: None,
            message: response.message,
            errors: response.errors,
            failure: response.failure,
        }),
    }
}

/// 400 for a body or query string that could not be deserialized
pub fn bad_request(source: &str, detail: String, _req: &HttpRequest) -> HttpResponse {
    let mut errors = FieldErrors::new();
    errors.insert(source.to_string(), vec![detail]);
    HttpResponse::BadRequest().json(
        ErrorResponse::new(400, error_codes::BAD_REQUEST, format!("Invalid request {}", source))
            .with_errors(errors),
    )
}

/// Fallback for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        404,
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
