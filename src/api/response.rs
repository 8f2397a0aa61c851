// API response utility functions module

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::Value;

/// The `{"status": ..., "message": ...}` payload every API response carries
pub fn status_payload(status: &str, message: &str) -> Value {
    serde_json::json!({
        "status": status,
        "message": message,
    })
}

/// 200 success acknowledgment
pub fn success(message: &str, enable_cors: bool) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &status_payload("success", message), enable_cors)
}

/// 500 error response with the failure's string representation
pub fn server_error(message: &str, enable_cors: bool) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        &status_payload("error", message),
        enable_cors,
    )
}

/// 404 for unknown API paths
pub fn not_found(enable_cors: bool) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::NOT_FOUND,
        &status_payload("error", "Not Found"),
        enable_cors,
    )
}

/// 405 for wrong methods on known API paths
pub fn method_not_allowed(enable_cors: bool) -> Response<Full<Bytes>> {
    let body = status_payload("error", "Method Not Allowed");
    let json = body.to_string();

    let mut builder = Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "application/json")
        .header("Allow", "POST, OPTIONS");

    if enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder.body(Full::new(Bytes::from(json))).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to build 405 response: {e}"));
        Response::new(Full::new(Bytes::from("Method Not Allowed")))
    })
}

/// Build a JSON response
pub fn json_response(
    status: StatusCode,
    body: &Value,
    enable_cors: bool,
) -> Response<Full<Bytes>> {
    let json = body.to_string();

    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json");

    if enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder.body(Full::new(Bytes::from(json))).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to build response: {e}"));
        Response::new(Full::new(Bytes::from("Error")))
    })
}
