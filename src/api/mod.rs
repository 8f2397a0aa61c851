// API module entry
// JSON endpoints consumed by the Mini App front-end

mod orders;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::http;
use crate::logger;

/// API route handler
///
/// Dispatches to handler functions based on request path and method
pub async fn handle_api_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path().to_string();
    let method = req.method().clone();
    let enable_cors = state.config.http.enable_cors;

    match (method.clone(), path.as_str()) {
        (Method::POST, "/api/order") => orders::create_order(req, state).await,
        (Method::OPTIONS, _) => Ok(http::build_options_response(enable_cors)),
        (_, "/api/order") => {
            logger::log_api_request(method.as_str(), &path, 405);
            Ok(response::method_not_allowed(enable_cors))
        }
        _ => {
            logger::log_api_request(method.as_str(), &path, 404);
            Ok(response::not_found(enable_cors))
        }
    }
}
