//! Order intake endpoint
//!
//! Accepts the Mini App's order form submission, logs a formatted summary,
//! hands the raw mapping to the store, and acknowledges the client.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use super::response;
use super::types::OrderSubmission;
use crate::config::{AppState, PersistFailurePolicy};
use crate::logger;
use crate::store;

/// Confirmation text returned to the client on success
const CONFIRMATION_MESSAGE: &str = "Заявка успешно отправлена!";

/// Handle `POST /api/order`
pub async fn create_order(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let enable_cors = state.config.http.enable_cors;

    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_api_error(&format!("Failed to read order body: {e}"));
            logger::log_api_request("POST", "/api/order", 500);
            return Ok(response::server_error(
                &format!("Failed to read request body: {e}"),
                enable_cors,
            ));
        }
    };

    Ok(process_submission(&state, &body))
}

/// Parse, log, persist, and answer a submitted order body
fn process_submission(state: &AppState, body: &[u8]) -> Response<Full<Bytes>> {
    let enable_cors = state.config.http.enable_cors;

    let submission = match OrderSubmission::from_slice(body) {
        Ok(s) => s,
        Err(e) => {
            logger::log_api_error(&format!("Error processing order: {e}"));
            logger::log_api_request("POST", "/api/order", 500);
            return response::server_error(&e, enable_cors);
        }
    };

    logger::log_order_received(&format_order_summary(&submission));

    // Telegram delivery is stubbed; the order goes to disk instead.
    match store::save_order(&state.config.orders.dir, submission.fields()) {
        Ok(path) => logger::log_order_saved(&path),
        Err(e) => {
            logger::log_error(&format!("Error saving order to file: {e}"));
            if state.config.orders.on_persist_failure == PersistFailurePolicy::Reject {
                logger::log_api_request("POST", "/api/order", 500);
                return response::server_error("Failed to save order", enable_cors);
            }
        }
    }

    logger::log_api_request("POST", "/api/order", 200);
    response::success(CONFIRMATION_MESSAGE, enable_cors)
}

/// Build the multi-line order summary emitted to the log
fn format_order_summary(submission: &OrderSubmission) -> String {
    format!(
        "⇨ Новый заказ из Telegram Mini App!\n\n\
         Клиент: {}\n\
         Услуга: {}\n\
         Контакт: {}\n\n\
         Описание:\n{}",
        submission.name().unwrap_or("-"),
        submission.service().unwrap_or("-"),
        submission.contact().unwrap_or("-"),
        submission.description().unwrap_or("-"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        Config, HttpConfig, LoggingConfig, OrdersConfig, ServerConfig, StaticConfig,
    };
    use hyper::StatusCode;
    use serde_json::{Map, Value};

    fn test_state(orders_dir: &str, policy: PersistFailurePolicy) -> AppState {
        AppState::new(Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
                max_connections: None,
                keep_alive_timeout: 75,
                request_timeout: 30,
            },
            http: HttpConfig {
                server_name: "test".to_string(),
                enable_cors: true,
                max_body_size: 1024,
            },
            statics: StaticConfig {
                dir: "public".to_string(),
                index_file: "index.html".to_string(),
            },
            orders: OrdersConfig {
                dir: orders_dir.to_string(),
                on_persist_failure: policy,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
                access_log_format: "combined".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
            session_secret: "test".to_string(),
        })
    }

    async fn body_json(response: Response<Full<Bytes>>) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_valid_submission_acknowledged_and_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let orders_dir = dir.path().join("orders");
        let state = test_state(orders_dir.to_str().unwrap(), PersistFailurePolicy::Ignore);

        let body = r#"{"name": "Иван", "service": "bot", "contact": "@ivan", "description": "тест"}"#;
        let response = process_submission(&state, body.as_bytes());
        assert_eq!(response.status(), StatusCode::OK);

        let payload = body_json(response).await;
        assert_eq!(payload["status"], "success");
        assert_eq!(payload["message"], CONFIRMATION_MESSAGE);

        let entries: Vec<_> = std::fs::read_dir(&orders_dir).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let saved: Map<String, Value> = serde_json::from_str(
            &std::fs::read_to_string(entries[0].as_ref().unwrap().path()).unwrap(),
        )
        .unwrap();
        assert_eq!(saved["name"], "Иван");
        assert_eq!(saved["description"], "тест");
    }

    #[tokio::test]
    async fn test_partial_submission_still_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let orders_dir = dir.path().join("orders");
        let state = test_state(orders_dir.to_str().unwrap(), PersistFailurePolicy::Ignore);

        let response = process_submission(&state, br#"{"name": "Anna"}"#);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "success");
    }

    #[tokio::test]
    async fn test_malformed_body_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(
            dir.path().join("orders").to_str().unwrap(),
            PersistFailurePolicy::Ignore,
        );

        let response = process_submission(&state, b"not json");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let payload = body_json(response).await;
        assert_eq!(payload["status"], "error");
        assert!(payload["message"].as_str().unwrap().contains("Invalid JSON"));
    }

    #[tokio::test]
    async fn test_persist_failure_swallowed_by_default() {
        let dir = tempfile::tempdir().unwrap();
        // A plain file where the orders directory should be forces the write to fail
        let blocker = dir.path().join("orders");
        std::fs::write(&blocker, b"blocker").unwrap();
        let state = test_state(blocker.to_str().unwrap(), PersistFailurePolicy::Ignore);

        let response = process_submission(&state, br#"{"name": "Anna"}"#);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "success");
    }

    #[tokio::test]
    async fn test_persist_failure_surfaced_when_rejecting() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("orders");
        std::fs::write(&blocker, b"blocker").unwrap();
        let state = test_state(blocker.to_str().unwrap(), PersistFailurePolicy::Reject);

        let response = process_submission(&state, br#"{"name": "Anna"}"#);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["status"], "error");
    }

    #[test]
    fn test_summary_embeds_fields() {
        let submission = OrderSubmission::from_slice(
            r#"{"name": "Иван", "service": "bot", "contact": "@ivan", "description": "два\nабзаца"}"#
                .as_bytes(),
        )
        .unwrap();
        let summary = format_order_summary(&submission);
        assert!(summary.starts_with("⇨ Новый заказ из Telegram Mini App!"));
        assert!(summary.contains("Клиент: Иван"));
        assert!(summary.contains("Услуга: bot"));
        assert!(summary.contains("Контакт: @ivan"));
        assert!(summary.contains("Описание:\nдва\nабзаца"));
    }

    #[test]
    fn test_summary_placeholders_for_missing_fields() {
        let submission = OrderSubmission::from_slice(b"{}").unwrap();
        let summary = format_order_summary(&submission);
        assert!(summary.contains("Клиент: -"));
        assert!(summary.contains("Услуга: -"));
        assert!(summary.contains("Контакт: -"));
        assert!(summary.contains("Описание:\n-"));
    }
}
