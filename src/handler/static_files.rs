//! Static file serving module
//!
//! Serves the Mini App front-end from the public asset directory: file
//! loading, traversal protection, MIME inference, and conditional-GET
//! responses.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;

/// Serve the landing document for the root path
pub async fn serve_index(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let statics = &state.config.statics;
    let enable_cors = state.config.http.enable_cors;
    let index_path = Path::new(&statics.dir).join(&statics.index_file);

    match fs::read(&index_path).await {
        Ok(content) => build_asset_response(&content, "text/html; charset=utf-8", ctx, enable_cors),
        Err(e) => {
            logger::log_warning(&format!(
                "Landing page '{}' unavailable ({e}), serving built-in fallback",
                index_path.display()
            ));
            http::response::build_html_response(default_landing_page(), ctx.is_head, enable_cors)
        }
    }
}

/// Serve a file from the public directory
pub async fn serve_path(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let statics = &state.config.statics;

    match load_from_directory(&statics.dir, ctx.path, &statics.index_file).await {
        Some((content, content_type)) => {
            build_asset_response(&content, content_type, ctx, state.config.http.enable_cors)
        }
        None => http::build_404_response(),
    }
}

/// Build a 200/304 asset response with cache validators
fn build_asset_response(
    data: &[u8],
    content_type: &str,
    ctx: &RequestContext<'_>,
    enable_cors: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    http::response::build_cached_response(
        Bytes::from(data.to_owned()),
        content_type,
        &etag,
        ctx.is_head,
        enable_cors,
    )
}

/// Load a static file from the public directory
///
/// Strips the leading slash, removes `..` components, resolves the index
/// file for directory paths, and verifies the canonicalised target stays
/// inside the public directory.
pub async fn load_from_directory(
    static_dir: &str,
    path: &str,
    index_file: &str,
) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");
    let mut file_path = Path::new(static_dir).join(&clean_path);

    let static_dir_canonical = match Path::new(static_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    // Directory paths resolve to their index file
    if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
        let index_path = file_path.join(index_file);
        if index_path.is_file() {
            file_path = index_path;
        }
    }

    // File not found is common (404), no need to log at warning level
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Built-in landing page used when the on-disk index file is missing
pub fn default_landing_page() -> String {
    String::from(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Заказ услуг</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
            background: #000000;
            color: #ffffff;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            margin: 0;
        }
        .container {
            text-align: center;
            padding: 40px;
            max-width: 480px;
        }
        h1 { color: #ff0000; }
        p { opacity: 0.85; line-height: 1.6; }
        code {
            background: #1a1a1a;
            padding: 2px 6px;
            border-radius: 4px;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Заказ услуг</h1>
        <p>Сервер работает, но файлы фронтенда не найдены.</p>
        <p>Положите мини-приложение в каталог <code>public/</code>,
           форма заказов отправляется на <code>POST /api/order</code>.</p>
    </div>
</body>
</html>"#,
    )
}
