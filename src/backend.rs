use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderValue, Uri},
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde::Serialize;
use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use thiserror::Error;
use tower_http::{compression::CompressionLayer, services::ServeDir};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_COMPRESSION: bool = true;
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const ENTRY_PATH: &str = "/";
const REQUEST_ID_HEADER: &str = "x-request-id";
const REQUEST_LOG_LEVEL: LogLevel = LogLevel::Info;

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

/// Ordered from most to least verbose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
struct ServerConfig {
    port: u16,
    static_dir: PathBuf,
    log_level: LogLevel,
    compression: bool,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            port: parse_env_u16_with_bounds("PORT", DEFAULT_PORT, PORT_BOUNDS),
            static_dir: parse_env_non_empty_string("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            log_level: parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            compression: parse_env_bool("SERVER_COMPRESSION", DEFAULT_COMPRESSION),
        }
    }
}

pub async fn run() -> Result<(), ServerError> {
    let config = Arc::new(ServerConfig::from_env());
    let bind_address = format!("0.0.0.0:{}", config.port);
    let app = router(Arc::clone(&config));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|source| ServerError::Bind {
            address: bind_address.clone(),
            source,
        })?;

    log_event(
        &config,
        LogLevel::Info,
        "server_listening",
        serde_json::json!({
            "address": bind_address,
            "config": &*config,
        }),
    );

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

fn router(config: Arc<ServerConfig>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);
    let app = Router::new().fallback_service(static_service);

    let app = if config.compression {
        app.layer(CompressionLayer::new())
    } else {
        app
    };

    // Only the fallback is routed, so rewriting inside the router still
    // reaches the file service with the new path.
    app.layer(middleware::map_request(rewrite_client_routes))
        .layer(middleware::from_fn_with_state(config, log_requests))
}

/// Paths the dev server and static host must pass through untouched: files,
/// bundler internals and the entry itself.
fn is_asset_path(path: &str) -> bool {
    path.contains('.') || path.starts_with("/@") || path.starts_with("/node_modules")
}

/// Client-side routes resolve to the entry document so deep links survive a
/// refresh. Returns the replacement path, if any. The query string is not
/// carried over.
fn entry_rewrite(path: &str) -> Option<&'static str> {
    if path.is_empty() || path == ENTRY_PATH || is_asset_path(path) {
        return None;
    }
    Some(ENTRY_PATH)
}

async fn rewrite_client_routes(mut request: Request) -> Request {
    if let Some(target) = entry_rewrite(request.uri().path()) {
        *request.uri_mut() = Uri::from_static(target);
    }
    request
}

async fn log_requests(
    axum::extract::State(config): axum::extract::State<Arc<ServerConfig>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let rewritten = entry_rewrite(&path).is_some();

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    log_event(
        &config,
        REQUEST_LOG_LEVEL,
        "request_complete",
        serde_json::json!({
            "request_id": request_id,
            "method": method.as_str(),
            "path": path,
            "rewritten": rewritten,
            "status": response.status().as_u16(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    response
}

fn parse_env_u16_with_bounds(name: &str, default: u16, bounds: (u16, u16)) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_env_bool(name: &str, default: bool) -> bool {
    parse_bool(parse_env_non_empty_string(name).as_deref(), default)
}

fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("1" | "true" | "yes" | "on") => true,
        Some("0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    log_level_from_str(parse_env_non_empty_string(name).as_deref(), default)
}

fn log_level_from_str(value: Option<&str>, default: LogLevel) -> LogLevel {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("debug") => LogLevel::Debug,
        Some("info") => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn log_enabled(config: &ServerConfig, level: LogLevel) -> bool {
    level >= config.log_level
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if !log_enabled(config, level) {
        return;
    }

    println!("{}", log_line(level, event, fields));
}

fn log_line(level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::to_bytes,
        http::{header, Request, StatusCode},
    };
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const INDEX_HTML: &str = "<!doctype html><div id=\"app\"></div>";

    fn site_dir() -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("index.html"), INDEX_HTML).expect("write index");
        fs::create_dir(dir.path().join("projects")).expect("create projects dir");
        fs::write(dir.path().join("projects/verdict-ai.png"), b"png").expect("write asset");
        dir
    }

    fn test_config(dir: &TempDir) -> Arc<ServerConfig> {
        config_with_compression(dir, false)
    }

    fn config_with_compression(dir: &TempDir, compression: bool) -> Arc<ServerConfig> {
        Arc::new(ServerConfig {
            port: DEFAULT_PORT,
            static_dir: dir.path().to_path_buf(),
            log_level: DEFAULT_LOG_LEVEL,
            compression,
        })
    }

    async fn get_gzip(app: Router, uri: &str) -> Response {
        app.oneshot(
            Request::builder()
                .uri(uri)
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("infallible router")
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("infallible router")
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[test]
    fn client_routes_rewrite_to_entry() {
        assert_eq!(entry_rewrite("/about"), Some("/"));
        assert_eq!(entry_rewrite("/contact/"), Some("/"));
        assert_eq!(entry_rewrite("/resume/work"), Some("/"));
    }

    #[test]
    fn entry_and_assets_pass_through() {
        assert_eq!(entry_rewrite("/"), None);
        assert_eq!(entry_rewrite(""), None);
        assert_eq!(entry_rewrite("/projects/verdict-ai.png"), None);
        assert_eq!(entry_rewrite("/folio-1a2b.wasm"), None);
        assert_eq!(entry_rewrite("/@vite/client"), None);
        assert_eq!(entry_rewrite("/node_modules/pkg"), None);
    }

    #[tokio::test]
    async fn deep_link_serves_entry_document() {
        let dir = site_dir();
        let response = get(router(test_config(&dir)), "/about?ref=nav").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, INDEX_HTML);
    }

    #[tokio::test]
    async fn assets_are_served_as_files() {
        let dir = site_dir();
        let response = get(router(test_config(&dir)), "/projects/verdict-ai.png").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("image/png")
        );
    }

    #[tokio::test]
    async fn missing_asset_is_not_found_instead_of_entry() {
        let dir = site_dir();
        let response = get(router(test_config(&dir)), "/missing.js").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn request_id_is_echoed_or_generated() {
        let dir = site_dir();
        let app = router(test_config(&dir));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, "abc-123")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("infallible router");
        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).and_then(|v| v.to_str().ok()),
            Some("abc-123")
        );

        let response = get(app, "/").await;
        let generated = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .expect("generated request id");
        assert!(generated.starts_with("req-"));
    }

    #[tokio::test]
    async fn compression_gzips_when_enabled() {
        let dir = site_dir();
        let app = router(config_with_compression(&dir, true));
        let response = get_gzip(app, "/resume/work?x=1").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_ENCODING).and_then(|v| v.to_str().ok()),
            Some("gzip")
        );
    }

    #[tokio::test]
    async fn compression_disabled_leaves_body_plain() {
        let dir = site_dir();
        let app = router(config_with_compression(&dir, false));
        let response = get_gzip(app, "/resume/work").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CONTENT_ENCODING).is_none());
        assert_eq!(body_text(response).await, INDEX_HTML);
    }

    #[test]
    fn successful_requests_are_logged_at_default_level() {
        let dir = site_dir();
        let config = test_config(&dir);

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(log_enabled(&config, REQUEST_LOG_LEVEL));
        assert!(!log_enabled(&config, LogLevel::Debug));
    }

    #[test]
    fn invalid_settings_fall_back_to_defaults() {
        assert_eq!(log_level_from_str(Some("DEBUG"), LogLevel::Info), LogLevel::Debug);
        assert_eq!(log_level_from_str(Some("verbose"), LogLevel::Info), LogLevel::Info);
        assert!(!parse_bool(Some("off"), true));
        assert!(parse_bool(Some("maybe"), true));
        assert!(parse_bool(None, true));
    }

    #[test]
    fn log_line_merges_fields_after_envelope() {
        let line = log_line(
            LogLevel::Info,
            "request_complete",
            serde_json::json!({ "status": 200 }),
        );

        assert_eq!(line["level"], "info");
        assert_eq!(line["event"], "request_complete");
        assert_eq!(line["status"], 200);
        assert!(line["ts"].is_u64());
    }
}
