//! Request logging hook.

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::state::AppState;

/// What the hook learns about each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    pub method: Method,
    /// Path including the query string, as received
    pub path: String,
    pub timestamp: DateTime<Utc>,
}

impl RequestRecord {
    fn from_request(request: &Request) -> Self {
        let path = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| request.uri().path().to_string());

        Self {
            method: request.method().clone(),
            path,
            timestamp: Utc::now(),
        }
    }
}

/// Observer for inbound requests.
///
/// Any `Fn(&RequestRecord)` closure is a logger, which lets tests capture or
/// silence request logging.
pub trait RequestLogger: Send + Sync {
    fn log(&self, record: &RequestRecord);
}

impl<F> RequestLogger for F
where
    F: Fn(&RequestRecord) + Send + Sync,
{
    fn log(&self, record: &RequestRecord) {
        self(record)
    }
}

/// Default logger, emits one `info` event per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRequestLogger;

impl RequestLogger for TracingRequestLogger {
    fn log(&self, record: &RequestRecord) {
        tracing::info!(
            "[{}] {} to {}",
            record.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            record.method,
            record.path
        );
    }
}

/// Middleware handing every request to the configured hook before routing.
pub async fn log_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state
        .request_logger
        .log(&RequestRecord::from_request(&request));

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use std::sync::{Arc, Mutex};

    #[test]
    fn record_keeps_query_string() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/users?name=Sam")
            .body(Body::empty())
            .unwrap();

        let record = RequestRecord::from_request(&request);
        assert_eq!(record.method, Method::GET);
        assert_eq!(record.path, "/api/users?name=Sam");
    }

    #[test]
    fn closures_are_loggers() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let logger: Arc<dyn RequestLogger> = Arc::new(move |record: &RequestRecord| {
            sink.lock().unwrap().push(record.path.clone());
        });

        logger.log(&RequestRecord {
            method: Method::DELETE,
            path: "/api/posts/3".to_string(),
            timestamp: Utc::now(),
        });

        assert_eq!(*seen.lock().unwrap(), vec!["/api/posts/3".to_string()]);
    }
}
