//! Process-wide middleware: request logging and security headers.

mod request_log;
mod security_headers;

pub use request_log::{log_requests, RequestLogger, RequestRecord, TracingRequestLogger};
pub use security_headers::{with_security_headers, SECURITY_HEADERS};
