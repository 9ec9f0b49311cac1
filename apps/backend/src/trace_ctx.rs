//! Task-local trace id for the request being served.
//!
//! `RequestTrace` opens the scope; error rendering and log helpers read it.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Placeholder returned outside any request scope.
pub const UNKNOWN: &str = "unknown";

/// The current request's trace id, or [`UNKNOWN`].
pub fn trace_id() -> String {
    current().unwrap_or_else(|| UNKNOWN.to_string())
}

/// The current request's trace id if a scope is active.
pub fn current() -> Option<String> {
    TRACE_ID.try_with(Clone::clone).ok()
}

/// Run `future` with `trace_id` visible to [`trace_id`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
