use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::response::REQUEST_PATH;

/// Run the rest of the stack with the request path in scope, so envelopes
/// built anywhere below (handlers, rejections, the panic handler) report it.
pub async fn capture_request_path(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    REQUEST_PATH.scope(path, next.run(req)).await
}
