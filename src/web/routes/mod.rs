// Route handler modules

pub mod health;
pub mod index;
pub mod launch;

use std::convert::Infallible;

use hyper::{Body, Method, Request, Response, StatusCode};

use super::models::SharedState;

/// Dispatch a request to its route handler.
pub async fn handle_request(
    req: Request<Body>,
    state: SharedState,
) -> Result<Response<Body>, Infallible> {
    match (req.method(), req.uri().path()) {
        (&Method::GET, "/") => index::handle().await,
        (&Method::GET, "/launch") => launch::handle(req, state).await,
        (&Method::GET, "/health") => health::handle().await,
        _ => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("Not Found"))
            .unwrap()),
    }
}
