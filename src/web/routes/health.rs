// Health check route handler

use hyper::{Body, Response, StatusCode};
use std::convert::Infallible;

use crate::web::response_helpers::json_raw;

pub async fn handle() -> Result<Response<Body>, Infallible> {
    Ok(json_raw(
        StatusCode::OK,
        r#"{"status":"ok","service":"rom-launch-web"}"#.to_string(),
    ))
}
